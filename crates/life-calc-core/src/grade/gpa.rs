use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::round_2dp;
use crate::LifeCalcResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeScale {
    /// Korean 4.5 scale, plus grades only.
    FourPointFive,
    /// 4.3 scale with minus grades.
    FourPointThree,
}

impl GradeScale {
    fn ceiling(self) -> Decimal {
        match self {
            GradeScale::FourPointFive => dec!(4.5),
            GradeScale::FourPointThree => dec!(4.3),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub course_name: String,
    pub credits: u32,
    /// Letter grade, "A+" through "F".
    pub grade: String,
    pub is_major: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaOutput {
    pub total_gpa_4_5: Decimal,
    pub total_gpa_4_3: Decimal,
    pub major_gpa_4_5: Decimal,
    pub major_gpa_4_3: Decimal,
    pub total_credits: u32,
    pub major_credits: u32,
}

/// Unrecognized letters count as zero, same as an F.
fn grade_to_point(grade: &str, scale: GradeScale) -> Decimal {
    match scale {
        GradeScale::FourPointFive => match grade {
            "A+" => dec!(4.5),
            "A" => dec!(4.0),
            "B+" => dec!(3.5),
            "B" => dec!(3.0),
            "C+" => dec!(2.5),
            "C" => dec!(2.0),
            "D+" => dec!(1.5),
            "D" => dec!(1.0),
            _ => Decimal::ZERO,
        },
        GradeScale::FourPointThree => match grade {
            "A+" => dec!(4.3),
            "A" => dec!(4.0),
            "A-" => dec!(3.7),
            "B+" => dec!(3.3),
            "B" => dec!(3.0),
            "B-" => dec!(2.7),
            "C+" => dec!(2.3),
            "C" => dec!(2.0),
            "C-" => dec!(1.7),
            "D+" => dec!(1.3),
            "D" => dec!(1.0),
            "D-" => dec!(0.7),
            _ => Decimal::ZERO,
        },
    }
}

/// Credit-weighted GPA on both scales, overall and for major courses.
/// Major figures are zero when no course is flagged as major.
pub fn compute_gpa(courses: &[Course]) -> LifeCalcResult<GpaOutput> {
    if courses.is_empty() {
        return Err(LifeCalcError::InvalidInput {
            field: "courses".into(),
            reason: "at least one course is required".into(),
        });
    }

    let mut total_points_4_5 = Decimal::ZERO;
    let mut total_points_4_3 = Decimal::ZERO;
    let mut major_points_4_5 = Decimal::ZERO;
    let mut major_points_4_3 = Decimal::ZERO;
    let mut total_credits = 0u32;
    let mut major_credits = 0u32;

    for course in courses {
        let credits = Decimal::from(course.credits);
        let point_4_5 = grade_to_point(&course.grade, GradeScale::FourPointFive) * credits;
        let point_4_3 = grade_to_point(&course.grade, GradeScale::FourPointThree) * credits;

        total_points_4_5 += point_4_5;
        total_points_4_3 += point_4_3;
        total_credits += course.credits;

        if course.is_major {
            major_points_4_5 += point_4_5;
            major_points_4_3 += point_4_3;
            major_credits += course.credits;
        }
    }

    if total_credits == 0 {
        return Err(LifeCalcError::DivisionByZero {
            context: "GPA over zero total credits".into(),
        });
    }

    let total_credits_dec = Decimal::from(total_credits);
    let (major_gpa_4_5, major_gpa_4_3) = if major_credits > 0 {
        let major_credits_dec = Decimal::from(major_credits);
        (
            round_2dp(major_points_4_5 / major_credits_dec),
            round_2dp(major_points_4_3 / major_credits_dec),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    Ok(GpaOutput {
        total_gpa_4_5: round_2dp(total_points_4_5 / total_credits_dec),
        total_gpa_4_3: round_2dp(total_points_4_3 / total_credits_dec),
        major_gpa_4_5,
        major_gpa_4_3,
        total_credits,
        major_credits,
    })
}

/// Rescale a GPA figure between the 4.5 and 4.3 scales by ratio.
pub fn convert_score(score: Decimal, current_scale: GradeScale) -> Decimal {
    let (from, to) = match current_scale {
        GradeScale::FourPointFive => (GradeScale::FourPointFive, GradeScale::FourPointThree),
        GradeScale::FourPointThree => (GradeScale::FourPointThree, GradeScale::FourPointFive),
    };
    round_2dp(score * to.ceiling() / from.ceiling())
}
