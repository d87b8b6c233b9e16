use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{round_unit, Money};
use crate::LifeCalcResult;

/// Average daily wage is taken over the last 90 calendar days.
const AVERAGING_DAYS: Decimal = dec!(90);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverancePayInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Gross wages for the last three months, oldest first.
    pub last_three_months_salaries: Vec<Money>,
    #[serde(default)]
    pub annual_bonus: Money,
    #[serde(default)]
    pub annual_leave_allowance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverancePayOutput {
    pub expected_severance_pay: Money,
    pub average_daily_wage: Money,
}

/// Statutory severance: 30 days of average wage per year of service.
pub fn severance_pay(input: &SeverancePayInput) -> LifeCalcResult<SeverancePayOutput> {
    if input.end_date < input.start_date {
        return Err(LifeCalcError::InvalidInput {
            field: "end_date".into(),
            reason: "end_date must not precede start_date".into(),
        });
    }
    if input.last_three_months_salaries.len() != 3 {
        return Err(LifeCalcError::InvalidInput {
            field: "last_three_months_salaries".into(),
            reason: "expected exactly three monthly amounts".into(),
        });
    }

    let total_service_days = (input.end_date - input.start_date).num_days();

    let three_month_total: Decimal = input.last_three_months_salaries.iter().sum();
    // A twelfth of the annual extras counts toward the averaging window
    let included_salary =
        three_month_total + input.annual_bonus / dec!(12) + input.annual_leave_allowance / dec!(12);

    let average_daily_wage = included_salary / AVERAGING_DAYS;
    let expected =
        average_daily_wage * dec!(30) * Decimal::from(total_service_days) / dec!(365);

    Ok(SeverancePayOutput {
        expected_severance_pay: round_unit(expected),
        average_daily_wage: round_unit(average_daily_wage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> SeverancePayInput {
        SeverancePayInput {
            start_date: date(2019, 1, 1),
            end_date: date(2024, 1, 1),
            last_three_months_salaries: vec![dec!(3_000_000), dec!(3_000_000), dec!(3_000_000)],
            annual_bonus: dec!(0),
            annual_leave_allowance: dec!(0),
        }
    }

    #[test]
    fn test_five_years_of_service() {
        let result = severance_pay(&input()).unwrap();

        // 9M over 90 days -> 100k daily
        assert_eq!(result.average_daily_wage, dec!(100_000));
        // 100k * 30 * 1826 / 365 ≈ 15,008,219
        assert_eq!(result.expected_severance_pay, dec!(15_008_219));
    }

    #[test]
    fn test_bonus_and_allowance_raise_daily_wage() {
        let mut with_extras = input();
        with_extras.annual_bonus = dec!(3_600_000);
        with_extras.annual_leave_allowance = dec!(1_200_000);
        let result = severance_pay(&with_extras).unwrap();

        // (9M + 300k + 100k) / 90 ≈ 104,444
        assert_eq!(result.average_daily_wage, dec!(104_444));
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut bad = input();
        bad.end_date = date(2018, 1, 1);
        assert!(severance_pay(&bad).is_err());
    }

    #[test]
    fn test_wrong_salary_count_rejected() {
        let mut bad = input();
        bad.last_three_months_salaries = vec![dec!(3_000_000), dec!(3_000_000)];
        assert!(severance_pay(&bad).is_err());
    }
}
