use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::round_2dp;
use crate::LifeCalcResult;

/// Korean Society for the Study of Obesity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiOutput {
    pub bmi: Decimal,
    pub category: BmiCategory,
}

/// Body mass index: weight in kg over height in meters squared.
pub fn bmi(height_cm: Decimal, weight_kg: Decimal) -> LifeCalcResult<BmiOutput> {
    if height_cm <= Decimal::ZERO {
        return Err(LifeCalcError::InvalidInput {
            field: "height_cm".into(),
            reason: "height must be positive".into(),
        });
    }

    let height_m = height_cm / dec!(100);
    let index = weight_kg / (height_m * height_m);

    let category = if index < dec!(18.5) {
        BmiCategory::Underweight
    } else if index < dec!(23) {
        BmiCategory::Normal
    } else if index < dec!(25) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Ok(BmiOutput {
        bmi: round_2dp(index),
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normal_range() {
        let result = bmi(dec!(175), dec!(68)).unwrap();
        assert_eq!(result.bmi, dec!(22.20));
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_band_boundaries() {
        // 18.5 exactly lands in Normal, 23 in Overweight, 25 in Obese
        assert_eq!(bmi(dec!(100), dec!(18.4)).unwrap().category, BmiCategory::Underweight);
        assert_eq!(bmi(dec!(100), dec!(18.5)).unwrap().category, BmiCategory::Normal);
        assert_eq!(bmi(dec!(100), dec!(23)).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(dec!(100), dec!(25)).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_zero_height_rejected() {
        assert!(bmi(dec!(0), dec!(70)).is_err());
    }
}
