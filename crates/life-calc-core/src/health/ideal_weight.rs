use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::round_2dp;
use crate::LifeCalcResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightInput {
    pub height_cm: Decimal,
    pub weight_kg: Decimal,
    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightOutput {
    pub ideal_weight_kg: Decimal,
    /// Deviation from the standard weight, as a percentage.
    pub obesity_rate_pct: Decimal,
}

/// Standard weight by the Broca-derived coefficient formula, 22 for men
/// and 21 for women times height in meters squared.
pub fn ideal_weight(input: &IdealWeightInput) -> LifeCalcResult<IdealWeightOutput> {
    if input.height_cm <= Decimal::ZERO {
        return Err(LifeCalcError::InvalidInput {
            field: "height_cm".into(),
            reason: "height must be positive".into(),
        });
    }

    let height_m = input.height_cm / dec!(100);
    let coefficient = match input.gender {
        Gender::Male => dec!(22),
        Gender::Female => dec!(21),
    };
    let standard = coefficient * height_m * height_m;
    let obesity_rate = (input.weight_kg - standard) / standard * dec!(100);

    Ok(IdealWeightOutput {
        ideal_weight_kg: round_2dp(standard),
        obesity_rate_pct: round_2dp(obesity_rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_male_coefficient() {
        let result = ideal_weight(&IdealWeightInput {
            height_cm: dec!(175),
            weight_kg: dec!(70),
            gender: Gender::Male,
        })
        .unwrap();

        // 22 * 1.75^2 = 67.375
        assert_eq!(result.ideal_weight_kg, dec!(67.38));
        // (70 - 67.375) / 67.375 * 100 ≈ 3.90
        assert_eq!(result.obesity_rate_pct, dec!(3.90));
    }

    #[test]
    fn test_female_coefficient() {
        let result = ideal_weight(&IdealWeightInput {
            height_cm: dec!(160),
            weight_kg: dec!(53.76),
            gender: Gender::Female,
        })
        .unwrap();

        // 21 * 1.6^2 = 53.76, exactly on the standard
        assert_eq!(result.ideal_weight_kg, dec!(53.76));
        assert_eq!(result.obesity_rate_pct, dec!(0.00));
    }
}
