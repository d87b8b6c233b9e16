use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::round_2dp;

/// 1 pyeong = 3.3058 m².
const SQUARE_METERS_PER_PYEONG: Decimal = dec!(3.3058);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Pyeong,
    SquareMeters,
}

/// Convert an area figure into the requested unit, rounded to 2dp.
pub fn convert_area(value: Decimal, convert_to: AreaUnit) -> Decimal {
    match convert_to {
        AreaUnit::SquareMeters => round_2dp(value * SQUARE_METERS_PER_PYEONG),
        AreaUnit::Pyeong => round_2dp(value / SQUARE_METERS_PER_PYEONG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pyeong_to_square_meters() {
        assert_eq!(convert_area(dec!(25), AreaUnit::SquareMeters), dec!(82.65));
    }

    #[test]
    fn test_square_meters_to_pyeong() {
        assert_eq!(convert_area(dec!(84), AreaUnit::Pyeong), dec!(25.41));
    }

    #[test]
    fn test_round_trip_stays_close() {
        let there = convert_area(dec!(34), AreaUnit::SquareMeters);
        let back = convert_area(there, AreaUnit::Pyeong);
        assert!((back - dec!(34)).abs() < dec!(0.01));
    }
}
