mod capital;
mod income;
mod misc;

pub use capital::{
    dividend_income_tax, financial_income_tax, interest_income_tax, transfer_income_tax,
    TransferIncomeTaxInput, TransferPropertyType,
};
pub use income::{
    business_income_tax, composite_income_tax, income_tax, social_insurance,
    BusinessIncomeTaxInput, CompositeIncomeTaxInput, IncomeTaxInput,
};
pub use misc::{
    car_tax, corporation_tax, pension_income_tax, retirement_income_tax, CarTaxInput,
    CarTaxOutput, CarType, PensionType, RetirementIncomeTaxInput,
};

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Common output shape for the single-figure tax calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResult {
    pub tax_name: String,
    pub tax_amount: Money,
    pub details: String,
}

/// 2024 personal income brackets: 6% to 12M, 15% to 46M, 24% to 88M, 35% above.
pub(crate) fn progressive_income_tax(taxable: Money) -> Money {
    if taxable <= dec!(12_000_000) {
        taxable * dec!(0.06)
    } else if taxable <= dec!(46_000_000) {
        dec!(12_000_000) * dec!(0.06) + (taxable - dec!(12_000_000)) * dec!(0.15)
    } else if taxable <= dec!(88_000_000) {
        dec!(12_000_000) * dec!(0.06)
            + (dec!(46_000_000) - dec!(12_000_000)) * dec!(0.15)
            + (taxable - dec!(46_000_000)) * dec!(0.24)
    } else {
        dec!(12_000_000) * dec!(0.06)
            + (dec!(46_000_000) - dec!(12_000_000)) * dec!(0.15)
            + (dec!(88_000_000) - dec!(46_000_000)) * dec!(0.24)
            + (taxable - dec!(88_000_000)) * dec!(0.35)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries_are_continuous() {
        let at_12m = progressive_income_tax(dec!(12_000_000));
        let just_over = progressive_income_tax(dec!(12_000_001));
        assert!(just_over - at_12m < dec!(1));

        let at_88m = progressive_income_tax(dec!(88_000_000));
        let just_over = progressive_income_tax(dec!(88_000_001));
        assert!(just_over - at_88m < dec!(1));
    }

    #[test]
    fn test_bracket_rates() {
        assert_eq!(progressive_income_tax(dec!(10_000_000)), dec!(600_000));
        // 720k + 34M * 0.15 = 5,820,000
        assert_eq!(progressive_income_tax(dec!(46_000_000)), dec!(5_820_000));
        // 5.82M + 42M * 0.24 = 15,900,000
        assert_eq!(progressive_income_tax(dec!(88_000_000)), dec!(15_900_000));
        // 15.9M + 12M * 0.35 = 20,100,000
        assert_eq!(progressive_income_tax(dec!(100_000_000)), dec!(20_100_000));
    }
}
