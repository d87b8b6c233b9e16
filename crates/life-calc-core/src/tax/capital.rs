use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_unit, Money, Rate};

use super::TaxResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferPropertyType {
    House,
    Land,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferIncomeTaxInput {
    pub transfer_amount: Money,
    pub acquisition_amount: Money,
    pub necessary_expenses: Money,
    pub ownership_period_years: u32,
    pub property_type: TransferPropertyType,
}

/// Capital gains tax on a property transfer. Houses held 10+ years get the
/// reduced rate; land and other assets pay a flat 30%.
pub fn transfer_income_tax(input: &TransferIncomeTaxInput) -> TaxResult {
    let capital_gain =
        input.transfer_amount - input.acquisition_amount - input.necessary_expenses;

    let rate: Rate = match input.property_type {
        TransferPropertyType::House => {
            if input.ownership_period_years >= 10 {
                dec!(0.1)
            } else {
                dec!(0.2)
            }
        }
        TransferPropertyType::Land | TransferPropertyType::Other => dec!(0.3),
    };

    TaxResult {
        tax_name: "Transfer income tax".to_string(),
        tax_amount: round_unit(capital_gain * rate),
        details: format!(
            "Capital gain taxed at {}. Transfer: {}, acquisition: {}, expenses: {}, \
             held {} years",
            rate,
            input.transfer_amount,
            input.acquisition_amount,
            input.necessary_expenses,
            input.ownership_period_years
        ),
    }
}

/// Financial income aggregation: 15% above the 20M threshold, 14% below.
pub fn financial_income_tax(financial_income: Money) -> TaxResult {
    let rate: Rate = if financial_income > dec!(20_000_000) {
        dec!(0.15)
    } else {
        dec!(0.14)
    };

    TaxResult {
        tax_name: "Financial income tax".to_string(),
        tax_amount: round_unit(financial_income * rate),
        details: format!("Financial income {} taxed at {}", financial_income, rate),
    }
}

/// Flat 15% withholding on interest income.
pub fn interest_income_tax(interest_income: Money) -> TaxResult {
    TaxResult {
        tax_name: "Interest income tax".to_string(),
        tax_amount: round_unit(interest_income * dec!(0.15)),
        details: format!("Interest income {} taxed at 15%", interest_income),
    }
}

/// Flat 15% withholding on dividend income.
pub fn dividend_income_tax(dividend_income: Money) -> TaxResult {
    TaxResult {
        tax_name: "Dividend income tax".to_string(),
        tax_amount: round_unit(dividend_income * dec!(0.15)),
        details: format!("Dividend income {} taxed at 15%", dividend_income),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transfer_input(property_type: TransferPropertyType, years: u32) -> TransferIncomeTaxInput {
        TransferIncomeTaxInput {
            transfer_amount: dec!(900_000_000),
            acquisition_amount: dec!(600_000_000),
            necessary_expenses: dec!(50_000_000),
            ownership_period_years: years,
            property_type,
        }
    }

    #[test]
    fn test_transfer_tax_long_held_house() {
        // Gain 250M at 10%
        let result = transfer_income_tax(&transfer_input(TransferPropertyType::House, 12));
        assert_eq!(result.tax_amount, dec!(25_000_000));
    }

    #[test]
    fn test_transfer_tax_short_held_house() {
        let result = transfer_income_tax(&transfer_input(TransferPropertyType::House, 3));
        assert_eq!(result.tax_amount, dec!(50_000_000));
    }

    #[test]
    fn test_transfer_tax_land_flat_rate() {
        let result = transfer_income_tax(&transfer_input(TransferPropertyType::Land, 20));
        assert_eq!(result.tax_amount, dec!(75_000_000));
    }

    #[test]
    fn test_financial_income_threshold() {
        let below = financial_income_tax(dec!(20_000_000));
        assert_eq!(below.tax_amount, dec!(2_800_000));

        let above = financial_income_tax(dec!(20_000_001));
        assert_eq!(above.tax_amount, round_unit(dec!(20_000_001) * dec!(0.15)));
    }

    #[test]
    fn test_interest_and_dividend_flat_withholding() {
        assert_eq!(interest_income_tax(dec!(1_000_000)).tax_amount, dec!(150_000));
        assert_eq!(dividend_income_tax(dec!(2_000_000)).tax_amount, dec!(300_000));
    }
}
