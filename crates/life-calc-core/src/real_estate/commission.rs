use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_2dp, Money, Rate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    Sale,
    /// Jeonse: a large refundable deposit in lieu of rent.
    LeaseDeposit,
    MonthlyRent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Officetel,
    PreSaleRight,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionInput {
    pub contract_type: ContractType,
    pub property_type: PropertyType,
    /// Deposit (or sale price) the commission is charged on.
    pub deposit: Money,
    /// Override for the capped brokerage rate, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_pct: Option<Rate>,
    /// Override for the VAT rate, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate_pct: Option<Rate>,
    /// Monthly rent amount, only meaningful for MonthlyRent contracts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<Money>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionOutput {
    /// Applied capped rate, in percent.
    pub rate_pct: Rate,
    pub commission: Money,
    pub commission_with_tax: Money,
}

const DEFAULT_VAT_PCT: Decimal = dec!(10);

/// Capped brokerage rate in percent by contract type. The cap is currently
/// uniform across property types.
fn default_rate_pct(_property_type: PropertyType, contract_type: ContractType) -> Rate {
    match contract_type {
        ContractType::Sale => dec!(0.9),
        ContractType::LeaseDeposit => dec!(0.8),
        ContractType::MonthlyRent => dec!(0.4),
    }
}

/// Brokerage commission with VAT. Monthly-rent contracts convert to a
/// transaction amount of deposit + rent * 100 before applying the rate.
pub fn commission(input: &CommissionInput) -> CommissionOutput {
    let applied_rate = input
        .rate_pct
        .unwrap_or_else(|| default_rate_pct(input.property_type, input.contract_type));
    let applied_vat = input.vat_rate_pct.unwrap_or(DEFAULT_VAT_PCT);

    let transaction_amount = match (input.contract_type, input.monthly_rent) {
        (ContractType::MonthlyRent, Some(rent)) => input.deposit + rent * dec!(100),
        _ => input.deposit,
    };

    let fee = transaction_amount * applied_rate / dec!(100);
    let fee_with_tax = fee + fee * applied_vat / dec!(100);

    CommissionOutput {
        rate_pct: applied_rate,
        commission: round_2dp(fee),
        commission_with_tax: round_2dp(fee_with_tax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sale_uses_default_cap() {
        let result = commission(&CommissionInput {
            contract_type: ContractType::Sale,
            property_type: PropertyType::House,
            deposit: dec!(50_000),
            rate_pct: None,
            vat_rate_pct: None,
            monthly_rent: None,
        });
        assert_eq!(result.rate_pct, dec!(0.9));
        assert_eq!(result.commission, dec!(450));
        assert_eq!(result.commission_with_tax, dec!(495));
    }

    #[test]
    fn test_monthly_rent_converts_transaction_amount() {
        // 1,000 deposit + 50 rent * 100 = 6,000 at 0.4%
        let result = commission(&CommissionInput {
            contract_type: ContractType::MonthlyRent,
            property_type: PropertyType::Officetel,
            deposit: dec!(1_000),
            rate_pct: None,
            vat_rate_pct: None,
            monthly_rent: Some(dec!(50)),
        });
        assert_eq!(result.commission, dec!(24));
        assert_eq!(result.commission_with_tax, dec!(26.4));
    }

    #[test]
    fn test_monthly_rent_without_rent_falls_back_to_deposit() {
        let result = commission(&CommissionInput {
            contract_type: ContractType::MonthlyRent,
            property_type: PropertyType::House,
            deposit: dec!(10_000),
            rate_pct: None,
            vat_rate_pct: None,
            monthly_rent: None,
        });
        assert_eq!(result.commission, dec!(40));
    }

    #[test]
    fn test_rate_and_vat_overrides() {
        let result = commission(&CommissionInput {
            contract_type: ContractType::LeaseDeposit,
            property_type: PropertyType::Other,
            deposit: dec!(100_000),
            rate_pct: Some(dec!(0.5)),
            vat_rate_pct: Some(dec!(0)),
            monthly_rent: None,
        });
        assert_eq!(result.rate_pct, dec!(0.5));
        assert_eq!(result.commission, dec!(500));
        assert_eq!(result.commission_with_tax, dec!(500));
    }
}
