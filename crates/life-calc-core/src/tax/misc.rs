use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_unit, Money, Rate};

use super::TaxResult;

/// Corporation tax: 10% to 200M, 20% to 20B, 22% above.
pub fn corporation_tax(net_profit: Money) -> TaxResult {
    let tax = if net_profit <= dec!(200_000_000) {
        net_profit * dec!(0.1)
    } else if net_profit <= dec!(20_000_000_000) {
        dec!(200_000_000) * dec!(0.1) + (net_profit - dec!(200_000_000)) * dec!(0.2)
    } else {
        dec!(200_000_000) * dec!(0.1)
            + (dec!(20_000_000_000) - dec!(200_000_000)) * dec!(0.2)
            + (net_profit - dec!(20_000_000_000)) * dec!(0.22)
    };

    TaxResult {
        tax_name: "Corporation tax".to_string(),
        tax_amount: round_unit(tax),
        details: format!("Net profit {} through the three corporate brackets", net_profit),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementIncomeTaxInput {
    pub retirement_pay: Money,
    pub years_of_service: u32,
}

/// Retirement income tax: 1.2M allowance per service year, 5% on the rest.
pub fn retirement_income_tax(input: &RetirementIncomeTaxInput) -> TaxResult {
    let allowance = dec!(1_200_000) * Decimal::from(input.years_of_service);
    let taxable = input.retirement_pay - allowance;
    let tax = taxable * dec!(0.05);

    TaxResult {
        tax_name: "Retirement income tax".to_string(),
        tax_amount: round_unit(tax),
        details: format!(
            "Retirement pay: {}, service allowance: {} over {} years",
            input.retirement_pay, allowance, input.years_of_service
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PensionType {
    /// National pension gets the preferential 3% rate.
    NationalPension,
    GovernmentEmployee,
    PrivateSchoolTeacher,
}

/// Pension income tax: 5% by default, 3% for the national pension.
pub fn pension_income_tax(pension_amount: Money, pension_type: PensionType) -> TaxResult {
    let rate: Rate = match pension_type {
        PensionType::NationalPension => dec!(0.03),
        PensionType::GovernmentEmployee | PensionType::PrivateSchoolTeacher => dec!(0.05),
    };

    TaxResult {
        tax_name: "Pension income tax".to_string(),
        tax_amount: round_unit(pension_amount * rate),
        details: format!("Pension amount {} taxed at {}", pension_amount, rate),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarType {
    Passenger,
    Van,
    Truck,
    Special,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarTaxInput {
    pub engine_displacement_cc: u32,
    pub car_age_years: u32,
    pub car_type: CarType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarTaxOutput {
    pub base_tax: Money,
    pub age_discount: Money,
    pub total_tax: Money,
}

/// Annual car tax: per-cc base by vehicle class, discounted 5% per year of
/// age beyond two, capped at 50%.
pub fn car_tax(input: &CarTaxInput) -> CarTaxOutput {
    let displacement = Decimal::from(input.engine_displacement_cc);

    let base_tax = match input.car_type {
        CarType::Passenger => {
            if input.engine_displacement_cc <= 1000 {
                displacement * dec!(80)
            } else if input.engine_displacement_cc <= 1600 {
                displacement * dec!(140)
            } else {
                displacement * dec!(200)
            }
        }
        CarType::Van => displacement * dec!(65),
        CarType::Truck => dec!(28_500),
        CarType::Special => dec!(60_000),
    };

    let discount_rate = if input.car_age_years > 2 {
        (Decimal::from(input.car_age_years - 2) * dec!(0.05)).min(dec!(0.5))
    } else {
        Decimal::ZERO
    };

    let age_discount = base_tax * discount_rate;

    CarTaxOutput {
        base_tax: round_unit(base_tax),
        age_discount: round_unit(age_discount),
        total_tax: round_unit(base_tax - age_discount),
    }
}
