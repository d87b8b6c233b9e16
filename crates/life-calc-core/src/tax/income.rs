use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_unit, Money};

use super::{progressive_income_tax, TaxResult};

const BASIC_DEDUCTION_PER_DEPENDENT: Decimal = dec!(1_500_000);
const CHILD_DEDUCTION: Decimal = dec!(1_500_000);

/// National pension monthly contribution cap, 2024.
pub(crate) const NATIONAL_PENSION_CAP: Decimal = dec!(248_850);
pub(crate) const NATIONAL_PENSION_RATE: Decimal = dec!(0.045);
pub(crate) const HEALTH_INSURANCE_RATE: Decimal = dec!(0.03545);
pub(crate) const LONG_TERM_CARE_RATE: Decimal = dec!(0.1227);
pub(crate) const EMPLOYMENT_INSURANCE_RATE: Decimal = dec!(0.009);

fn default_dependents() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    pub gross_salary: Money,
    /// Dependents including the taxpayer.
    #[serde(default = "default_dependents")]
    pub dependents: u32,
    #[serde(default)]
    pub children_under_20: u32,
    #[serde(default)]
    pub non_taxable_amount: Money,
}

/// Earned income tax on gross salary after dependent and child deductions.
pub fn income_tax(input: &IncomeTaxInput) -> TaxResult {
    let taxable = input.gross_salary
        - input.non_taxable_amount
        - BASIC_DEDUCTION_PER_DEPENDENT * Decimal::from(input.dependents)
        - CHILD_DEDUCTION * Decimal::from(input.children_under_20);

    let tax = progressive_income_tax(taxable);

    TaxResult {
        tax_name: "Earned income tax".to_string(),
        tax_amount: round_unit(tax).max(Decimal::ZERO),
        details: format!(
            "Progressive brackets on taxable income. Gross salary: {}, non-taxable: {}, \
             dependent deduction: {} x {}, child deduction: {} x {}",
            input.gross_salary,
            input.non_taxable_amount,
            BASIC_DEDUCTION_PER_DEPENDENT,
            input.dependents,
            CHILD_DEDUCTION,
            input.children_under_20
        ),
    }
}

/// The four mandatory social insurance contributions on gross salary.
pub fn social_insurance(gross_salary: Money) -> TaxResult {
    let pension = (gross_salary * NATIONAL_PENSION_RATE).min(NATIONAL_PENSION_CAP);
    let health = gross_salary * HEALTH_INSURANCE_RATE;
    let long_term_care = health * LONG_TERM_CARE_RATE;
    let employment = gross_salary * EMPLOYMENT_INSURANCE_RATE;

    let total = pension + health + long_term_care + employment;

    TaxResult {
        tax_name: "Social insurance".to_string(),
        tax_amount: round_unit(total),
        details: format!(
            "National pension: {}, health insurance: {}, long-term care: {}, \
             employment insurance: {}",
            pension, health, long_term_care, employment
        ),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeIncomeTaxInput {
    pub gross_income: Money,
    #[serde(default)]
    pub deductible_expenses: Money,
}

/// Composite (global) income tax on income net of deductible expenses.
pub fn composite_income_tax(input: &CompositeIncomeTaxInput) -> TaxResult {
    let taxable = input.gross_income - input.deductible_expenses;
    let tax = progressive_income_tax(taxable);

    TaxResult {
        tax_name: "Composite income tax".to_string(),
        tax_amount: round_unit(tax),
        details: format!(
            "Progressive brackets on taxable income. Gross income: {}, deductible expenses: {}",
            input.gross_income, input.deductible_expenses
        ),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessIncomeTaxInput {
    pub business_income: Money,
    #[serde(default)]
    pub deductible_expenses: Money,
}

/// Business income tax, same bracket table as composite income.
pub fn business_income_tax(input: &BusinessIncomeTaxInput) -> TaxResult {
    let taxable = input.business_income - input.deductible_expenses;
    let tax = progressive_income_tax(taxable);

    TaxResult {
        tax_name: "Business income tax".to_string(),
        tax_amount: round_unit(tax),
        details: format!(
            "Progressive brackets on taxable income. Business income: {}, deductible expenses: {}",
            input.business_income, input.deductible_expenses
        ),
    }
}
