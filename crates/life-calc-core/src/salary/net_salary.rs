use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{round_unit, with_metadata, ComputationOutput, Money};
use crate::LifeCalcResult;

// 2024 deduction rates
const NATIONAL_PENSION_RATE: Decimal = dec!(0.045);
const NATIONAL_PENSION_CAP: Decimal = dec!(248_850);
const HEALTH_INSURANCE_RATE: Decimal = dec!(0.03545);
const LONG_TERM_CARE_RATE: Decimal = dec!(0.1227);
const EMPLOYMENT_INSURANCE_RATE: Decimal = dec!(0.009);
const LOCAL_INCOME_TAX_RATE: Decimal = dec!(0.1);

/// Whether `annual_salary` is an annual or a monthly figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBasis {
    Annual,
    Monthly,
}

/// Whether severance pay is carried inside the quoted salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeveranceTreatment {
    Separate,
    /// Quoted as 13 payments; one is the severance accrual.
    Included,
}

fn default_dependents() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryInput {
    pub salary_basis: SalaryBasis,
    pub severance: SeveranceTreatment,
    pub annual_salary: Money,
    /// Dependents including the earner.
    #[serde(default = "default_dependents")]
    pub dependents: u32,
    #[serde(default)]
    pub children_under_20: u32,
    /// Non-taxable portion of the monthly salary.
    #[serde(default)]
    pub non_taxable_amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deductions {
    pub pension: Money,
    pub health_insurance: Money,
    pub long_term_care: Money,
    pub employment_insurance: Money,
    pub income_tax: Money,
    pub local_income_tax: Money,
    pub total_deductions: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryOutput {
    pub monthly_net_salary: Money,
    pub monthly_deductions: Deductions,
}

/// Monthly take-home pay from a gross salary quote.
pub fn net_salary(input: &SalaryInput) -> LifeCalcResult<ComputationOutput<SalaryOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if input.annual_salary <= Decimal::ZERO {
        return Err(LifeCalcError::InvalidInput {
            field: "annual_salary".into(),
            reason: "annual_salary must be > 0".into(),
        });
    }

    // Strip the severance thirteenth when it is baked into the quote
    let adjusted_annual = match input.severance {
        SeveranceTreatment::Included => input.annual_salary / dec!(13) * dec!(12),
        SeveranceTreatment::Separate => input.annual_salary,
    };

    let monthly_salary = match input.salary_basis {
        SalaryBasis::Annual => adjusted_annual / dec!(12),
        SalaryBasis::Monthly => adjusted_annual,
    };

    let taxable_salary = monthly_salary - input.non_taxable_amount;

    let pension = (taxable_salary * NATIONAL_PENSION_RATE).min(NATIONAL_PENSION_CAP);
    let health_insurance = taxable_salary * HEALTH_INSURANCE_RATE;
    let long_term_care = health_insurance * LONG_TERM_CARE_RATE;
    let employment_insurance = taxable_salary * EMPLOYMENT_INSURANCE_RATE;

    // Withholding table applied to the annual quote
    let income_tax = annual_income_tax(
        input.annual_salary,
        input.dependents,
        input.children_under_20,
    );
    let local_income_tax = income_tax * LOCAL_INCOME_TAX_RATE;

    let total_deductions = pension
        + health_insurance
        + long_term_care
        + employment_insurance
        + income_tax
        + local_income_tax;

    let monthly_net_salary = monthly_salary - total_deductions;

    let output = SalaryOutput {
        monthly_net_salary: round_unit(monthly_net_salary),
        monthly_deductions: Deductions {
            pension: round_unit(pension),
            health_insurance: round_unit(health_insurance),
            long_term_care: round_unit(long_term_care),
            employment_insurance: round_unit(employment_insurance),
            income_tax: round_unit(income_tax),
            local_income_tax: round_unit(local_income_tax),
            total_deductions: round_unit(total_deductions),
        },
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Net salary (statutory deductions at 2024 rates)",
        &serde_json::json!({
            "salary_basis": format!("{:?}", input.salary_basis),
            "severance": format!("{:?}", input.severance),
            "dependents": input.dependents,
            "children_under_20": input.children_under_20,
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Simplified 2024 withholding: progressive brackets after dependent and
/// child deductions, floored at zero.
fn annual_income_tax(annual_salary: Money, dependents: u32, children_under_20: u32) -> Money {
    let basic_deduction = dec!(1_500_000);
    let child_deduction = dec!(1_500_000);
    let taxable = annual_salary
        - basic_deduction * Decimal::from(dependents)
        - child_deduction * Decimal::from(children_under_20);

    let tax = if taxable <= dec!(12_000_000) {
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
    };

    tax.max(Decimal::ZERO)
}
