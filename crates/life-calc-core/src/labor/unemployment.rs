use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{round_unit, Money};
use crate::LifeCalcResult;

/// 2024 daily benefit cap (8-hour basis).
const MAX_DAILY_BENEFIT: Decimal = dec!(66_360);
/// 2024 hourly minimum wage, the floor is 80% of it.
const HOURLY_MINIMUM_WAGE: Decimal = dec!(9_620);
/// Statutory daily floor at 8 hours.
const DAILY_FLOOR_8H: Decimal = dec!(61_568);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnemploymentInput {
    pub age: u32,
    pub is_disabled: bool,
    /// Total months enrolled in employment insurance.
    pub employment_insurance_months: u32,
    /// Gross wages for the last three months, oldest first.
    pub recent_three_months_salaries: Vec<Money>,
    /// Average working days per month over those three months.
    pub average_work_days: Decimal,
    pub daily_work_hours: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnemploymentOutput {
    pub daily_benefit_amount: Money,
    pub expected_payment_days: u32,
    pub total_expected_amount: Money,
}

/// Job-seeker benefit: 60% of the average daily wage, clamped to the
/// statutory floor and cap, over the payment-day table.
pub fn unemployment_benefit(input: &UnemploymentInput) -> LifeCalcResult<UnemploymentOutput> {
    if input.recent_three_months_salaries.len() != 3 {
        return Err(LifeCalcError::InvalidInput {
            field: "recent_three_months_salaries".into(),
            reason: "expected exactly three monthly amounts".into(),
        });
    }
    if input.average_work_days.is_zero() {
        return Err(LifeCalcError::DivisionByZero {
            context: "unemployment average work days".into(),
        });
    }

    let total_salary: Decimal = input.recent_three_months_salaries.iter().sum();
    let average_monthly_salary = total_salary / dec!(3);
    let daily_average_wage = average_monthly_salary / input.average_work_days;

    let min_daily_benefit = (dec!(0.8) * HOURLY_MINIMUM_WAGE * input.daily_work_hours)
        .max(DAILY_FLOOR_8H * input.daily_work_hours / dec!(8));

    let daily_benefit_amount = (daily_average_wage * dec!(0.6))
        .max(min_daily_benefit)
        .min(MAX_DAILY_BENEFIT);

    let mut expected_payment_days = payment_days(input.employment_insurance_months, input.age);
    if input.is_disabled {
        expected_payment_days += 30;
    }

    let total = daily_benefit_amount * Decimal::from(expected_payment_days);

    Ok(UnemploymentOutput {
        daily_benefit_amount: round_unit(daily_benefit_amount),
        expected_payment_days,
        total_expected_amount: round_unit(total),
    })
}

/// Statutory payment-day table by insured period and age band.
fn payment_days(insurance_months: u32, age: u32) -> u32 {
    if insurance_months < 12 {
        120
    } else if insurance_months < 36 {
        if age < 50 {
            150
        } else {
            180
        }
    } else if insurance_months < 60 {
        if age < 50 {
            180
        } else {
            210
        }
    } else if age < 50 {
        210
    } else {
        240
    }
}
