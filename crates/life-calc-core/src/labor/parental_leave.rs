use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_unit, with_metadata, ComputationOutput, Money};
use crate::LifeCalcResult;

/// Statutory monthly cap on the 80%-of-wage benefit.
const GENERAL_LEAVE_CAP: Decimal = dec!(1_500_000);
/// Father's-bonus benefit for the first three months.
const BONUS_LEAVE_BASE: Decimal = dec!(2_500_000);
/// Share of the general benefit withheld until six months after returning.
const RETENTION_RATE: Decimal = dec!(0.25);

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeavePeriod {
    pub months: u32,
    pub days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentalLeaveInput {
    pub leave_period: LeavePeriod,
    /// Present when the spouse also takes leave; enables the bonus scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_leave_period: Option<LeavePeriod>,
    /// Ordinary monthly wage.
    pub average_monthly_wage: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentalLeavePayment {
    pub month: u32,
    pub general_leave_payment: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_leave_payment: Option<Money>,
    /// 6+6 parental leave scheme figure.
    pub extended_leave_payment: Money,
    /// Withheld portion, paid out six months after returning to work.
    pub retention_payment: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentalLeaveOutput {
    pub payments: Vec<ParentalLeavePayment>,
    pub total_general_leave_payment: Money,
    pub total_bonus_leave_payment: Money,
    pub total_extended_leave_payment: Money,
}

/// Month-by-month parental leave benefit under the general scheme, the
/// father's-bonus scheme, and the 6+6 scheme.
pub fn parental_leave_pay(
    input: &ParentalLeaveInput,
) -> LifeCalcResult<ComputationOutput<ParentalLeaveOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    // Partial months count as whole ones
    let total_months = input.leave_period.months + input.leave_period.days.div_ceil(30);

    let general_base = (input.average_monthly_wage * dec!(0.8)).min(GENERAL_LEAVE_CAP);
    let extended_base = general_base;
    let retention_payment = general_base * RETENTION_RATE;

    let mut payments = Vec::with_capacity(total_months as usize);
    let mut total_general = Decimal::ZERO;
    let mut total_bonus = Decimal::ZERO;
    let mut total_extended = Decimal::ZERO;

    for month in 1..=total_months {
        let bonus_applies = input
            .spouse_leave_period
            .is_some_and(|spouse| month <= spouse.months);

        // After six months only a token 5% continues
        let general_payment = if month <= 6 {
            general_base
        } else {
            general_base * dec!(0.05)
        };
        let bonus_payment = if bonus_applies && month <= 3 {
            BONUS_LEAVE_BASE
        } else {
            general_payment * dec!(0.8)
        };
        let extended_payment = extended_base;

        total_general += general_payment;
        total_bonus += bonus_payment;
        total_extended += extended_payment;

        let retained = if month <= 6 {
            retention_payment
        } else {
            Decimal::ZERO
        };

        payments.push(ParentalLeavePayment {
            month,
            general_leave_payment: general_payment + retained,
            bonus_leave_payment: bonus_applies.then_some(bonus_payment),
            extended_leave_payment: extended_payment + retained,
            retention_payment: retained,
        });
    }

    let output = ParentalLeaveOutput {
        payments,
        total_general_leave_payment: round_unit(total_general),
        total_bonus_leave_payment: round_unit(total_bonus),
        total_extended_leave_payment: round_unit(total_extended),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Parental leave benefit (general, father's bonus, 6+6 schemes)",
        &serde_json::json!({
            "leave_months": input.leave_period.months,
            "leave_days": input.leave_period.days,
            "spouse_on_leave": input.spouse_leave_period.is_some(),
            "average_monthly_wage": input.average_monthly_wage.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
