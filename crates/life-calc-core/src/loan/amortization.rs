use std::str::FromStr;
use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LifeCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Amortization policy for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentMethod {
    /// Equal total payment (interest + principal) each repaying month.
    EqualInstallment,
    /// Equal principal reduction each repaying month; the total payment
    /// shrinks as the balance declines.
    EqualPrincipal,
    /// Interest only until maturity, full principal due in the final month.
    BulletPayment,
}

impl FromStr for RepaymentMethod {
    type Err = LifeCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EqualInstallment" => Ok(Self::EqualInstallment),
            "EqualPrincipal" => Ok(Self::EqualPrincipal),
            "BulletPayment" => Ok(Self::BulletPayment),
            other => Err(LifeCalcError::InvalidMethod(other.to_string())),
        }
    }
}

/// Input parameters for a repayment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Original borrowed amount.
    pub principal: Money,
    /// Nominal annual interest rate as a fraction (0.032 = 3.2%).
    pub annual_rate: Rate,
    /// Total loan duration in years; the schedule spans `term_years * 12` months.
    pub term_years: u32,
    pub repayment_method: RepaymentMethod,
    /// Initial months during which only interest is due. Must leave at least
    /// one principal-repaying month for the two amortizing methods.
    #[serde(default)]
    pub grace_period_months: u32,
}

/// One month of the schedule, 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentLine {
    pub month: u32,
    pub interest_due: Money,
    pub principal_due: Money,
    pub total_payment: Money,
}

/// Full month-by-month schedule plus aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub lines: Vec<RepaymentLine>,
    /// Representative steady-state payment. For EqualInstallment this is the
    /// fixed payment; for EqualPrincipal the first repaying month's total
    /// (later months are cheaper); for BulletPayment the recurring
    /// interest-only payment.
    pub monthly_payment: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Produce a full repayment schedule for one loan request.
///
/// Interest accrues on the declining balance *before* the month's principal
/// reduction. Grace months never touch the balance, so for the amortizing
/// methods the level figures are solved over `total_months - grace_period_months`
/// only. No per-line rounding is applied; the running balance threads exact.
pub fn compute_schedule(
    request: &LoanRequest,
) -> LifeCalcResult<ComputationOutput<LoanSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let monthly_rate = request.annual_rate / dec!(12);
    let total_months = request.term_years * 12;
    let repayment_months = total_months.saturating_sub(request.grace_period_months);

    let schedule = match request.repayment_method {
        RepaymentMethod::EqualInstallment => {
            equal_installment(request, monthly_rate, total_months, repayment_months, &mut warnings)?
        }
        RepaymentMethod::EqualPrincipal => {
            equal_principal(request, monthly_rate, total_months, repayment_months)?
        }
        RepaymentMethod::BulletPayment => bullet_payment(request, monthly_rate, total_months),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Loan repayment schedule (declining-balance monthly amortization)",
        &serde_json::json!({
            "repayment_method": format!("{:?}", request.repayment_method),
            "annual_rate": request.annual_rate.to_string(),
            "term_years": request.term_years,
            "grace_period_months": request.grace_period_months,
        }),
        warnings,
        elapsed,
        schedule,
    ))
}

fn equal_installment(
    request: &LoanRequest,
    monthly_rate: Rate,
    total_months: u32,
    repayment_months: u32,
    warnings: &mut Vec<String>,
) -> LifeCalcResult<LoanSchedule> {
    if repayment_months == 0 {
        return Err(LifeCalcError::DivisionByZero {
            context: "equal-installment repayment months".into(),
        });
    }

    // Level payment solved over the repaying months only:
    // pmt = P * r / (1 - (1 + r)^-n)
    let fixed_payment = if monthly_rate.is_zero() {
        warnings.push("Zero interest rate: level payment is principal / repayment months".into());
        request.principal / Decimal::from(repayment_months)
    } else {
        let annuity_factor = Decimal::ONE - Decimal::ONE / compound(monthly_rate, repayment_months);
        if annuity_factor.is_zero() {
            return Err(LifeCalcError::DivisionByZero {
                context: "equal-installment annuity factor".into(),
            });
        }
        request.principal * monthly_rate / annuity_factor
    };

    let mut lines = Vec::with_capacity(total_months as usize);
    let mut outstanding = request.principal;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=total_months {
        let interest = outstanding * monthly_rate;
        total_interest += interest;

        if month <= request.grace_period_months {
            lines.push(RepaymentLine {
                month,
                interest_due: interest,
                principal_due: Decimal::ZERO,
                total_payment: interest,
            });
        } else {
            let principal_portion = fixed_payment - interest;
            outstanding -= principal_portion;
            lines.push(RepaymentLine {
                month,
                interest_due: interest,
                principal_due: principal_portion,
                total_payment: fixed_payment,
            });
        }
    }

    Ok(LoanSchedule {
        lines,
        monthly_payment: fixed_payment,
        total_interest,
    })
}

fn equal_principal(
    request: &LoanRequest,
    monthly_rate: Rate,
    total_months: u32,
    repayment_months: u32,
) -> LifeCalcResult<LoanSchedule> {
    if repayment_months == 0 {
        return Err(LifeCalcError::DivisionByZero {
            context: "equal-principal repayment months".into(),
        });
    }

    let fixed_principal = request.principal / Decimal::from(repayment_months);

    let mut lines = Vec::with_capacity(total_months as usize);
    let mut outstanding = request.principal;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=total_months {
        let interest = outstanding * monthly_rate;
        total_interest += interest;

        if month <= request.grace_period_months {
            lines.push(RepaymentLine {
                month,
                interest_due: interest,
                principal_due: Decimal::ZERO,
                total_payment: interest,
            });
        } else {
            outstanding -= fixed_principal;
            lines.push(RepaymentLine {
                month,
                interest_due: interest,
                principal_due: fixed_principal,
                total_payment: fixed_principal + interest,
            });
        }
    }

    // First repaying month's total, as the representative figure.
    let monthly_payment = fixed_principal + request.principal * monthly_rate;

    Ok(LoanSchedule {
        lines,
        monthly_payment,
        total_interest,
    })
}

fn bullet_payment(request: &LoanRequest, monthly_rate: Rate, total_months: u32) -> LoanSchedule {
    // The balance never declines before maturity, so interest is flat on the
    // original principal. Grace months are indistinguishable from ordinary
    // pre-maturity months here.
    let fixed_interest = request.principal * monthly_rate;

    let mut lines = Vec::with_capacity(total_months as usize);
    let mut total_interest = Decimal::ZERO;

    for month in 1..=total_months {
        total_interest += fixed_interest;

        if month == total_months {
            lines.push(RepaymentLine {
                month,
                interest_due: fixed_interest,
                principal_due: request.principal,
                total_payment: request.principal + fixed_interest,
            });
        } else {
            lines.push(RepaymentLine {
                month,
                interest_due: fixed_interest,
                principal_due: Decimal::ZERO,
                total_payment: fixed_interest,
            });
        }
    }

    LoanSchedule {
        lines,
        monthly_payment: fixed_interest,
        total_interest,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn request(method: RepaymentMethod) -> LoanRequest {
        LoanRequest {
            principal: dec!(120_000_000),
            annual_rate: dec!(0.032),
            term_years: 1,
            repayment_method: method,
            grace_period_months: 0,
        }
    }

    fn close(a: Decimal, b: Decimal, tol: Decimal) -> bool {
        (a - b).abs() < tol
    }

    // ---------------------------------------------------------------
    // 1. Scenario A: 120M at 3.2% over 1 year, equal installment
    // ---------------------------------------------------------------
    #[test]
    fn test_equal_installment_one_year() {
        let result = compute_schedule(&request(RepaymentMethod::EqualInstallment)).unwrap();
        let schedule = &result.result;

        assert_eq!(schedule.lines.len(), 12);

        // First-month interest: 120,000,000 * 0.032 / 12 = 320,000
        assert!(close(schedule.lines[0].interest_due, dec!(320_000), dec!(0.001)));

        // Every repaying month carries the level payment
        for line in &schedule.lines {
            assert_eq!(line.total_payment, schedule.monthly_payment);
            assert_eq!(line.total_payment, line.interest_due + line.principal_due);
        }

        // Cumulative principal retires the loan
        let repaid: Decimal = schedule.lines.iter().map(|l| l.principal_due).sum();
        assert!(close(repaid, dec!(120_000_000), dec!(0.01)));

        // Last month is almost all principal
        let last = schedule.lines.last().unwrap();
        assert!(close(
            last.principal_due,
            schedule.monthly_payment - last.interest_due,
            dec!(0.000001)
        ));
    }

    // ---------------------------------------------------------------
    // 2. Scenario B: same loan, equal principal
    // ---------------------------------------------------------------
    #[test]
    fn test_equal_principal_one_year() {
        let result = compute_schedule(&request(RepaymentMethod::EqualPrincipal)).unwrap();
        let schedule = &result.result;

        assert_eq!(schedule.lines.len(), 12);

        // 120,000,000 / 12 retired every month, exactly
        for line in &schedule.lines {
            assert_eq!(line.principal_due, dec!(10_000_000));
        }

        // Month 1 interest on the full balance
        assert!(close(schedule.lines[0].interest_due, dec!(320_000), dec!(0.001)));

        // Month 12 interest on the final 10M of balance: 10,000,000 * 0.032 / 12
        let expected_last = dec!(10_000_000) * dec!(0.032) / dec!(12);
        assert!(close(schedule.lines[11].interest_due, expected_last, dec!(0.001)));

        // Representative payment = first repaying month's total
        assert!(close(
            schedule.monthly_payment,
            dec!(10_000_000) + dec!(320_000),
            dec!(0.001)
        ));
        assert!(close(
            schedule.lines[0].total_payment,
            schedule.monthly_payment,
            dec!(0.001)
        ));
    }

    // ---------------------------------------------------------------
    // 3. Scenario C: same loan, bullet payment
    // ---------------------------------------------------------------
    #[test]
    fn test_bullet_payment_one_year() {
        let result = compute_schedule(&request(RepaymentMethod::BulletPayment)).unwrap();
        let schedule = &result.result;

        assert_eq!(schedule.lines.len(), 12);

        for line in &schedule.lines[..11] {
            assert!(close(line.interest_due, dec!(320_000), dec!(0.001)));
            assert_eq!(line.principal_due, Decimal::ZERO);
            assert_eq!(line.total_payment, line.interest_due);
        }

        let last = &schedule.lines[11];
        assert_eq!(last.principal_due, dec!(120_000_000));
        assert!(close(last.total_payment, dec!(120_320_000), dec!(0.001)));

        // Recurring interest-only figure reported as the monthly payment
        assert!(close(schedule.monthly_payment, dec!(320_000), dec!(0.001)));
    }

    // ---------------------------------------------------------------
    // 4. Scenario D: 3-month grace period under equal installment
    // ---------------------------------------------------------------
    #[test]
    fn test_equal_installment_with_grace_period() {
        let mut req = request(RepaymentMethod::EqualInstallment);
        req.grace_period_months = 3;
        let result = compute_schedule(&req).unwrap();
        let schedule = &result.result;

        assert_eq!(schedule.lines.len(), 12);

        // Grace months: interest only, on the untouched balance
        for line in &schedule.lines[..3] {
            assert_eq!(line.principal_due, Decimal::ZERO);
            assert_eq!(line.total_payment, line.interest_due);
            assert!(close(line.interest_due, dec!(320_000), dec!(0.001)));
        }

        // Repaying months carry the payment solved over the remaining 9
        for line in &schedule.lines[3..] {
            assert_eq!(line.total_payment, schedule.monthly_payment);
        }

        let repaid: Decimal = schedule.lines.iter().map(|l| l.principal_due).sum();
        assert!(close(repaid, dec!(120_000_000), dec!(0.01)));
    }

    // ---------------------------------------------------------------
    // 5. Grace months suppress principal under equal principal too
    // ---------------------------------------------------------------
    #[test]
    fn test_equal_principal_with_grace_period() {
        let mut req = request(RepaymentMethod::EqualPrincipal);
        req.grace_period_months = 3;
        let result = compute_schedule(&req).unwrap();
        let schedule = &result.result;

        for line in &schedule.lines[..3] {
            assert_eq!(line.principal_due, Decimal::ZERO);
        }
        // Principal split over the 9 repaying months
        for line in &schedule.lines[3..] {
            assert!(close(
                line.principal_due,
                dec!(120_000_000) / dec!(9),
                dec!(0.000001)
            ));
        }
    }

    // ---------------------------------------------------------------
    // 6. Bullet payment ignores the grace flag before maturity
    // ---------------------------------------------------------------
    #[test]
    fn test_bullet_payment_grace_is_indistinguishable() {
        let without = compute_schedule(&request(RepaymentMethod::BulletPayment)).unwrap();
        let mut req = request(RepaymentMethod::BulletPayment);
        req.grace_period_months = 3;
        let with_grace = compute_schedule(&req).unwrap();

        for (a, b) in without.result.lines.iter().zip(with_grace.result.lines.iter()) {
            assert_eq!(a.interest_due, b.interest_due);
            assert_eq!(a.principal_due, b.principal_due);
            assert_eq!(a.total_payment, b.total_payment);
        }
    }

    // ---------------------------------------------------------------
    // 7. Schedule length is term_years * 12 for every method
    // ---------------------------------------------------------------
    #[test]
    fn test_lines_length_all_methods() {
        for method in [
            RepaymentMethod::EqualInstallment,
            RepaymentMethod::EqualPrincipal,
            RepaymentMethod::BulletPayment,
        ] {
            let mut req = request(method);
            req.term_years = 5;
            let result = compute_schedule(&req).unwrap();
            assert_eq!(result.result.lines.len(), 60);
        }
    }

    // ---------------------------------------------------------------
    // 8. total_interest accumulates the emitted lines
    // ---------------------------------------------------------------
    #[test]
    fn test_total_interest_matches_lines() {
        for method in [
            RepaymentMethod::EqualInstallment,
            RepaymentMethod::EqualPrincipal,
            RepaymentMethod::BulletPayment,
        ] {
            let mut req = request(method);
            req.term_years = 3;
            req.grace_period_months = 2;
            let result = compute_schedule(&req).unwrap();
            let summed: Decimal = result.result.lines.iter().map(|l| l.interest_due).sum();
            assert_eq!(result.result.total_interest, summed);
        }
    }

    // ---------------------------------------------------------------
    // 9. Unknown method tag fails to parse
    // ---------------------------------------------------------------
    #[test]
    fn test_invalid_method_tag() {
        let parsed = "RevolvingCredit".parse::<RepaymentMethod>();
        assert!(matches!(parsed, Err(LifeCalcError::InvalidMethod(tag)) if tag == "RevolvingCredit"));

        assert_eq!(
            "EqualInstallment".parse::<RepaymentMethod>().unwrap(),
            RepaymentMethod::EqualInstallment
        );
    }

    // ---------------------------------------------------------------
    // 10. Grace consuming the whole term leaves nothing to amortize
    // ---------------------------------------------------------------
    #[test]
    fn test_no_repayment_months_is_an_error() {
        for method in [RepaymentMethod::EqualInstallment, RepaymentMethod::EqualPrincipal] {
            let mut req = request(method);
            req.grace_period_months = 12;
            let result = compute_schedule(&req);
            assert!(matches!(result, Err(LifeCalcError::DivisionByZero { .. })));
        }
    }

    // ---------------------------------------------------------------
    // 11. Zero rate: equal installment degrades to a straight split
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate_equal_installment() {
        let mut req = request(RepaymentMethod::EqualInstallment);
        req.annual_rate = Decimal::ZERO;
        let result = compute_schedule(&req).unwrap();

        assert!(!result.warnings.is_empty());
        for line in &result.result.lines {
            assert_eq!(line.interest_due, Decimal::ZERO);
            assert_eq!(line.principal_due, dec!(10_000_000));
        }
        assert_eq!(result.result.total_interest, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 12. Declining balance: interest strictly decreases while repaying
    // ---------------------------------------------------------------
    #[test]
    fn test_interest_declines_over_repaying_months() {
        let result = compute_schedule(&request(RepaymentMethod::EqualInstallment)).unwrap();
        let lines = &result.result.lines;
        for pair in lines.windows(2) {
            assert!(pair[1].interest_due < pair[0].interest_due);
        }
    }
}
