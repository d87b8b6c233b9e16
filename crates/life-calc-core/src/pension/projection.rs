use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{round_unit, Money, Rate};
use crate::LifeCalcResult;

/// Default pension window: payout starts at 60 and runs to 90.
const PENSION_START_AGE: u32 = 60;
const PENSION_END_AGE: u32 = 90;

fn default_pension_start_age() -> u32 {
    PENSION_START_AGE
}

fn default_pension_duration() -> u32 {
    30
}

fn default_annual_return() -> Rate {
    dec!(0.05)
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Future value of a level monthly contribution: pmt * ((1+r)^n - 1) / r.
fn fv_of_contributions(pmt: Money, monthly_rate: Rate, months: u32) -> Money {
    if monthly_rate.is_zero() {
        return pmt * Decimal::from(months);
    }
    pmt * (compound(monthly_rate, months) - Decimal::ONE) / monthly_rate
}

// ---------------------------------------------------------------------------
// Retirement fund
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementFundInput {
    pub current_age: u32,
    pub desired_monthly_pension: Money,
    #[serde(default = "default_pension_start_age")]
    pub pension_start_age: u32,
    #[serde(default = "default_pension_duration")]
    pub pension_duration_years: u32,
    #[serde(default = "default_annual_return")]
    pub average_annual_return: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementFundOutput {
    pub retirement_start_age: u32,
    pub retirement_period_years: u32,
    /// Present value, at the current age, of the full payout.
    pub total_required_amount: Money,
    pub monthly_pension: Money,
    pub retirement_end_age: u32,
}

/// Capital needed today to fund the desired monthly pension.
pub fn retirement_fund(input: &RetirementFundInput) -> LifeCalcResult<RetirementFundOutput> {
    if input.pension_start_age < input.current_age {
        return Err(LifeCalcError::InvalidInput {
            field: "pension_start_age".into(),
            reason: "pension_start_age must be >= current_age".into(),
        });
    }

    let total_payout = input.desired_monthly_pension
        * dec!(12)
        * Decimal::from(input.pension_duration_years);

    let saving_years = input.pension_start_age - input.current_age;
    let present_value = total_payout / compound(input.average_annual_return, saving_years);

    Ok(RetirementFundOutput {
        retirement_start_age: input.pension_start_age,
        retirement_period_years: input.pension_duration_years,
        total_required_amount: round_unit(present_value),
        monthly_pension: input.desired_monthly_pension,
        retirement_end_age: input.pension_start_age + input.pension_duration_years,
    })
}

// ---------------------------------------------------------------------------
// Monthly savings plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySavingsPlanInput {
    pub current_age: u32,
    pub current_financial_assets: Money,
    pub monthly_savings: Money,
    pub saving_period_years: u32,
    pub average_annual_return: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySavingsPlanOutput {
    pub current_age: u32,
    pub current_assets: Money,
    pub monthly_savings: Money,
    pub saving_period_years: u32,
    pub saving_end_age: u32,
    pub total_amount_at_retirement: Money,
    pub monthly_pension: Money,
    pub pension_start_age: u32,
    pub pension_end_age: u32,
}

/// Project a fixed monthly savings habit to the end of the saving period and
/// spread the result over the standard 60-to-90 payout window.
pub fn monthly_savings_plan(input: &MonthlySavingsPlanInput) -> MonthlySavingsPlanOutput {
    let months = input.saving_period_years * 12;
    let monthly_rate = input.average_annual_return / dec!(12);

    let fv_assets = input.current_financial_assets * compound(monthly_rate, months);
    let fv_savings = fv_of_contributions(input.monthly_savings, monthly_rate, months);
    let total = fv_assets + fv_savings;

    let payout_months = Decimal::from((PENSION_END_AGE - PENSION_START_AGE) * 12);

    MonthlySavingsPlanOutput {
        current_age: input.current_age,
        current_assets: input.current_financial_assets,
        monthly_savings: input.monthly_savings,
        saving_period_years: input.saving_period_years,
        saving_end_age: input.current_age + input.saving_period_years,
        total_amount_at_retirement: round_unit(total),
        monthly_pension: round_unit(total / payout_months),
        pension_start_age: PENSION_START_AGE,
        pension_end_age: PENSION_END_AGE,
    }
}

// ---------------------------------------------------------------------------
// Monthly pension
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPensionInput {
    pub current_age: u32,
    pub current_financial_assets: Money,
    pub monthly_savings: Money,
    pub saving_period_years: u32,
    pub average_annual_return: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPensionOutput {
    pub interest_rate: Rate,
    pub current_assets: Money,
    pub monthly_savings: Money,
    pub saving_period_years: u32,
    pub total_amount_at_retirement: Money,
    pub monthly_pension: Money,
}

/// Monthly pension from saving every month between now and age 60.
pub fn monthly_pension(input: &MonthlyPensionInput) -> LifeCalcResult<MonthlyPensionOutput> {
    if input.current_age > PENSION_START_AGE {
        return Err(LifeCalcError::InvalidInput {
            field: "current_age".into(),
            reason: format!("current_age must be <= {PENSION_START_AGE}"),
        });
    }

    let months = (PENSION_START_AGE - input.current_age) * 12;
    let monthly_rate = input.average_annual_return / dec!(12);

    let fv_assets = input.current_financial_assets * compound(monthly_rate, months);
    let fv_savings = fv_of_contributions(input.monthly_savings, monthly_rate, months);
    let total = fv_assets + fv_savings;

    Ok(MonthlyPensionOutput {
        interest_rate: input.average_annual_return,
        current_assets: input.current_financial_assets,
        monthly_savings: input.monthly_savings,
        saving_period_years: input.saving_period_years,
        total_amount_at_retirement: total,
        monthly_pension: total / dec!(360),
    })
}

// ---------------------------------------------------------------------------
// Lump sum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumInput {
    pub current_age: u32,
    pub monthly_savings: Money,
    pub saving_period_years: u32,
    pub average_annual_return: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumOutput {
    pub average_interest_rate: Rate,
    pub monthly_savings: Money,
    pub saving_period_years: u32,
    pub total_amount_at_retirement: Money,
    pub monthly_pension: Money,
}

/// Lump sum accumulated by age 60 from monthly savings alone.
pub fn lump_sum(input: &LumpSumInput) -> LifeCalcResult<LumpSumOutput> {
    if input.current_age > PENSION_START_AGE {
        return Err(LifeCalcError::InvalidInput {
            field: "current_age".into(),
            reason: format!("current_age must be <= {PENSION_START_AGE}"),
        });
    }

    let months = (PENSION_START_AGE - input.current_age) * 12;
    let monthly_rate = input.average_annual_return / dec!(12);
    let fv_savings = fv_of_contributions(input.monthly_savings, monthly_rate, months);

    Ok(LumpSumOutput {
        average_interest_rate: input.average_annual_return,
        monthly_savings: input.monthly_savings,
        saving_period_years: input.saving_period_years,
        total_amount_at_retirement: fv_savings,
        monthly_pension: fv_savings / dec!(360),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_retirement_fund_discounts_to_present_value() {
        // 2M/month for 30 years = 720M nominal, discounted 20 years at 5%
        let result = retirement_fund(&RetirementFundInput {
            current_age: 40,
            desired_monthly_pension: dec!(2_000_000),
            pension_start_age: 60,
            pension_duration_years: 30,
            average_annual_return: dec!(0.05),
        })
        .unwrap();

        assert_eq!(result.retirement_start_age, 60);
        assert_eq!(result.retirement_end_age, 90);
        assert!(result.total_required_amount < dec!(720_000_000));
        // 720M / 1.05^20 ≈ 271,360,428
        assert!((result.total_required_amount - dec!(271_360_428)).abs() < dec!(50));
    }

    #[test]
    fn test_retirement_fund_rejects_past_start_age() {
        let result = retirement_fund(&RetirementFundInput {
            current_age: 65,
            desired_monthly_pension: dec!(2_000_000),
            pension_start_age: 60,
            pension_duration_years: 30,
            average_annual_return: dec!(0.05),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_monthly_savings_plan_projects_and_spreads() {
        let result = monthly_savings_plan(&MonthlySavingsPlanInput {
            current_age: 30,
            current_financial_assets: dec!(50_000_000),
            monthly_savings: dec!(1_000_000),
            saving_period_years: 20,
            average_annual_return: dec!(0.03),
        });

        assert_eq!(result.saving_end_age, 50);
        assert_eq!(result.pension_start_age, 60);
        assert_eq!(result.pension_end_age, 90);
        // Contributions alone are 240M; growth adds on top of assets
        assert!(result.total_amount_at_retirement > dec!(290_000_000));
        // Spread over the 360-month payout window
        let spread = round_unit(result.total_amount_at_retirement / dec!(360));
        assert!((result.monthly_pension - spread).abs() <= dec!(1));
    }

    #[test]
    fn test_monthly_pension_zero_rate_limit() {
        let result = monthly_pension(&MonthlyPensionInput {
            current_age: 50,
            current_financial_assets: dec!(0),
            monthly_savings: dec!(1_000_000),
            saving_period_years: 10,
            average_annual_return: dec!(0),
        })
        .unwrap();

        // 120 months of 1M with no growth
        assert_eq!(result.total_amount_at_retirement, dec!(120_000_000));
        assert_eq!(result.monthly_pension, dec!(120_000_000) / dec!(360));
    }

    #[test]
    fn test_lump_sum_savings_only() {
        let result = lump_sum(&LumpSumInput {
            current_age: 40,
            monthly_savings: dec!(500_000),
            saving_period_years: 20,
            average_annual_return: dec!(0.05),
        })
        .unwrap();

        // 240 months of 500k grows well past the 120M contributed
        assert!(result.total_amount_at_retirement > dec!(120_000_000));
        assert_eq!(
            result.monthly_pension,
            result.total_amount_at_retirement / dec!(360)
        );
    }

    #[test]
    fn test_age_past_sixty_rejected() {
        let result = lump_sum(&LumpSumInput {
            current_age: 61,
            monthly_savings: dec!(500_000),
            saving_period_years: 5,
            average_annual_return: dec!(0.05),
        });
        assert!(matches!(result, Err(LifeCalcError::InvalidInput { .. })));
    }
}
