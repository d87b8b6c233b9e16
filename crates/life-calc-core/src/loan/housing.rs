use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{round_unit, Money, Rate};
use crate::LifeCalcResult;

/// Which housing arrangement costs less per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheaperOption {
    /// Monthly rent plus interest on a rent-deposit loan.
    MonthlyRent,
    /// Interest-only cost of a lease (jeonse) deposit loan.
    LeaseDeposit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentVsLeaseOutput {
    pub cheaper_option: CheaperOption,
    pub cost_difference: Money,
}

/// Compare the monthly cost of renting (loan interest + rent) against a
/// lease-deposit loan (interest only).
pub fn compare_rent_and_lease(
    rent_loan_amount: Money,
    rent_loan_rate: Rate,
    monthly_rent: Money,
    lease_loan_amount: Money,
    lease_loan_rate: Rate,
) -> RentVsLeaseOutput {
    let total_rent_cost = rent_loan_amount * rent_loan_rate / dec!(12) + monthly_rent;
    let total_lease_cost = lease_loan_amount * lease_loan_rate / dec!(12);

    if total_rent_cost < total_lease_cost {
        RentVsLeaseOutput {
            cheaper_option: CheaperOption::MonthlyRent,
            cost_difference: total_lease_cost - total_rent_cost,
        }
    } else {
        RentVsLeaseOutput {
            cheaper_option: CheaperOption::LeaseDeposit,
            cost_difference: total_rent_cost - total_lease_cost,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousePriceOutput {
    pub affordable_house_price: Money,
    pub required_loan_amount: Money,
}

/// Affordable house price from disposable monthly savings: the maximum
/// equal-installment loan those savings can service, plus current savings.
pub fn affordable_house_price(
    current_savings: Money,
    monthly_income: Money,
    monthly_expenses: Money,
    annual_rate: Rate,
    loan_term_years: u32,
) -> LifeCalcResult<HousePriceOutput> {
    let available_monthly = monthly_income - monthly_expenses;
    let monthly_rate = annual_rate / dec!(12);
    let repayment_months = loan_term_years * 12;

    if monthly_rate.is_zero() {
        return Err(LifeCalcError::DivisionByZero {
            context: "affordable house price annuity factor".into(),
        });
    }

    // Annuity present value: pmt * (1 - (1 + r)^-n) / r
    let discount = Decimal::ONE - Decimal::ONE / compound(monthly_rate, repayment_months);
    let max_loan_amount = available_monthly * discount / monthly_rate;

    Ok(HousePriceOutput {
        affordable_house_price: round_unit(current_savings + max_loan_amount),
        required_loan_amount: round_unit(max_loan_amount),
    })
}

/// Recompute the house price after the user adjusts the loan amount.
pub fn adjust_loan_amount(current_savings: Money, adjusted_loan_amount: Money) -> HousePriceOutput {
    HousePriceOutput {
        affordable_house_price: round_unit(current_savings + adjusted_loan_amount),
        required_loan_amount: round_unit(adjusted_loan_amount),
    }
}

fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}
