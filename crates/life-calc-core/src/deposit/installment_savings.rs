use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_unit, Money, Rate};

use super::{
    DepositOutput, InterestByTaxTreatment, TargetDepositOutput, PREFERENTIAL_WITHHOLDING,
    REGULAR_WITHHOLDING,
};

/// Interest accrual basis for an installment savings account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    /// Simple annual interest over the whole term.
    Simple,
    /// Interest compounds monthly at annual_rate / 12.
    Monthly,
}

fn growth_factor(annual_rate: Rate, term_years: u32, compounding: Compounding) -> Decimal {
    match compounding {
        Compounding::Simple => Decimal::ONE + annual_rate * Decimal::from(term_years),
        Compounding::Monthly => {
            let monthly = Decimal::ONE + annual_rate / dec!(12);
            let mut factor = Decimal::ONE;
            for _ in 0..term_years * 12 {
                factor *= monthly;
            }
            factor
        }
    }
}

/// Savings account grown from an initial amount.
pub fn installment_savings_by_initial(
    initial_deposit: Money,
    term_years: u32,
    annual_rate: Rate,
    compounding: Compounding,
) -> DepositOutput {
    let total_savings = initial_deposit * growth_factor(annual_rate, term_years, compounding);
    let interest = total_savings - initial_deposit;

    DepositOutput {
        total_savings: round_unit(total_savings),
        interest_by_tax_type: InterestByTaxTreatment {
            regular: round_unit(interest * (Decimal::ONE - REGULAR_WITHHOLDING)),
            preferential: round_unit(interest * (Decimal::ONE - PREFERENTIAL_WITHHOLDING)),
            tax_free: round_unit(interest),
        },
    }
}

/// Initial amount needed to reach a target under the chosen accrual basis.
pub fn installment_savings_by_target(
    target_amount: Money,
    term_years: u32,
    annual_rate: Rate,
    compounding: Compounding,
) -> TargetDepositOutput {
    let initial_deposit = target_amount / growth_factor(annual_rate, term_years, compounding);
    let interest = target_amount - initial_deposit;

    TargetDepositOutput {
        initial_deposit: round_unit(initial_deposit),
        savings_by_tax_type: InterestByTaxTreatment {
            regular: round_unit(initial_deposit + interest * (Decimal::ONE - REGULAR_WITHHOLDING)),
            preferential: round_unit(
                initial_deposit + interest * (Decimal::ONE - PREFERENTIAL_WITHHOLDING),
            ),
            tax_free: round_unit(initial_deposit + interest),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_matches_term_deposit_shape() {
        let result =
            installment_savings_by_initial(dec!(10_000_000), 2, dec!(0.03), Compounding::Simple);
        assert_eq!(result.total_savings, dec!(10_600_000));
    }

    #[test]
    fn test_monthly_compounding_beats_simple() {
        let simple =
            installment_savings_by_initial(dec!(10_000_000), 5, dec!(0.03), Compounding::Simple);
        let monthly =
            installment_savings_by_initial(dec!(10_000_000), 5, dec!(0.03), Compounding::Monthly);
        assert!(monthly.total_savings > simple.total_savings);

        // (1 + 0.03/12)^60 ≈ 1.1616 -> about 11,616,170
        assert!((monthly.total_savings - dec!(11_616_170)).abs() <= dec!(10));
    }

    #[test]
    fn test_target_round_trips_initial() {
        let grown =
            installment_savings_by_initial(dec!(10_000_000), 3, dec!(0.04), Compounding::Monthly);
        let back = installment_savings_by_target(
            grown.total_savings,
            3,
            dec!(0.04),
            Compounding::Monthly,
        );
        // Rounded total re-inverted lands within a unit of the original
        assert!((back.initial_deposit - dec!(10_000_000)).abs() <= dec!(1));
    }
}
