use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{round_unit, Money, Rate};

use super::{
    DepositOutput, InterestByTaxTreatment, TargetDepositOutput, PREFERENTIAL_WITHHOLDING,
    REGULAR_WITHHOLDING,
};

/// Term deposit at simple annual interest, starting from an initial amount.
pub fn term_deposit_by_initial(
    initial_deposit: Money,
    term_years: u32,
    annual_rate: Rate,
) -> DepositOutput {
    let total_savings = initial_deposit * (Decimal::ONE + annual_rate * Decimal::from(term_years));
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

/// Initial amount needed to reach a target via simple annual interest.
pub fn term_deposit_by_target(
    target_amount: Money,
    term_years: u32,
    annual_rate: Rate,
) -> TargetDepositOutput {
    let initial_deposit =
        target_amount / (Decimal::ONE + annual_rate * Decimal::from(term_years));
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
