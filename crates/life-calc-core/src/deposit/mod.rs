mod installment_savings;
mod term_deposit;

pub use installment_savings::{
    installment_savings_by_initial, installment_savings_by_target, Compounding,
};
pub use term_deposit::{term_deposit_by_initial, term_deposit_by_target};

use serde::{Deserialize, Serialize};

use crate::types::Money;

/// After-tax interest under the three Korean withholding treatments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestByTaxTreatment {
    /// Regular withholding, 15.4%.
    pub regular: Money,
    /// Preferential withholding, 9.5%.
    pub preferential: Money,
    /// No withholding.
    pub tax_free: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositOutput {
    pub total_savings: Money,
    pub interest_by_tax_type: InterestByTaxTreatment,
}

/// Initial deposit needed to hit a target, with the after-tax total under
/// each withholding treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDepositOutput {
    pub initial_deposit: Money,
    pub savings_by_tax_type: InterestByTaxTreatment,
}

pub(crate) const REGULAR_WITHHOLDING: rust_decimal::Decimal = rust_decimal_macros::dec!(0.154);
pub(crate) const PREFERENTIAL_WITHHOLDING: rust_decimal::Decimal = rust_decimal_macros::dec!(0.095);
