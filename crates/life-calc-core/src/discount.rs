use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::{round_unit, Money};
use crate::LifeCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountInput {
    pub original_price: Money,
    /// Percentage, 20 means 20% off.
    pub discount_rate_pct: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountOutput {
    pub discount_amount: Money,
    pub final_price: Money,
}

pub fn discount(input: &DiscountInput) -> LifeCalcResult<DiscountOutput> {
    if input.discount_rate_pct < Decimal::ZERO || input.discount_rate_pct > dec!(100) {
        return Err(LifeCalcError::InvalidInput {
            field: "discount_rate_pct".into(),
            reason: "rate must be between 0 and 100".into(),
        });
    }

    let discount_amount = input.original_price * input.discount_rate_pct / dec!(100);
    let final_price = input.original_price - discount_amount;

    Ok(DiscountOutput {
        discount_amount: round_unit(discount_amount),
        final_price: round_unit(final_price),
    })
}
