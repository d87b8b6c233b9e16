pub mod error;
pub mod types;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "deposit")]
pub mod deposit;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "salary")]
pub mod salary;

#[cfg(feature = "pension")]
pub mod pension;

#[cfg(feature = "real_estate")]
pub mod real_estate;

#[cfg(feature = "labor")]
pub mod labor;

#[cfg(feature = "health")]
pub mod health;

#[cfg(feature = "grade")]
pub mod grade;

#[cfg(feature = "calendar")]
pub mod calendar;

#[cfg(feature = "discount")]
pub mod discount;

pub use error::LifeCalcError;
pub use types::*;

/// Standard result type for all life-calc operations
pub type LifeCalcResult<T> = Result<T, LifeCalcError>;
