mod area;
mod commission;

pub use area::{convert_area, AreaUnit};
pub use commission::{commission, CommissionInput, CommissionOutput, ContractType, PropertyType};
