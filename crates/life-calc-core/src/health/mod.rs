mod bmi;
mod calorie;
mod ideal_weight;
mod ovulation;

pub use bmi::{bmi, BmiCategory, BmiOutput};
pub use calorie::{calories_burned, Exercise};
pub use ideal_weight::{ideal_weight, Gender, IdealWeightInput, IdealWeightOutput};
pub use ovulation::{ovulation_window, OvulationInput, OvulationOutput};
