mod parental_leave;
mod severance;
mod unemployment;

pub use parental_leave::{
    parental_leave_pay, LeavePeriod, ParentalLeaveInput, ParentalLeaveOutput,
    ParentalLeavePayment,
};
pub use severance::{severance_pay, SeverancePayInput, SeverancePayOutput};
pub use unemployment::{unemployment_benefit, UnemploymentInput, UnemploymentOutput};
