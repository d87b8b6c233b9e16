mod amortization;
mod housing;

pub use amortization::{
    compute_schedule, LoanRequest, LoanSchedule, RepaymentLine, RepaymentMethod,
};
pub use housing::{
    adjust_loan_amount, affordable_house_price, compare_rent_and_lease, CheaperOption,
    HousePriceOutput, RentVsLeaseOutput,
};
