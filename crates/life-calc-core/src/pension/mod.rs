mod projection;

pub use projection::{
    lump_sum, monthly_pension, monthly_savings_plan, retirement_fund, LumpSumInput,
    LumpSumOutput, MonthlyPensionInput, MonthlyPensionOutput, MonthlySavingsPlanInput,
    MonthlySavingsPlanOutput, RetirementFundInput, RetirementFundOutput,
};
