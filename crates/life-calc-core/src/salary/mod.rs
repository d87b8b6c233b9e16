mod net_salary;

pub use net_salary::{
    net_salary, Deductions, SalaryBasis, SalaryInput, SalaryOutput, SeveranceTreatment,
};
