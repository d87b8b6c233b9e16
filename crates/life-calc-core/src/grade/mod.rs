mod gpa;

pub use gpa::{compute_gpa, convert_score, Course, GpaOutput, GradeScale};
