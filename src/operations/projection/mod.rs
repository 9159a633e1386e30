mod divisions;

pub use divisions::{DivisionLine, ProjectDivisions};
