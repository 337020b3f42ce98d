pub mod employee;
pub mod overtime;
