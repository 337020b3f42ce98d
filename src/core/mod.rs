pub mod add;
pub mod calculator;
pub mod employee;
pub mod export;
pub mod list;
pub mod log;
pub mod report;
