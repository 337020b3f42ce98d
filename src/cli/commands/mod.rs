pub mod add;
pub mod config;
pub mod employee;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
