pub mod add;
pub mod compensate;
pub mod config;
pub mod dashboard;
pub mod day;
pub mod db;
pub mod del;
pub mod init;
pub mod log;
pub mod month;
pub mod plan;
