pub mod add;
pub mod calculator;
pub mod compensate;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod log;
pub mod logic;
