pub mod compensation;
pub mod daily_balance;
pub mod day_group;
pub mod monthly_balance;
pub mod punch;
pub mod punch_role;
pub mod wire;
