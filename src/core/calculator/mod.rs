pub mod compensation;
pub mod daily;
pub mod expected;
pub mod grouping;
pub mod monthly;
