pub mod exchange;
pub mod fees;
