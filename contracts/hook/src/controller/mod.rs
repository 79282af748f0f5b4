pub mod access;
pub mod basket;
pub mod fees;
pub mod rates;
pub mod reserves;
pub mod swap;
pub mod weights;
