pub mod bill;
pub mod payment;
