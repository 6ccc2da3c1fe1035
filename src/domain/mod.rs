pub mod auth;
pub mod bill;
pub mod equipment;
pub mod health;
pub mod pricing;
pub mod reservation;
pub mod room;
pub mod service_order;
pub mod user;
