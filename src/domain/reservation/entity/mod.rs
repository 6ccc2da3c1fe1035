pub mod reservation;
pub mod stay;
