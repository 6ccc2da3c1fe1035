pub mod dto;
pub mod entity;
pub mod handler;
pub mod lifecycle;
pub mod period;
pub mod repository;
pub mod service;

pub use service::ReservationService;
