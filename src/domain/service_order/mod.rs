pub mod dto;
pub mod entity;
pub mod handler;
pub mod repository;
pub mod service;

pub use service::ServiceOrderService;
