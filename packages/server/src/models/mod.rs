pub mod auth;
pub mod banner;
pub mod customer_service;
pub mod event;
pub mod shared;
pub mod upload;
