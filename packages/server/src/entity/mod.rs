pub mod banner;
pub mod customer_service;
pub mod event;
pub mod uploaded_image;
pub mod user;
