pub mod auth;
pub mod booking;
pub mod event;
pub mod message;
pub mod user;
