pub mod auth;
pub mod booking;
pub mod event;
pub mod health;
pub mod message;
pub mod user;
