//! HTTP Request Handlers

pub mod airport_booking;
pub mod booking;
pub mod contact;
pub mod health;
