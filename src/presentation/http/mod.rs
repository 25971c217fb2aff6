//! HTTP Module

pub mod handlers;
pub mod routes;
