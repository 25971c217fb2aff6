//! Application Layer
//!
//! Contains business logic services, data transfer objects (DTOs) and the
//! explicit request-to-entity mapping functions. This layer orchestrates the
//! flow of data between the presentation and domain layers.

pub mod dto;
pub mod mappers;
pub mod services;
