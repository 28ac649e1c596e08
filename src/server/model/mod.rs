//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are mapped from entity
//! models at the service boundary and mapped to DTOs at the controller boundary, both
//! through `MapFrom`.

pub mod blog;
pub mod message;
pub mod user;
