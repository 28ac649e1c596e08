//! Request and response DTOs exchanged over the HTTP API.
//!
//! Request DTOs carry their validation rules (`validator` derive) and implement
//! `Dto` with a message table for failing fields. Response DTOs implement `MapFrom`
//! for the domain models they are built from.

pub mod api;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod pagination;
