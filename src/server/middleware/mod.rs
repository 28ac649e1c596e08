//! Request guards and session helpers.
//!
//! - `api_key` - Axum middleware rejecting requests without a configured `x-api-key`
//! - `auth` - `AuthGuard` resolving the session user and checking their roles
//! - `session` - Typed wrapper over the authentication entries of the session

pub mod api_key;
pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
