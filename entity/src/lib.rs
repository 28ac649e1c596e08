//! SeaORM entity definitions for the blog backend schema.

pub mod prelude;

pub mod blog;
pub mod message;
pub mod user;
