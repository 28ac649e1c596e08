//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return entity models (or entity bundles such as `BlogWithAuthor`) which the service
//! layer maps into domain models. All database queries, inserts, updates, and deletes
//! are performed through these repositories.

pub mod blog;
pub mod message;
pub mod user;

#[cfg(test)]
mod test;
