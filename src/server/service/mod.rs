//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules such as slug uniqueness
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Mapping entity models into domain models before returning them

pub mod blog;
pub mod contact;

#[cfg(test)]
mod test;
