//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, request binding, business logic and data access. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Network Layer** (`network/`) - Request binding, validation messages, DTO mapping and response envelopes
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - API key check, authentication guards and session helpers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, API keys)
//! - **Startup** (`startup`) - Initialization of database, sessions and CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and checks the API key
//! 2. **Controller** binds and validates the request DTO, checks roles, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database and returns entities
//! 5. **Service** maps entities to domain models
//! 6. **Controller** maps domain model to DTO and returns the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod network;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
