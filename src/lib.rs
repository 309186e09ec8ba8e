//! Student Hub - portal API server and operations CLI
//!
//! A relational-database-backed student portal (users, jobs, courses,
//! coding practice, feature flags, mentorship) with a single CLI entry
//! point that also carries the schema and data operations tooling.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, email, outbound HTTP)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Apply the migration list
//! cargo run -- migrate up
//!
//! # Inspect the schema
//! cargo run -- db describe users
//!
//! # Repair operations
//! cargo run -- ops reset-password --email someone@example.com --password newpass
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
