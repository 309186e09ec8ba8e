//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `db` - Schema inspection
//! - `ops` - Data repair and seeding operations

pub mod args;

pub use args::{Cli, Commands};
