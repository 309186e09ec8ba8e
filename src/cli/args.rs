//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Every former
//! one-off script is a subcommand here; all of them share the exit-code
//! contract of 0 for success or no-op and 1 for unexpected failure.

use clap::{Parser, Subcommand};

/// Student Hub - portal API server and operations CLI
#[derive(Parser, Debug)]
#[command(name = "student-hub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Inspect the database schema
    Db(DbArgs),

    /// Data repair and seeding operations
    Ops(OpsArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the db inspection command
#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub action: DbAction,
}

/// Schema inspection actions
#[derive(Subcommand, Debug)]
pub enum DbAction {
    /// List all tables in the configured database
    Tables,
    /// Describe the columns of a table
    Describe {
        /// Table name
        table: String,
    },
    /// Check database connectivity
    Ping,
}

/// Arguments for the ops command
#[derive(Parser, Debug)]
pub struct OpsArgs {
    #[command(subcommand)]
    pub action: OpsAction,
}

/// Data repair and seeding actions
#[derive(Subcommand, Debug)]
pub enum OpsAction {
    /// Reset a user's password (creates the user if missing)
    ResetPassword {
        /// Email of the account to reset
        #[arg(long)]
        email: String,
        /// New plaintext password to hash and store
        #[arg(long)]
        password: String,
    },
    /// Seed the default feature flags (skips existing keys)
    SeedFlags,
    /// Enable or disable a feature flag
    Feature {
        /// Feature key, e.g. "courses"
        key: String,
        /// Enable the flag
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        /// Disable the flag
        #[arg(long)]
        disable: bool,
    },
    /// Copy user name/email onto booking rows where missing
    BackfillBookingContacts,
    /// Send a test email through the configured SMTP account
    TestEmail {
        /// Recipient address
        #[arg(long)]
        to: String,
    },
}
