//! Db command - schema inspection against the live database.

use crate::cli::args::{DbAction, DbArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the db command
pub async fn execute(args: DbArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        DbAction::Tables => {
            let tables = db
                .list_tables()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            for table in tables {
                println!("{}", table);
            }
        }
        DbAction::Describe { table } => {
            let columns = db
                .describe_table(&table)
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;

            if columns.is_empty() {
                return Err(AppError::validation(format!("Unknown table: {}", table)));
            }

            for col in columns {
                println!(
                    "{:<24} {:<32} nullable={} default={}",
                    col.name,
                    col.data_type,
                    col.is_nullable,
                    col.default.as_deref().unwrap_or("NULL")
                );
            }
        }
        DbAction::Ping => {
            db.ping()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            println!("ok");
        }
    }

    Ok(())
}
