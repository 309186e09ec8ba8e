//! Ops command - data repair and seeding operations.
//!
//! These are the former one-off maintenance scripts. Each action is
//! idempotent where the underlying operation allows it, and logs what
//! it changed.

use std::sync::Arc;

use crate::cli::args::{OpsAction, OpsArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Mailer, Persistence};
use crate::services::{
    AccountManager, AccountService, FeatureManager, FeatureService, MentorshipManager,
    MentorshipService,
};

/// Execute the ops command
pub async fn execute(args: OpsArgs, config: Config) -> AppResult<()> {
    // test-email needs no database; everything else does
    if let OpsAction::TestEmail { to } = &args.action {
        return test_email(to, &config);
    }

    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let uow = Arc::new(Persistence::new(db.get_connection()));

    match args.action {
        OpsAction::ResetPassword { email, password } => {
            let accounts = AccountManager::new(uow);
            let outcome = accounts.reset_password(email.clone(), password).await?;

            if outcome.created {
                tracing::info!(%email, user_id = outcome.user.id, "Account did not exist; created it");
            } else {
                // Log hash prefixes so the change is auditable without
                // exposing usable material
                tracing::info!(
                    %email,
                    user_id = outcome.user.id,
                    before = hash_prefix(outcome.previous_hash.as_deref().unwrap_or("")),
                    after = hash_prefix(&outcome.user.password_hash),
                    "Password reset"
                );
            }
            println!(
                "{}: {}",
                email,
                if outcome.created { "created" } else { "password reset" }
            );
        }
        OpsAction::SeedFlags => {
            let features = FeatureManager::new(uow);
            let report = features.seed_defaults().await?;
            println!(
                "feature flags: {} inserted, {} already present",
                report.inserted, report.skipped
            );
        }
        OpsAction::Feature {
            key,
            enable,
            disable,
        } => {
            if enable == disable {
                return Err(AppError::validation(
                    "Pass exactly one of --enable or --disable",
                ));
            }

            let features = FeatureManager::new(uow);
            let flag = features.set_enabled(&key, enable).await?;
            println!(
                "{}: {}",
                flag.feature_key,
                if flag.is_enabled { "enabled" } else { "disabled" }
            );
        }
        OpsAction::BackfillBookingContacts => {
            let mentorship = MentorshipManager::new(uow);
            let repaired = mentorship.backfill_contacts().await?;
            tracing::info!(repaired, "Booking contact backfill finished");
            println!("bookings repaired: {}", repaired);
        }
        OpsAction::TestEmail { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn test_email(to: &str, config: &Config) -> AppResult<()> {
    let mailer = Mailer::from_config(config)?;
    mailer.send_test(to)?;
    println!("test email sent to {}", to);
    Ok(())
}

/// First few characters of a hash, for audit logs.
fn hash_prefix(hash: &str) -> &str {
    let end = hash.len().min(16);
    &hash[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prefix_truncates() {
        assert_eq!(hash_prefix("$argon2id$v=19$m=19456,t=2"), "$argon2id$v=19$m");
        assert_eq!(hash_prefix("short"), "short");
        assert_eq!(hash_prefix(""), "");
    }
}
