//! Feature-flag service - seeding and toggling portal features.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::DEFAULT_FEATURE_FLAGS;
use crate::errors::AppResult;
use crate::infra::entities::feature_flag;
use crate::infra::UnitOfWork;

/// Outcome of a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
    pub skipped: u64,
}

/// Feature-flag operations.
#[async_trait]
pub trait FeatureService: Send + Sync {
    /// List all flags
    async fn list_flags(&self) -> AppResult<Vec<feature_flag::Model>>;

    /// Insert every default flag that is not already present. Running
    /// twice inserts nothing the second time.
    async fn seed_defaults(&self) -> AppResult<SeedReport>;

    /// Enable or disable a flag by key
    async fn set_enabled(&self, key: &str, enabled: bool) -> AppResult<feature_flag::Model>;
}

/// Concrete implementation of FeatureService using Unit of Work.
pub struct FeatureManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FeatureManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FeatureService for FeatureManager<U> {
    async fn list_flags(&self) -> AppResult<Vec<feature_flag::Model>> {
        self.uow.flags().list().await
    }

    async fn seed_defaults(&self) -> AppResult<SeedReport> {
        let mut report = SeedReport::default();

        for (key, name, enabled) in DEFAULT_FEATURE_FLAGS {
            if self.uow.flags().find_by_key(key).await?.is_some() {
                report.skipped += 1;
                continue;
            }

            self.uow
                .flags()
                .insert(key.to_string(), name.to_string(), *enabled)
                .await?;
            report.inserted += 1;
            tracing::info!(key, enabled, "Seeded feature flag");
        }

        Ok(report)
    }

    async fn set_enabled(&self, key: &str, enabled: bool) -> AppResult<feature_flag::Model> {
        self.uow.flags().set_enabled(key, enabled).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockFeatureFlagRepository;
    use crate::services::test_support::StubUow;

    fn flag_row(key: &str, name: &str, enabled: bool) -> feature_flag::Model {
        feature_flag::Model {
            id: 1,
            feature_key: key.to_string(),
            feature_name: name.to_string(),
            is_enabled: enabled,
        }
    }

    #[tokio::test]
    async fn test_seed_inserts_all_on_empty_table() {
        let mut flags = MockFeatureFlagRepository::new();
        flags.expect_find_by_key().returning(|_| Ok(None));
        flags
            .expect_insert()
            .times(DEFAULT_FEATURE_FLAGS.len())
            .returning(|key, name, enabled| Ok(flag_row(&key, &name, enabled)));

        let uow = Arc::new(StubUow::new().with_flags(flags));
        let features = FeatureManager::new(uow);

        let report = features.seed_defaults().await.unwrap();
        assert_eq!(report.inserted, DEFAULT_FEATURE_FLAGS.len() as u64);
        assert_eq!(report.skipped, 0);
    }

    #[tokio::test]
    async fn test_second_seed_run_inserts_nothing() {
        let mut flags = MockFeatureFlagRepository::new();
        flags
            .expect_find_by_key()
            .returning(|key| Ok(Some(flag_row(key, "Anything", false))));
        flags.expect_insert().times(0);

        let uow = Arc::new(StubUow::new().with_flags(flags));
        let features = FeatureManager::new(uow);

        let report = features.seed_defaults().await.unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, DEFAULT_FEATURE_FLAGS.len() as u64);
    }

    #[tokio::test]
    async fn test_partial_seed_fills_only_gaps() {
        // "dashboard" already present; everything else missing
        let mut flags = MockFeatureFlagRepository::new();
        flags.expect_find_by_key().returning(|key| {
            if key == "dashboard" {
                Ok(Some(flag_row(key, "Dashboard", true)))
            } else {
                Ok(None)
            }
        });
        flags
            .expect_insert()
            .times(DEFAULT_FEATURE_FLAGS.len() - 1)
            .returning(|key, name, enabled| Ok(flag_row(&key, &name, enabled)));

        let uow = Arc::new(StubUow::new().with_flags(flags));
        let features = FeatureManager::new(uow);

        let report = features.seed_defaults().await.unwrap();
        assert_eq!(report.inserted, DEFAULT_FEATURE_FLAGS.len() as u64 - 1);
        assert_eq!(report.skipped, 1);
    }
}
