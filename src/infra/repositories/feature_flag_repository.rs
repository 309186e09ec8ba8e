//! Feature-flag repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{AppError, AppResult};
use crate::infra::entities::feature_flag::{self, Entity as FeatureFlagEntity};

use super::is_duplicate_entry;

/// Feature-flag persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait FeatureFlagRepository: Send + Sync {
    /// List all flags
    async fn list(&self) -> AppResult<Vec<feature_flag::Model>>;

    /// Find a flag by its key
    async fn find_by_key(&self, key: &str) -> AppResult<Option<feature_flag::Model>>;

    /// Insert a flag; duplicate keys are a conflict
    async fn insert(&self, key: String, name: String, enabled: bool)
        -> AppResult<feature_flag::Model>;

    /// Set a flag's enabled state, returning the updated row
    async fn set_enabled(&self, key: &str, enabled: bool) -> AppResult<feature_flag::Model>;
}

/// SeaORM-backed implementation of [`FeatureFlagRepository`].
pub struct FeatureFlagStore {
    db: DatabaseConnection,
}

impl FeatureFlagStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeatureFlagRepository for FeatureFlagStore {
    async fn list(&self) -> AppResult<Vec<feature_flag::Model>> {
        FeatureFlagEntity::find()
            .order_by_asc(feature_flag::Column::FeatureKey)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<feature_flag::Model>> {
        FeatureFlagEntity::find()
            .filter(feature_flag::Column::FeatureKey.eq(key))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn insert(
        &self,
        key: String,
        name: String,
        enabled: bool,
    ) -> AppResult<feature_flag::Model> {
        let model = feature_flag::ActiveModel {
            feature_key: Set(key),
            feature_name: Set(name),
            is_enabled: Set(enabled),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_duplicate_entry(&e) {
                AppError::conflict("Feature flag")
            } else {
                e.into()
            }
        })
    }

    async fn set_enabled(&self, key: &str, enabled: bool) -> AppResult<feature_flag::Model> {
        let flag = self.find_by_key(key).await?.ok_or(AppError::NotFound)?;

        let mut model: feature_flag::ActiveModel = flag.into();
        model.is_enabled = Set(enabled);
        model.update(&self.db).await.map_err(Into::into)
    }
}
