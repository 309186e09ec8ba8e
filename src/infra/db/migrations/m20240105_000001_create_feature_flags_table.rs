//! Migration: Create the feature_flags table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_table("feature_flags").await? {
            return Ok(());
        }

        manager
            .create_table(
                Table::create()
                    .table(FeatureFlags::Table)
                    .col(
                        ColumnDef::new(FeatureFlags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeatureFlags::FeatureKey)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(FeatureFlags::FeatureName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeatureFlags::IsEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeatureFlags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FeatureFlags {
    Table,
    Id,
    FeatureKey,
    FeatureName,
    IsEnabled,
}
