//! Database migrations.
//!
//! The ordered, declarative migration list that replaces the old pile of
//! one-off bootstrap scripts. Each migration is named, idempotent, and
//! recorded once applied (via the `seaql_migrations` bookkeeping table),
//! so running `migrate up` twice is a no-op the second time.
//!
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}.
//! The later ALTER migrations additionally guard on column existence so
//! they are safe even against databases that predate the migrator.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240102_000001_create_jobs_tables;
mod m20240103_000001_create_course_tables;
mod m20240104_000001_create_coding_tables;
mod m20240105_000001_create_feature_flags_table;
mod m20240106_000001_create_mentorship_tables;
mod m20240107_000001_add_role_column;
mod m20240108_000001_add_profile_columns;
mod m20240109_000001_add_last_login;
mod m20240110_000001_add_booking_contact_columns;
mod m20240111_000001_extend_booking_status;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240102_000001_create_jobs_tables::Migration),
            Box::new(m20240103_000001_create_course_tables::Migration),
            Box::new(m20240104_000001_create_coding_tables::Migration),
            Box::new(m20240105_000001_create_feature_flags_table::Migration),
            Box::new(m20240106_000001_create_mentorship_tables::Migration),
            Box::new(m20240107_000001_add_role_column::Migration),
            Box::new(m20240108_000001_add_profile_columns::Migration),
            Box::new(m20240109_000001_add_last_login::Migration),
            Box::new(m20240110_000001_add_booking_contact_columns::Migration),
            Box::new(m20240111_000001_extend_booking_status::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_names_are_unique_and_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(names, sorted, "migration list must be unique and ordered");
    }

    #[test]
    fn test_create_migrations_precede_alters() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let last_create = names
            .iter()
            .rposition(|n| n.contains("create"))
            .expect("create migrations present");
        let first_alter = names
            .iter()
            .position(|n| n.contains("add") || n.contains("extend"))
            .expect("alter migrations present");

        assert!(last_create < first_alter);
    }
}
