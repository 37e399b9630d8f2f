//! Database migrations for the gitmirror schema.

use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20250601_000001_create_schema;

/// Migrator holding every schema migration.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_schema::Migration)]
    }
}
