//! Generic batched insert-or-replace-by-key.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};

use super::errors::{Result, StoreError};

/// Upsert a batch of documents in one statement.
///
/// Builds a single `INSERT ... ON CONFLICT (key) DO UPDATE` so that
/// re-ingesting a document with a known key overwrites its fields instead
/// of creating a duplicate. Re-running with the same input converges to
/// the same final state regardless of prior partial application.
///
/// Returns immediately with 0 when `models` is empty; otherwise returns
/// the number of rows written.
pub async fn bulk_upsert<A>(
    db: &DatabaseConnection,
    models: Vec<A>,
    key: <A::Entity as EntityTrait>::Column,
    update: &[<A::Entity as EntityTrait>::Column],
) -> Result<u64>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if models.is_empty() {
        return Ok(0);
    }

    let on_conflict = OnConflict::column(key)
        .update_columns(update.iter().copied())
        .to_owned();

    <A::Entity as EntityTrait>::insert_many(models)
        .on_conflict(on_conflict)
        .exec_without_returning(db)
        .await
        .map_err(StoreError::from)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};
    use uuid::Uuid;

    use crate::entity::organization::{ActiveModel, Column};

    use super::*;

    fn org_model(platform_id: i64, login: &str) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            platform_id: Set(platform_id),
            login: Set(login.to_string()),
            name: Set(None),
            description: Set(None),
            synced_at: Set(Utc::now().fixed_offset()),
        }
    }

    #[tokio::test]
    async fn empty_input_performs_zero_writes() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let written = bulk_upsert::<ActiveModel>(
            &db,
            Vec::new(),
            Column::PlatformId,
            &[Column::Login, Column::SyncedAt],
        )
        .await
        .expect("empty upsert should succeed");

        assert_eq!(written, 0);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn returns_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                rows_affected: 2,
                last_insert_id: 0,
            }])
            .into_connection();

        let written = bulk_upsert(
            &db,
            vec![org_model(1, "acme"), org_model(2, "globex")],
            Column::PlatformId,
            &[Column::Login, Column::SyncedAt],
        )
        .await
        .expect("upsert should succeed");

        assert_eq!(written, 2);
    }

    #[tokio::test]
    async fn statement_upserts_on_the_unique_key() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                rows_affected: 1,
                last_insert_id: 0,
            }])
            .into_connection();

        bulk_upsert(
            &db,
            vec![org_model(1, "acme")],
            Column::PlatformId,
            &[Column::Login, Column::Name, Column::Description, Column::SyncedAt],
        )
        .await
        .expect("upsert should succeed");

        let log = db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ON CONFLICT"), "missing ON CONFLICT: {sql}");
        assert!(sql.contains("platform_id"), "conflict key absent: {sql}");
        assert!(sql.contains("synced_at"), "synced_at not updated: {sql}");
    }
}
