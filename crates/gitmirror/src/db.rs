//! Database connection utilities.

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Configure SQLite-specific pragmas for better concurrency.
///
/// Sets WAL journaling, a 5 second busy timeout, and NORMAL synchronous
/// mode.
async fn configure_sqlite(db: &DatabaseConnection) -> Result<(), DbErr> {
    use sea_orm::{ConnectionTrait, Statement};

    for pragma in [
        "PRAGMA journal_mode=WAL",
        "PRAGMA busy_timeout=5000",
        "PRAGMA synchronous=NORMAL",
    ] {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            pragma.to_string(),
        ))
        .await?;
    }

    Ok(())
}

/// Establish a connection to the database.
///
/// # Arguments
/// * `database_url` - Connection string (e.g. `sqlite:///path/to/mirror.db?mode=rwc`)
///
/// # Errors
/// Returns `DbErr` if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    if database_url.starts_with("sqlite://") {
        configure_sqlite(&db).await?;
    }

    Ok(db)
}

/// Establish a connection and apply all pending migrations.
///
/// This is the recommended way to initialize the database: it ensures the
/// schema exists before the first sync.
pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    use sea_orm_migration::MigratorTrait;

    let db = connect(database_url).await?;
    crate::migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn configure_sqlite_runs_all_pragmas() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([
                MockExecResult {
                    rows_affected: 0,
                    last_insert_id: 0,
                },
                MockExecResult {
                    rows_affected: 0,
                    last_insert_id: 0,
                },
                MockExecResult {
                    rows_affected: 0,
                    last_insert_id: 0,
                },
            ])
            .into_connection();

        configure_sqlite(&db)
            .await
            .expect("mock sqlite pragma execs should succeed");
    }

    #[tokio::test]
    async fn connect_rejects_invalid_database_url() {
        let err = connect("this-is-not-a-db-url")
            .await
            .expect_err("invalid URL should error");
        assert!(!err.to_string().is_empty());
    }
}
