use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::AppConfig;

const DB_MAX_CONNECTIONS: u32 = 10;
const DB_MIN_IDLE: u32 = 2;

pub async fn connect(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.database_url.clone());
    options
        .max_connections(DB_MAX_CONNECTIONS)
        .min_connections(DB_MIN_IDLE)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if is_in_memory_sqlite(&cfg.database_url) {
        // every pooled connection gets its own in-memory database, so the
        // pool must stay at a single connection
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    if is_sqlite(&cfg.database_url) {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }

    info!("syncing database schema from entities");
    db.get_schema_registry("todo_api::db::entities::*")
        .sync(&db)
        .await?;
    Ok(db)
}

fn is_sqlite(url: &str) -> bool {
    url.trim().to_ascii_lowercase().starts_with("sqlite:")
}

fn is_in_memory_sqlite(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    is_sqlite(&url) && (url.contains(":memory:") || url.contains("mode=memory"))
}

#[cfg(test)]
mod tests {
    use super::is_in_memory_sqlite;

    #[test]
    fn detects_in_memory_sqlite_urls() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(is_in_memory_sqlite("sqlite:file:test?mode=memory&cache=shared"));
        assert!(!is_in_memory_sqlite("sqlite://todos.db"));
        assert!(!is_in_memory_sqlite("postgres://localhost/todo_dev"));
    }
}
