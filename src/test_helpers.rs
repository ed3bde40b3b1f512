use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, Profile},
    db::connection,
    state::AppState,
};

/// State backed by a fresh in-memory sqlite database with the schema synced.
pub async fn test_state() -> Arc<AppState> {
    let cfg = AppConfig::load(Profile::Testing).expect("load testing config");
    let db = connection::connect(&cfg)
        .await
        .expect("connect to in-memory sqlite");
    AppState::new(cfg, db)
}

/// State over a scripted connection (`sea_orm::MockDatabase`), for failure
/// injection without a real store.
pub fn mock_state(db: DatabaseConnection) -> Arc<AppState> {
    let cfg = AppConfig::load(Profile::Testing).expect("load testing config");
    AppState::new(cfg, db)
}
