use crate::config::AppConfig;
use sea_orm::DatabaseConnection;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db,
            config,
            started_at: Instant::now(),
        }
    }
}
