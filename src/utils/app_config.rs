use anyhow::Result;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dotenvy::dotenv;

use crate::sessions::SessionStore;

/// Shared application state handed to every request handler: the database
/// pool plus the live session-token map. No other cross-request state exists.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: Pool<ConnectionManager<PgConnection>>,
    pub sessions: SessionStore,
}

impl AppConfig {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>, sessions: SessionStore) -> Self {
        Self { pool, sessions }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variables");
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::new(manager)?;

        Ok(Self::new(pool, SessionStore::new()))
    }
}
