//! Application state.

use sea_orm::DatabaseConnection;

/// State shared with every HTTP handler.
///
/// The database connection is a pooled handle, cloning the state is cheap and every clone
/// refers to the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the dish store
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
