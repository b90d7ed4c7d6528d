//! Application state management.
//!
//! The shared state is cloned for each handler (inexpensive clones): the
//! configuration plus the optional PostgreSQL connection backing the record
//! store.

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool; `None` when running on the in-memory store
    pub db: Option<sea_orm::DatabaseConnection>,
}
