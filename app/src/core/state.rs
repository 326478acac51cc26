use sea_orm::DatabaseConnection;

use crate::config::{catalog::RoleCatalog, config::Config};

/// Request-scoped handle to everything handlers need. Constructed once in
/// `create_server` and shared behind an `Arc`; no module-level singletons.
#[derive(Clone, Debug)]
pub struct AppState {
    pub database: DatabaseConnection,
    pub config: Config,
    pub catalog: RoleCatalog,
}
