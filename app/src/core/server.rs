use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tracing::info;

use crate::{
    config::{catalog::RoleCatalog, config::Config},
    core::state::AppState,
    database::connect::{connect_database, run_migrations},
    routes::create_routers,
};

pub async fn create_server(config: Config) -> Result<Router<()>> {
    let db_conn = connect_database(config.clone()).await?;
    run_migrations(&db_conn).await?;

    let catalog = RoleCatalog::load_from_file(&config.roles_file)?;
    info!(
        "Loaded role catalog with {} roles from {}",
        catalog.roles.len(),
        config.roles_file
    );

    let state = AppState {
        database: db_conn,
        config,
        catalog,
    };

    let app = create_routers(Arc::new(state));

    Ok(app)
}
