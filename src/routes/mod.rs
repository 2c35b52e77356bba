use axum::{
    Router,
    routing::{get, post},
};
use foodgram_shopping::ExportFormat;
use sqlx::SqlitePool;

mod favorite;
mod health;
mod shopping;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub export_format: ExportFormat,
    pub query: foodgram_shopping::Query,
    pub command: foodgram_shopping::Command,
    pub favorites: foodgram_shopping::Favorites,
    pub read_db: SqlitePool,
}

impl AppState {
    /// Build the state from already configured pools.
    ///
    /// Fails when the export section of the config is invalid.
    pub fn new(
        config: crate::config::Config,
        read_db: SqlitePool,
        write_db: SqlitePool,
    ) -> anyhow::Result<Self> {
        let export_format = config.export.format().map_err(|e| anyhow::anyhow!(e))?;

        Ok(Self {
            config,
            export_format,
            query: foodgram_shopping::Query(read_db.clone()),
            command: foodgram_shopping::Command::new(read_db.clone(), write_db.clone()),
            favorites: foodgram_shopping::Favorites::new(read_db.clone(), write_db),
            read_db,
        })
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.read_db.clone())
        .route(
            "/api/recipes/download_shopping_cart/",
            get(shopping::download),
        )
        .route("/api/recipes/shopping_cart/", get(shopping::list))
        .route(
            "/api/recipes/{id}/shopping_cart/",
            post(shopping::add).delete(shopping::remove),
        )
        .route("/api/recipes/favorites/", get(favorite::list))
        .route(
            "/api/recipes/{id}/favorite/",
            post(favorite::add).delete(favorite::remove),
        )
        .with_state(app_state)
}
