use axum::{routing::get, Router};
use std::sync::Arc;

use crate::db::DashboardStore;
use crate::web::render::DashboardRenderer;

pub use error::AppError;

pub mod assets;
pub mod error;
pub mod render;
pub mod routes;
pub mod section;
pub mod view_model;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DashboardStore>,
    pub renderer: Arc<DashboardRenderer>,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_axum_router(store: Arc<dyn DashboardStore>, renderer: DashboardRenderer) -> Router {
    let app_state = Arc::new(AppState {
        store,
        renderer: Arc::new(renderer),
    });

    Router::new()
        .route("/api/health", get(health_check_handler))
        .route("/static/{*path}", get(assets::static_handler))
        .merge(routes::dashboard_routes::dashboard_router())
        .with_state(app_state)
}
