use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::error;

use crate::web::view_model::DashboardView;
use crate::web::{AppError, AppState};

async fn load_and_render(app_state: &AppState) -> Result<Html<String>, AppError> {
    let rows = app_state.store.load_dashboard().await?;
    let view = DashboardView::from(rows);
    Ok(Html(app_state.renderer.render(&view)?))
}

async fn dashboard_handler(State(app_state): State<Arc<AppState>>) -> Response {
    match load_and_render(&app_state).await {
        Ok(page) => page.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to serve dashboard.");
            e.into_page(&app_state.renderer)
        }
    }
}

pub fn dashboard_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(dashboard_handler))
}
