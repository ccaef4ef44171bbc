use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::db::StoreError;
use crate::web::render::DashboardRenderer;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl AppError {
    fn status_and_heading(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(StoreError::Connection(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
            }
            AppError::Store(StoreError::Query { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Could not read parking records")
            }
            AppError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Could not render dashboard"),
        }
    }

    /// Text shown to the browser. Driver messages stay in the log; they can
    /// carry account names and hosts.
    fn public_message(&self) -> String {
        match self {
            AppError::Store(StoreError::Connection(_)) => {
                "The parking database could not be reached.".to_string()
            }
            AppError::Store(StoreError::Query { statement, .. }) => {
                format!("Reading `{statement}` failed.")
            }
            AppError::Render(_) => "The dashboard page could not be built.".to_string(),
        }
    }

    /// Error page in the dashboard's own layout. Falls back to the plain
    /// document if the template itself fails.
    pub fn into_page(self, renderer: &DashboardRenderer) -> Response {
        let (status, heading) = self.status_and_heading();
        let message = self.public_message();
        let body = renderer
            .render_error(heading, &message)
            .unwrap_or_else(|_| error_document(heading, &message));
        (status, Html(body)).into_response()
    }
}

/// Minimal error document that does not go through Tera.
pub fn error_document(heading: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>Parking Lot Dashboard - Error</title>\n</head>\n<body>\n<h2>{}</h2>\n<p>{}</p>\n</body>\n</html>\n",
        tera::escape_html(heading),
        tera::escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::statements::Statement;

    #[test]
    fn test_status_codes() {
        let err = AppError::from(StoreError::Connection(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_and_heading().0, StatusCode::SERVICE_UNAVAILABLE);

        let err = AppError::from(StoreError::Query {
            statement: Statement::Users,
            source: sqlx::Error::RowNotFound,
        });
        assert_eq!(err.status_and_heading().0, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("users"));
    }

    #[test]
    fn test_public_message_hides_driver_text() {
        let err = AppError::from(StoreError::Connection(sqlx::Error::Protocol(
            "Access denied for user 'root'@'localhost'".to_string(),
        )));
        let message = err.public_message();
        assert!(!message.contains("root"));
        assert!(!message.contains("Access denied"));

        let err = AppError::from(StoreError::Query {
            statement: Statement::ViolationHistory,
            source: sqlx::Error::ColumnNotFound("secret_column".to_string()),
        });
        assert_eq!(err.public_message(), "Reading `violation_history` failed.");
    }

    #[test]
    fn test_page_uses_dashboard_layout() {
        let renderer = DashboardRenderer::new().unwrap();
        let err = AppError::from(StoreError::Connection(sqlx::Error::PoolClosed));
        let response = err.into_page(&renderer);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_error_document_escapes() {
        let html = error_document("Oops", "bad <input>");
        assert!(html.contains("bad &lt;input&gt;"));
        assert!(!html.contains("<tr>"));
    }
}
