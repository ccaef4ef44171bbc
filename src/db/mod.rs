//! Read access to the parking database.
//!
//! The dashboard only ever reads. Every page load goes through a
//! [`DashboardStore`], which hands back all rows needed for one render.

pub mod error;
pub mod models;
pub mod services;
pub mod statements;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::str::FromStr;

pub use error::StoreError;
pub use services::{DashboardRows, DashboardStore, MySqlDashboardStore};

/// Builds the pool without connecting. Connections are opened on first
/// use, so the server can start while the database is unreachable.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<MySqlPool, StoreError> {
    let options = MySqlConnectOptions::from_str(database_url).map_err(StoreError::Connection)?;
    Ok(MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_url_is_a_connection_error() {
        let err = create_pool("not a url", 1).unwrap_err();
        assert!(err.is_connection());
    }
}
