//! The `services` module provides the read API the web layer consumes.

pub mod dashboard_service;

pub use dashboard_service::{DashboardRows, DashboardStore, MySqlDashboardStore};
