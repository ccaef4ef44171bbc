use async_trait::async_trait;
use sqlx::mysql::{MySqlConnection, MySqlPool, MySqlRow};
use sqlx::FromRow;
use tracing::{debug, error};

use crate::db::error::StoreError;
use crate::db::models::{Lot, LotOccupancy, UserRecord, ViolationHistoryRecord, ViolationRecord};
use crate::db::statements::Statement;

/// Everything one dashboard render reads from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardRows {
    pub users: Vec<UserRecord>,
    pub violations: Vec<ViolationRecord>,
    pub violation_history: Vec<ViolationHistoryRecord>,
    pub lot_occupancy: Vec<LotOccupancy>,
}

/// Source of dashboard rows. Any failure aborts the whole read.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn load_dashboard(&self) -> Result<DashboardRows, StoreError>;
}

pub struct MySqlDashboardStore {
    pool: MySqlPool,
}

impl MySqlDashboardStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for MySqlDashboardStore {
    async fn load_dashboard(&self) -> Result<DashboardRows, StoreError> {
        // One connection per request; it goes back to the pool when `conn`
        // drops, including on the early returns below.
        let mut conn = self.pool.acquire().await.map_err(|e| {
            error!(error = %e, "Failed to acquire a database connection.");
            StoreError::Connection(e)
        })?;

        let users = fetch_rows::<UserRecord>(&mut conn, Statement::Users).await?;
        let violations = fetch_rows::<ViolationRecord>(&mut conn, Statement::Violations).await?;
        let violation_history =
            fetch_rows::<ViolationHistoryRecord>(&mut conn, Statement::ViolationHistory).await?;

        let mut lot_occupancy = Vec::with_capacity(Lot::ALL.len());
        for lot in Lot::ALL {
            lot_occupancy.push(count_lot(&mut conn, lot).await?);
        }

        debug!(
            users = users.len(),
            violations = violations.len(),
            violation_history = violation_history.len(),
            "Loaded dashboard rows."
        );

        Ok(DashboardRows {
            users,
            violations,
            violation_history,
            lot_occupancy,
        })
    }
}

async fn fetch_rows<T>(conn: &mut MySqlConnection, statement: Statement) -> Result<Vec<T>, StoreError>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    sqlx::query_as::<_, T>(statement.sql())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(statement = %statement, error = %e, "Dashboard query failed.");
            StoreError::from_query(statement, e)
        })
}

async fn count_lot(conn: &mut MySqlConnection, lot: Lot) -> Result<LotOccupancy, StoreError> {
    let statement = Statement::LotOccupancy(lot);
    let count = sqlx::query_scalar::<_, i64>(statement.sql())
        .bind(lot.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(statement = %statement, error = %e, "Lot occupancy query failed.");
            StoreError::from_query(statement, e)
        })?;
    Ok(LotOccupancy { lot, count })
}
