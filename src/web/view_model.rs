use serde::Serialize;

use crate::db::models::{LotOccupancy, UserRecord, ViolationHistoryRecord, ViolationRecord};
use crate::db::DashboardRows;

/// Everything the renderer needs for one page, in the order storage
/// returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardView {
    pub users: Vec<UserRecord>,
    pub violations: Vec<ViolationRecord>,
    pub violation_history: Vec<ViolationHistoryRecord>,
    pub lot_occupancy: Vec<LotOccupancy>,
}

impl DashboardView {
    pub fn assemble(
        users: Vec<UserRecord>,
        violations: Vec<ViolationRecord>,
        violation_history: Vec<ViolationHistoryRecord>,
        lot_occupancy: Vec<LotOccupancy>,
    ) -> Self {
        Self {
            users,
            violations,
            violation_history,
            lot_occupancy,
        }
    }
}

impl From<DashboardRows> for DashboardView {
    fn from(rows: DashboardRows) -> Self {
        Self::assemble(
            rows.users,
            rows.violations,
            rows.violation_history,
            rows.lot_occupancy,
        )
    }
}
