use std::fmt;

use super::models::Lot;

/// The fixed read statements the dashboard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Users,
    Violations,
    ViolationHistory,
    LotOccupancy(Lot),
}

// Row ids are widened to BIGINT, `carID` and `fine` to text, so decoding does
// not depend on the exact column types of the deployed schema.
const SELECT_USERS: &str = "SELECT CAST(userID AS SIGNED) AS userID, name, email, CAST(carID AS CHAR) AS carID, RFID_tag, building, parking_in FROM users";
const SELECT_VIOLATIONS: &str =
    "SELECT CAST(FineID AS SIGNED) AS FineID, CAST(carID AS CHAR) AS carID, timestamp, CAST(fine AS CHAR) AS fine FROM violations";
const SELECT_VIOLATION_HISTORY: &str =
    "SELECT CAST(FineID AS SIGNED) AS FineID, CAST(carID AS CHAR) AS carID, timestamp, CAST(fine AS CHAR) AS fine FROM violation_history";
const COUNT_LOT: &str = "SELECT COUNT(carID) AS total_cars FROM users WHERE parking_in = ?";

impl Statement {
    pub fn sql(self) -> &'static str {
        match self {
            Statement::Users => SELECT_USERS,
            Statement::Violations => SELECT_VIOLATIONS,
            Statement::ViolationHistory => SELECT_VIOLATION_HISTORY,
            Statement::LotOccupancy(_) => COUNT_LOT,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Users => f.write_str("users"),
            Statement::Violations => f.write_str("violations"),
            Statement::ViolationHistory => f.write_str("violation_history"),
            Statement::LotOccupancy(lot) => write!(f, "lot_occupancy({})", lot.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_and_active_read_different_tables() {
        assert!(Statement::Violations.sql().ends_with("FROM violations"));
        assert!(Statement::ViolationHistory.sql().ends_with("FROM violation_history"));
    }

    #[test]
    fn test_user_columns_in_display_order() {
        let sql = Statement::Users.sql();
        let columns = ["userID", "name", "email", "carID", "RFID_tag", "building", "parking_in"];
        let positions: Vec<usize> = columns
            .iter()
            .map(|c| sql.find(&format!(" {c}")).expect("column missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn test_car_id_is_read_as_text_everywhere() {
        for statement in [Statement::Users, Statement::Violations, Statement::ViolationHistory] {
            assert!(
                statement.sql().contains("CAST(carID AS CHAR) AS carID"),
                "{statement} reads carID without a cast"
            );
        }
    }

    #[test]
    fn test_lot_statement_is_parameterised() {
        for lot in Lot::ALL {
            let sql = Statement::LotOccupancy(lot).sql();
            assert!(sql.contains("parking_in = ?"));
            assert!(!sql.contains(lot.as_str()));
        }
        assert_eq!(
            Statement::LotOccupancy(Lot::Walker).to_string(),
            "lot_occupancy(Walker)"
        );
    }
}
