use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A registered driver.
/// Corresponds to the `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserRecord {
    #[sqlx(rename = "userID")]
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    #[sqlx(rename = "carID")]
    #[serde(rename = "carID")]
    pub car_id: Option<String>,
    #[sqlx(rename = "RFID_tag")]
    #[serde(rename = "RFID_tag")]
    pub rfid_tag: Option<String>,
    pub building: Option<String>,
    /// Lot the car is currently parked in, if any.
    pub parking_in: Option<String>,
}

/// An open fine.
/// Corresponds to the `violations` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ViolationRecord {
    #[sqlx(rename = "FineID")]
    #[serde(rename = "FineID")]
    pub fine_id: i64,
    #[sqlx(rename = "carID")]
    #[serde(rename = "carID")]
    pub car_id: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub fine: Option<String>,
}

/// An archived fine.
/// Corresponds to the `violation_history` table. Same columns as
/// [`ViolationRecord`], kept as its own type so the two tables never mix.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ViolationHistoryRecord {
    #[sqlx(rename = "FineID")]
    #[serde(rename = "FineID")]
    pub fine_id: i64,
    #[sqlx(rename = "carID")]
    #[serde(rename = "carID")]
    pub car_id: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub fine: Option<String>,
}

/// The named parking lots tracked by `users.parking_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Lot {
    JAlvin,
    Mayfield,
    Walker,
    Hutch,
}

impl Lot {
    pub const ALL: [Lot; 4] = [Lot::JAlvin, Lot::Mayfield, Lot::Walker, Lot::Hutch];

    pub fn as_str(self) -> &'static str {
        match self {
            Lot::JAlvin => "JAlvin",
            Lot::Mayfield => "Mayfield",
            Lot::Walker => "Walker",
            Lot::Hutch => "Hutch",
        }
    }
}

/// Number of cars currently parked in a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LotOccupancy {
    pub lot: Lot,
    pub count: i64,
}
