use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A replenishment of the fund for one triennium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReplenishment {
    pub id: i64,
    pub start_year: i32,
    pub end_year: i32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReplenishmentStatusFile {
    pub id: i64,
    pub year: i32,
    pub meeting_number: Option<i64>,
    pub filename: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}
