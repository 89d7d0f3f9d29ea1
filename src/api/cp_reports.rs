use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCpReport {
    pub id: i64,
    pub country_id: i64,
    pub country_name: String,
    pub year: i32,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}
