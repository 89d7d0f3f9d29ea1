use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Executive committee meeting. Dates are absent for meetings that are
/// announced but not yet scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMeeting {
    pub id: i64,
    pub number: i64,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDecision {
    pub id: i64,
    pub meeting_id: i64,
    pub number: String,
    pub title: String,
}
