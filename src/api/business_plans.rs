use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ApiAgency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiBusinessPlan {
    pub id: i64,
    pub agency: ApiAgency,
    pub year_start: i32,
    pub year_end: i32,
    pub status: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One yearly row of an activity's planned values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiBpActivityValue {
    pub year: i32,
    pub usd: f64,
    pub odp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiBpActivity {
    pub id: i64,
    pub business_plan_id: i64,
    pub title: String,
    pub country: String,
    pub project_type: String,
    #[serde(default)]
    pub values: Vec<ApiBpActivityValue>,
}
