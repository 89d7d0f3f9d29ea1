use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProject {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub country: String,
    pub agency: String,
    pub sector: Option<String>,
    pub status: String,
    pub funds_approved: Option<f64>,
    pub date_approved: Option<NaiveDate>,
}
