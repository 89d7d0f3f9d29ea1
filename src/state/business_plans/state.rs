use std::str::FromStr;

use crate::store::SliceState;

/// Review status of a business plan, as filtered in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpStatus {
    Draft,
    Submitted,
    Endorsed,
    Approved,
}

impl BpStatus {
    /// Value sent to the backend in the `status` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            BpStatus::Draft => "draft",
            BpStatus::Submitted => "submitted",
            BpStatus::Endorsed => "endorsed",
            BpStatus::Approved => "approved",
        }
    }
}

impl FromStr for BpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(BpStatus::Draft),
            "submitted" => Ok(BpStatus::Submitted),
            "endorsed" => Ok(BpStatus::Endorsed),
            "approved" => Ok(BpStatus::Approved),
            other => Err(format!(
                "unknown business plan status '{other}' (expected draft, submitted, endorsed or approved)"
            )),
        }
    }
}

/// Client-side state of the business plan section: the active tab plus
/// the listing filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BusinessPlansState {
    pub active_tab: usize,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub agency_ids: Vec<i64>,
    pub statuses: Vec<BpStatus>,
    pub search: String,
}

impl SliceState for BusinessPlansState {}

impl BusinessPlansState {
    /// True when any listing filter deviates from the default view.
    pub fn has_filters(&self) -> bool {
        self.start_year.is_some()
            || self.end_year.is_some()
            || !self.agency_ids.is_empty()
            || !self.statuses.is_empty()
            || !self.search.is_empty()
    }
}
