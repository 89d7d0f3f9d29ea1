use crate::store::Intent;

use super::state::BpStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum BusinessPlansIntent {
    /// Switch the visible tab of the business plan section.
    SetActiveTab(usize),
    /// Restrict the listing to plans overlapping the given period.
    SetPeriod {
        start_year: Option<i32>,
        end_year: Option<i32>,
    },
    SetAgencies(Vec<i64>),
    SetStatuses(Vec<BpStatus>),
    SetSearch(String),
    /// Drop every listing filter. The active tab is navigation, not a
    /// filter, and stays where it is.
    ClearFilters,
}

impl Intent for BusinessPlansIntent {}
