use super::state::ProjectOrdering;
use crate::store::Intent;

/// Intents accepted by the project listing slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsIntent {
    SetCountry(Option<i64>),
    SetAgency(Option<i64>),
    SetSector(Option<String>),
    SetStatus(Option<String>),
    SetSearch(String),
    SetOrdering {
        ordering: ProjectOrdering,
        descending: bool,
    },
    Reset,
}

impl Intent for ProjectsIntent {}
