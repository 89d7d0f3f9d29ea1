use std::str::FromStr;

use crate::store::SliceState;

/// Column the project listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectOrdering {
    #[default]
    Code,
    Title,
    Year,
}

impl ProjectOrdering {
    /// Backend field name for the `ordering` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            ProjectOrdering::Code => "code",
            ProjectOrdering::Title => "title",
            ProjectOrdering::Year => "year",
        }
    }
}

impl FromStr for ProjectOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(ProjectOrdering::Code),
            "title" => Ok(ProjectOrdering::Title),
            "year" => Ok(ProjectOrdering::Year),
            other => Err(format!(
                "unknown ordering '{other}' (expected code, title or year)"
            )),
        }
    }
}

/// Client-side state of the project listing: filters plus sort order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectsState {
    pub country_id: Option<i64>,
    pub agency_id: Option<i64>,
    pub sector: Option<String>,
    pub status: Option<String>,
    pub search: String,
    pub ordering: ProjectOrdering,
    pub descending: bool,
}

impl SliceState for ProjectsState {}
