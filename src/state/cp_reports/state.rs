use crate::store::SliceState;

/// Country programme report selection: which country and reporting year
/// the user is looking at. `None` means "all".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CpReportsState {
    pub country_id: Option<i64>,
    pub year: Option<i32>,
}

impl SliceState for CpReportsState {}
