//! Typed wrappers around the portal's list endpoints.
//!
//! Each wrapper owns its backend path and translates a filter struct into
//! query parameters. Filters build from the matching store slice, so the
//! store stays the single source of filter truth.

use super::client::FetchClient;
use super::envelope::ResultEnvelope;
use super::error::FetchError;
use super::options::FetchOptions;
use super::request::ListRequest;
use crate::api::{
    ApiBpActivity, ApiBusinessPlan, ApiCpReport, ApiDecision, ApiMeeting, ApiProject,
    ApiReplenishment, ApiReplenishmentStatusFile, ApiSubstancesGroup,
};
use crate::state::business_plans::{BpStatus, BusinessPlansState};
use crate::state::cp_reports::CpReportsState;
use crate::state::projects::ProjectsState;

pub const BUSINESS_PLANS: &str = "api/business-plans/";
pub const BP_ACTIVITIES: &str = "api/business-plan-activities/";
pub const MEETINGS: &str = "api/meetings/";
pub const DECISIONS: &str = "api/decisions/";
pub const SUBSTANCES_GROUPS: &str = "api/substances-groups/";
pub const PROJECTS: &str = "api/projects/";
pub const CP_REPORTS: &str = "api/country-programme/reports/";
pub const REPLENISHMENTS: &str = "api/replenishments/";
pub const REPLENISHMENT_STATUS_FILES: &str = "api/replenishment/status-files/";

/// Query parameters of the business plan listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessPlanFilter {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub agency_ids: Vec<i64>,
    pub statuses: Vec<BpStatus>,
    pub search: String,
}

impl BusinessPlanFilter {
    /// Filter as currently selected in the store.
    pub fn from_state(state: &BusinessPlansState) -> Self {
        BusinessPlanFilter {
            start_year: state.start_year,
            end_year: state.end_year,
            agency_ids: state.agency_ids.clone(),
            statuses: state.statuses.clone(),
            search: state.search.clone(),
        }
    }

    fn apply(&self, mut request: ListRequest) -> ListRequest {
        if let Some(year) = self.start_year {
            request = request.query("year_start", year);
        }
        if let Some(year) = self.end_year {
            request = request.query("year_end", year);
        }
        if !self.agency_ids.is_empty() {
            request = request.query("agency_id", join_ids(&self.agency_ids));
        }
        if !self.statuses.is_empty() {
            let statuses: Vec<&str> = self
                .statuses
                .iter()
                .map(|status| status.as_query_value())
                .collect();
            request = request.query("status", statuses.join(","));
        }
        if !self.search.is_empty() {
            request = request.query("search", &self.search);
        }
        request
    }
}

/// Query parameters of the project listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub country_id: Option<i64>,
    pub agency_id: Option<i64>,
    pub sector: Option<String>,
    pub status: Option<String>,
    pub search: String,
    /// Backend field name, `-` prefixed for descending.
    pub ordering: Option<String>,
}

impl ProjectFilter {
    pub fn from_state(state: &ProjectsState) -> Self {
        let field = state.ordering.as_query_value();
        let ordering = if state.descending {
            format!("-{field}")
        } else {
            field.to_string()
        };

        ProjectFilter {
            country_id: state.country_id,
            agency_id: state.agency_id,
            sector: state.sector.clone(),
            status: state.status.clone(),
            search: state.search.clone(),
            ordering: Some(ordering),
        }
    }

    fn apply(&self, mut request: ListRequest) -> ListRequest {
        if let Some(id) = self.country_id {
            request = request.query("country_id", id);
        }
        if let Some(id) = self.agency_id {
            request = request.query("agency_id", id);
        }
        if let Some(sector) = &self.sector {
            request = request.query("sector", sector);
        }
        if let Some(status) = &self.status {
            request = request.query("status", status);
        }
        if !self.search.is_empty() {
            request = request.query("search", &self.search);
        }
        if let Some(ordering) = &self.ordering {
            request = request.query("ordering", ordering);
        }
        request
    }
}

/// Query parameters of the country programme report listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpReportFilter {
    pub country_id: Option<i64>,
    pub year: Option<i32>,
}

impl CpReportFilter {
    pub fn from_state(state: &CpReportsState) -> Self {
        CpReportFilter {
            country_id: state.country_id,
            year: state.year,
        }
    }

    fn apply(&self, mut request: ListRequest) -> ListRequest {
        if let Some(id) = self.country_id {
            request = request.query("country_id", id);
        }
        if let Some(year) = self.year {
            request = request.query("year", year);
        }
        request
    }
}

/// Lists business plans matching the filter.
pub async fn business_plans(
    client: &FetchClient,
    filter: &BusinessPlanFilter,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiBusinessPlan>, FetchError> {
    let request = filter.apply(ListRequest::get(BUSINESS_PLANS).options(options));
    client.list(&request).await
}

/// Lists activities, optionally those of a single business plan.
pub async fn bp_activities(
    client: &FetchClient,
    business_plan_id: Option<i64>,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiBpActivity>, FetchError> {
    let mut request = ListRequest::get(BP_ACTIVITIES).options(options);
    if let Some(id) = business_plan_id {
        request = request.query("business_plan_id", id);
    }
    client.list(&request).await
}

pub async fn meetings(
    client: &FetchClient,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiMeeting>, FetchError> {
    let request = ListRequest::get(MEETINGS).options(options);
    client.list(&request).await
}

/// Lists decisions, optionally those taken at a single meeting.
pub async fn decisions(
    client: &FetchClient,
    meeting_id: Option<i64>,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiDecision>, FetchError> {
    let mut request = ListRequest::get(DECISIONS).options(options);
    if let Some(id) = meeting_id {
        request = request.query("meeting_id", id);
    }
    client.list(&request).await
}

pub async fn substances_groups(
    client: &FetchClient,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiSubstancesGroup>, FetchError> {
    let request = ListRequest::get(SUBSTANCES_GROUPS).options(options);
    client.list(&request).await
}

pub async fn projects(
    client: &FetchClient,
    filter: &ProjectFilter,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiProject>, FetchError> {
    let request = filter.apply(ListRequest::get(PROJECTS).options(options));
    client.list(&request).await
}

pub async fn cp_reports(
    client: &FetchClient,
    filter: &CpReportFilter,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiCpReport>, FetchError> {
    let request = filter.apply(ListRequest::get(CP_REPORTS).options(options));
    client.list(&request).await
}

pub async fn replenishments(
    client: &FetchClient,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiReplenishment>, FetchError> {
    let request = ListRequest::get(REPLENISHMENTS).options(options);
    client.list(&request).await
}

pub async fn replenishment_status_files(
    client: &FetchClient,
    options: FetchOptions,
) -> Result<ResultEnvelope<ApiReplenishmentStatusFile>, FetchError> {
    let request = ListRequest::get(REPLENISHMENT_STATUS_FILES).options(options);
    client.list(&request).await
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
