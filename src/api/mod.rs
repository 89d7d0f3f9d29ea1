//! Typed models for the portal backend's JSON responses.
//!
//! Shapes mirror the wire format: snake_case fields, integer primary keys,
//! ISO dates. Unknown fields are ignored and absent optionals default, so
//! the models stay compatible when the backend grows new fields.

mod business_plans;
mod common;
mod cp_reports;
mod meetings;
mod projects;
mod replenishment;

pub use business_plans::{ApiBpActivity, ApiBpActivityValue, ApiBusinessPlan};
pub use common::{ApiAgency, ApiCountry, ApiSubstance, ApiSubstancesGroup};
pub use cp_reports::ApiCpReport;
pub use meetings::{ApiDecision, ApiMeeting};
pub use projects::ApiProject;
pub use replenishment::{ApiReplenishment, ApiReplenishmentStatusFile};
