use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCountry {
    pub id: i64,
    pub name: String,
    pub abbr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAgency {
    pub id: i64,
    pub name: String,
    pub acronym: String,
}

/// Controlled substance. ODP/GWP factors are null for substances the
/// protocol does not rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSubstance {
    pub id: i64,
    pub name: String,
    pub group_id: i64,
    pub odp: Option<f64>,
    pub gwp: Option<f64>,
    pub formula: Option<String>,
}

/// Annex group with its member substances inlined by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSubstancesGroup {
    pub id: i64,
    pub name: String,
    pub annex: String,
    #[serde(default)]
    pub substances: Vec<ApiSubstance>,
}
