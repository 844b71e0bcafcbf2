//! Wire types for the SODA resource endpoint.
//!
//! Socrata serializes every column as a JSON string (numbers included) and
//! omits columns whose value is null, so every field here is optional and
//! numeric columns are kept as raw [`serde_json::Value`]s until normalization.

use serde::Deserialize;

/// One row of the restaurant inspection dataset as served by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InspectionRow {
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub business_id: Option<serde_json::Value>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub inspection_date: Option<String>,
    #[serde(default)]
    pub inspection_score: Option<serde_json::Value>,
    #[serde(default)]
    pub inspection_type: Option<String>,
    #[serde(default)]
    pub risk_category: Option<String>,
    #[serde(default)]
    pub violation_description: Option<String>,
}

/// Error envelope returned by Socrata for malformed queries and similar.
///
/// Seen in two shapes: `{"error": true, "message": "..."}` and
/// `{"code": "query.soql.no-such-column", "message": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
