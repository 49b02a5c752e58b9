use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ingest::{clean_extracted_roles, parse_xml_roles, DEFAULT_ROLE_ELEMENT};
use matcher::{generate_report, match_statistics, MatchResult, MatchStatistics};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Compare request
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Canonical roles from the XML document.
    #[serde(deserialize_with = "lenient_strings")]
    pub xml_roles: Vec<String>,

    /// Roles extracted from the PDF.
    #[serde(deserialize_with = "lenient_strings")]
    pub pdf_roles: Vec<String>,

    /// Overrides the server's default threshold for this request.
    #[serde(default)]
    pub fuzzy_threshold: Option<u8>,

    /// Include the rendered text report in the response.
    #[serde(default = "default_true")]
    pub include_report: bool,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub result: MatchResult,
    pub statistics: MatchStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CleanRolesRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct XmlRolesRequest {
    pub xml: String,
    #[serde(default)]
    pub role_element: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Strings pass through; any other JSON value in the array becomes `""`.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| match value {
            Value::String(s) => s,
            _ => String::new(),
        })
        .collect())
}

/// Reconcile PDF roles against XML roles (`POST /api/v1/compare`).
pub async fn compare_roles(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<CompareRequest>,
) -> ServerResult<impl IntoResponse> {
    let matcher = state.matcher_for(request.fuzzy_threshold)?;
    let result = matcher.compare(&request.xml_roles, &request.pdf_roles);
    let statistics = match_statistics(&result, &request.xml_roles, &request.pdf_roles);
    let report = request
        .include_report
        .then(|| generate_report(&result, &request.xml_roles, &request.pdf_roles));

    tracing::info!(
        xml_roles = request.xml_roles.len(),
        pdf_roles = request.pdf_roles.len(),
        incorrect = result.incorrect_pdf_roles.len(),
        fuzzy_threshold = matcher.config().fuzzy_threshold,
        "compare_complete"
    );

    Ok(Json(CompareResponse {
        result,
        statistics,
        report,
    }))
}

/// Clean a free-form role listing (`POST /api/v1/roles/clean`).
pub async fn clean_roles(ApiJson(request): ApiJson<CleanRolesRequest>) -> impl IntoResponse {
    Json(RolesResponse {
        roles: clean_extracted_roles(&request.text),
    })
}

/// Extract roles from an XML document body (`POST /api/v1/roles/xml`).
pub async fn xml_roles(
    ApiJson(request): ApiJson<XmlRolesRequest>,
) -> ServerResult<impl IntoResponse> {
    let role_element = request
        .role_element
        .as_deref()
        .unwrap_or(DEFAULT_ROLE_ELEMENT);
    let roles = parse_xml_roles(&request.xml, role_element)?;
    Ok(Json(RolesResponse { roles }))
}
