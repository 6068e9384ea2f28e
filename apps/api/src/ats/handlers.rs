//! Axum route handlers for the ATS API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::ats::document::{JobDescription, JobDescriptionInput, ResumeDocument};
use crate::ats::guide::{
    best_practices, catalog_overview, common_issues, BestPractices, CatalogOverview, CommonIssue,
};
use crate::ats::validator::ValidationResult;
use crate::errors::AppError;
use crate::state::AppState;

/// Upper bound on documents per batch request.
pub const MAX_BATCH_SIZE: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub document: ResumeDocument,
    #[serde(default)]
    pub job_description: Option<JobDescriptionInput>,
}

impl ValidateRequest {
    fn into_parts(self) -> (ResumeDocument, Option<JobDescription>) {
        (self.document, self.job_description.map(JobDescription::from))
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchValidateRequest {
    pub items: Vec<ValidateRequest>,
}

#[derive(Debug, Serialize)]
pub struct BatchValidateResponse {
    pub results: Vec<ValidationResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/validate
///
/// Scores one resume, optionally against a job description.
pub async fn handle_validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, AppError> {
    let Json(request) = payload?;
    let (document, job) = request.into_parts();
    Ok(Json(state.validator.validate(&document, job.as_ref())))
}

/// POST /api/v1/ats/validate/batch
///
/// Scores up to `MAX_BATCH_SIZE` resumes on the blocking pool. Results keep request order.
pub async fn handle_validate_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchValidateRequest>, JsonRejection>,
) -> Result<Json<BatchValidateResponse>, AppError> {
    let Json(request) = payload?;
    if request.items.is_empty() {
        return Err(AppError::Validation("items cannot be empty".to_string()));
    }
    if request.items.len() > MAX_BATCH_SIZE {
        return Err(AppError::Validation(format!(
            "at most {MAX_BATCH_SIZE} items per batch, got {}",
            request.items.len()
        )));
    }

    let items: Vec<_> = request
        .items
        .into_iter()
        .map(ValidateRequest::into_parts)
        .collect();
    let validator = state.validator.clone();
    let results = tokio::task::spawn_blocking(move || {
        validator.validate_batch(items.iter().map(|(doc, job)| (doc, job.as_ref())))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(BatchValidateResponse { results }))
}

/// GET /api/v1/ats/best-practices
pub async fn handle_best_practices(State(state): State<AppState>) -> Json<BestPractices> {
    Json(best_practices(state.validator.catalog()))
}

/// GET /api/v1/ats/common-issues
pub async fn handle_common_issues(State(state): State<AppState>) -> Json<Vec<CommonIssue>> {
    Json(common_issues(state.validator.catalog()))
}

/// GET /api/v1/ats/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogOverview> {
    Json(catalog_overview(state.validator.catalog()))
}
