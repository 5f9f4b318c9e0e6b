//! Axum route handlers for resume generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::generate_resume;
use crate::models::user::UserData;
use crate::state::AppState;

/// Request body for `POST /api/generate-resume`. Both fields are required;
/// they are optional here only so absence surfaces as a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    pub user_data: Option<UserData>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub html_code: String,
}

/// POST /api/generate-resume
///
/// Full pipeline: input validation → prompt → model call → structural
/// validation. Fails fast with 400 before any model call when either field
/// is absent.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let (user_data, job_description) = match (&request.user_data, &request.job_description) {
        (Some(user_data), Some(job_description)) if !job_description.trim().is_empty() => {
            (user_data, job_description)
        }
        _ => {
            return Err(AppError::Validation(
                "Missing userData or jobDescription".to_string(),
            ))
        }
    };

    let html_code = generate_resume(
        state.model.as_ref(),
        user_data,
        job_description,
        &state.config.debug_html_path,
    )
    .await?;

    Ok(Json(ResumeResponse { html_code }))
}
