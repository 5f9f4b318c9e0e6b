//! Axum route handler for the local-template rendering variant.
//!
//! Deterministic counterpart to `POST /api/generate-resume`: no model call,
//! the document assembler builds the HTML server-side.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::handlers::ResumeResponse;
use crate::models::user::UserData;
use crate::render::document::assemble;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResumeRequest {
    pub user_data: Option<UserData>,
}

/// POST /api/render-resume
pub async fn handle_render_resume(
    Json(request): Json<RenderResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let user_data = request
        .user_data
        .ok_or_else(|| AppError::Validation("Missing userData".to_string()))?;

    Ok(Json(ResumeResponse {
        html_code: assemble(&user_data),
    }))
}
