//! Resume generation — orchestrates the prompt → model → validation pipeline.
//!
//! Flow: build_prompt → model call → structural validation → raw HTML out.
//! The endpoint never retries; transient transport failures are retried
//! inside the model client only.

use std::path::Path;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{build_prompt, GENERATION_SYSTEM};
use crate::generation::validate::validate_document;
use crate::llm_client::TextGenerator;
use crate::models::user::UserData;

/// Runs the generation pipeline and returns the validated HTML document.
///
/// Steps:
/// 1. build_prompt() — deterministic; malformed input degrades to placeholders
/// 2. model.generate() — fixed system instruction, pinned sampling
/// 3. validate_document() — structural checklist over the returned text
/// 4. persist a debug copy (best-effort, never fails the request)
pub async fn generate_resume(
    model: &dyn TextGenerator,
    user: &UserData,
    job_description: &str,
    debug_html_path: &Path,
) -> Result<String, AppError> {
    // Step 1: Prompt
    let prompt = build_prompt(user, job_description);

    // Step 2: Model call
    let html = model
        .generate(&prompt, GENERATION_SYSTEM)
        .await
        .map_err(|e| AppError::Model(e.to_string()))?;

    // Step 3: Structural validation
    validate_document(&html).map_err(|missing| {
        AppError::InvalidHtml(format!(
            "Missing required sections or document structure ({})",
            missing.join(", ")
        ))
    })?;

    info!(
        "Generated resume document ({} bytes) for candidate {:?}",
        html.len(),
        user.name.as_deref().unwrap_or("Unknown Name")
    );

    // Step 4: Debug copy
    if let Err(e) = tokio::fs::write(debug_html_path, &html).await {
        warn!(
            "Failed to write debug copy to {}: {e}",
            debug_html_path.display()
        );
    }

    Ok(html)
}
