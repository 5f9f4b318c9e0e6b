use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The model client is carried as a trait object so tests (and alternate
/// backends) substitute their own `TextGenerator` at construction time —
/// there are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn TextGenerator>,
    pub config: Config,
}
