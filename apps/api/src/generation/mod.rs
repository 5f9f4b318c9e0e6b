// Resume generation engine: keyword analysis, prompt building, the model
// call, and structural validation of the returned document.
// All model calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod validate;
