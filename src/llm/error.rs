use thiserror::Error;

/// Failures at the model-call boundary
///
/// Every variant collapses into the same fallback (the canned analysis);
/// the distinction only exists for logging.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("ANTHROPIC_API_KEY environment variable not set")]
    MissingCredential,

    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("model response contained no analysis")]
    EmptyResponse,

    #[error("failed to parse model output: {0}")]
    Json(#[from] serde_json::Error),
}
