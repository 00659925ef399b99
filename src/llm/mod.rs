pub mod client;
pub mod error;
pub mod mock;
pub mod prompts;

pub use client::*;
pub use error::*;
pub use mock::*;
pub use prompts::*;

use std::time::Duration;

use tracing::{info, warn};

use crate::models::{AnalysisResult, CallContext};

/// Fixed delay standing in for a model round-trip when no credential is set
const MOCK_LATENCY: Duration = Duration::from_secs(2);

/// Run one analysis, substituting the canned result on any failure
///
/// This is the single fallback point of the whole pipeline: missing
/// credential, transport error, API error, empty response, and parse
/// failure all collapse into the same canned analysis. No retry, no
/// timeout, no partial-result handling. The confirmed call context is
/// attached to whatever result comes back.
pub async fn analyze_transcript(
    transcript: &str,
    context: Option<CallContext>,
    offline: bool,
) -> AnalysisResult {
    let mut result = run_model(transcript, context.as_ref(), offline).await;
    result.context = context;
    result
}

async fn run_model(
    transcript: &str,
    context: Option<&CallContext>,
    offline: bool,
) -> AnalysisResult {
    if offline {
        info!("Offline mode requested, using canned analysis");
        return mock_analysis();
    }

    let config = match AnthropicConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; returning canned analysis");
            tokio::time::sleep(MOCK_LATENCY).await;
            return mock_analysis();
        }
    };

    let client = AnthropicClient::new(config);
    let prompt = build_analysis_prompt(transcript, context);

    match client.send_analysis(SYSTEM_PROMPT, &prompt).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Analysis call failed ({e}); returning canned analysis");
            mock_analysis()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CallMetadata;

    #[tokio::test]
    async fn test_offline_mode_attaches_context_to_mock() {
        let context = CallContext {
            metadata: CallMetadata {
                title: "Demo".to_string(),
                customer_name: "Acme".to_string(),
                duration: None,
                date: None,
            },
            participants: vec![],
        };

        let result = analyze_transcript("transcript", Some(context), true).await;
        assert_eq!(result.metrics.satisfaction_score, 78);
        assert_eq!(
            result.context.as_ref().unwrap().metadata.customer_name,
            "Acme"
        );
    }
}
