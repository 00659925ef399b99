pub mod actions;
pub mod enhance;
pub mod export;
pub mod extract;
pub mod intelligence;
pub mod llm;
pub mod models;
pub mod report;

pub use actions::generate_action_intelligence;
pub use enhance::enhance_analysis;
pub use export::{calendar_summary, crm_summary, AnalysisSnapshot};
pub use extract::{extract_call_metadata, ExtractorConfig, MetadataGuess};
pub use intelligence::generate_sales_intelligence;
pub use llm::{analyze_transcript, mock_analysis, AnthropicClient, AnthropicConfig};
pub use models::{
    AnalysisResult, CallContext, CallMetadata, EnhancedAnalysisResult, Participant,
    SalesIntelligence,
};
pub use report::CallReport;
