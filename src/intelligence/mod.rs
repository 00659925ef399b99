pub mod commitments;
pub mod competitive;
pub mod scorecard;

pub use commitments::*;
pub use competitive::*;
pub use scorecard::*;

use crate::models::{AnalysisResult, SalesIntelligence};

/// Derive the full sales-intelligence bundle from one analysis
///
/// Three independent passes over the same immutable result:
/// 1. Deal qualification scorecard (five criterion rules)
/// 2. Commitment tracker (keyword extraction from the timeline)
/// 3. Competitive alerts (per-competitor aggregation)
///
/// Pure function of the input; always returns a complete structure with
/// conservative defaults when signal is absent.
pub fn generate_sales_intelligence(result: &AnalysisResult) -> SalesIntelligence {
    SalesIntelligence {
        deal_scorecard: generate_deal_scorecard(result),
        commitment_tracker: generate_commitment_tracker(result),
        competitive_alerts: generate_competitive_alerts(result),
    }
}
