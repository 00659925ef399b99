use crate::actions::generate_action_intelligence;
use crate::models::{
    AnalysisResult, EditableFeatureInterest, EditableKeyMoment, EditablePainPoint,
    EnhancedAnalysisResult, InsightContext,
};

/// Attach stable positional ids and synthesized provenance to a result
///
/// Ids are purely positional (`feature-0`, `pain-2`, ...), so enhancing
/// the same result twice yields identical id sequences. `is_edited`
/// starts false everywhere and is only ever flipped by user edits
/// downstream.
pub fn enhance_analysis(result: &AnalysisResult) -> EnhancedAnalysisResult {
    let feature_heatmap = result
        .feature_heatmap
        .iter()
        .enumerate()
        .map(|(idx, feature)| EditableFeatureInterest {
            id: format!("feature-{idx}"),
            context: Some(InsightContext {
                timestamp: None,
                speaker: None,
                quote: format!(
                    "Discussed {} for approximately {} minutes",
                    feature.name, feature.time_spent_minutes
                ),
                confidence: Some(feature.interest_level.confidence()),
                reasoning: format!(
                    "AI detected {} interest based on conversation time, question depth, and \
                     prospect engagement signals.",
                    feature.interest_level.as_str().to_lowercase()
                ),
            }),
            is_edited: false,
            feature: feature.clone(),
        })
        .collect();

    let pain_points = result
        .pain_points
        .iter()
        .enumerate()
        .map(|(idx, point)| EditablePainPoint {
            id: format!("pain-{idx}"),
            context: Some(InsightContext {
                timestamp: None,
                speaker: None,
                quote: point.evidence.clone(),
                confidence: Some(f64::from(point.resonance_score) / 100.0),
                reasoning: point.reasoning.clone().unwrap_or_else(|| {
                    format!(
                        "Identified through sentiment analysis and keyword frequency ({} mentions).",
                        point.mention_count
                    )
                }),
            }),
            is_edited: false,
            pain: point.clone(),
        })
        .collect();

    let timeline = result
        .timeline
        .iter()
        .enumerate()
        .map(|(idx, moment)| EditableKeyMoment {
            id: format!("moment-{idx}"),
            is_edited: false,
            moment: moment.clone(),
        })
        .collect();

    EnhancedAnalysisResult {
        metrics: result.metrics.clone(),
        timeline,
        pain_points,
        feature_heatmap,
        email_draft: result.email_draft.clone(),
        context: result.context.clone(),
        action_intelligence: generate_action_intelligence(result),
    }
}
