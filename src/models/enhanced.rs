use serde::{Deserialize, Serialize};

use super::{
    AnalysisResult, CallContext, EmailDraft, EngagementMetrics, FeatureInterest, KeyMoment,
    PainPoint, Priority,
};

/// Display-only provenance attached to an editable item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub reasoning: String,
}

/// Feature-heatmap entry with a stable positional id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableFeatureInterest {
    #[serde(flatten)]
    pub feature: FeatureInterest,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<InsightContext>,
    #[serde(default)]
    pub is_edited: bool,
}

/// Pain point with a stable positional id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditablePainPoint {
    #[serde(flatten)]
    pub pain: PainPoint,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<InsightContext>,
    #[serde(default)]
    pub is_edited: bool,
}

/// Timeline moment with a stable positional id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableKeyMoment {
    #[serde(flatten)]
    pub moment: KeyMoment,
    pub id: String,
    #[serde(default)]
    pub is_edited: bool,
}

/// A single competitor sighting (unaggregated; one entry per match)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorMention {
    pub name: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battle_card_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskType {
    Budget,
    Timeline,
    Stakeholder,
    Technical,
    Competition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Something that could stall or kill the deal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealRiskIndicator {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub severity: Severity,
    pub description: String,
    pub evidence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    #[serde(rename = "follow-up")]
    FollowUp,
    Demo,
    Technical,
    Commercial,
}

/// A recommended next step with its supporting signals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAction {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: ActionCategory,
    /// Pain point categories, feature names, or metric labels
    pub based_on: Vec<String>,
}

/// Competitor sightings, deal risks, and recommended actions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionIntelligence {
    /// At most 3; one entry per matching moment, so a competitor can repeat
    pub competitors: Vec<CompetitorMention>,
    /// At most 5
    pub deal_risks: Vec<DealRiskIndicator>,
    /// At most 4
    pub next_steps: Vec<RecommendedAction>,
}

/// Analysis result with positional ids and synthesized provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedAnalysisResult {
    pub metrics: EngagementMetrics,
    pub timeline: Vec<EditableKeyMoment>,
    pub pain_points: Vec<EditablePainPoint>,
    pub feature_heatmap: Vec<EditableFeatureInterest>,
    pub email_draft: EmailDraft,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CallContext>,
    pub action_intelligence: ActionIntelligence,
}

impl EnhancedAnalysisResult {
    /// Reconstruct the plain result so the derivers (pure functions of
    /// `AnalysisResult`) can be re-run from a saved snapshot.
    pub fn base(&self) -> AnalysisResult {
        AnalysisResult {
            metrics: self.metrics.clone(),
            timeline: self.timeline.iter().map(|m| m.moment.clone()).collect(),
            pain_points: self.pain_points.iter().map(|p| p.pain.clone()).collect(),
            feature_heatmap: self
                .feature_heatmap
                .iter()
                .map(|f| f.feature.clone())
                .collect(),
            email_draft: self.email_draft.clone(),
            context: self.context.clone(),
        }
    }
}
