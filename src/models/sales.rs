use serde::{Deserialize, Serialize};

use super::Sentiment;

/// MEDDIC-style qualification dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationCriteria {
    Budget,
    Authority,
    Need,
    Timeline,
    Competition,
}

impl QualificationCriteria {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationCriteria::Budget => "budget",
            QualificationCriteria::Authority => "authority",
            QualificationCriteria::Need => "need",
            QualificationCriteria::Timeline => "timeline",
            QualificationCriteria::Competition => "competition",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationStatus {
    Confirmed,
    Partial,
    Missing,
    Risk,
}

impl QualificationStatus {
    /// Criteria in these statuses feed the next-steps list
    pub fn needs_attention(&self) -> bool {
        matches!(self, QualificationStatus::Missing | QualificationStatus::Risk)
    }
}

/// One scored qualification dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationCriterion {
    pub criterion: QualificationCriteria,
    pub status: QualificationStatus,
    /// 0-100
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Deal health bucket derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    High,
    Medium,
    Low,
}

impl HealthLevel {
    /// Thresholds: >=75 high, >=50 medium, else low
    pub fn from_score(score: u32) -> Self {
        if score >= 75 {
            HealthLevel::High
        } else if score >= 50 {
            HealthLevel::Medium
        } else {
            HealthLevel::Low
        }
    }
}

/// Deal qualification scorecard over the five criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealScorecard {
    /// Rounded mean of the five criterion scores
    pub overall_score: u32,
    pub health_level: HealthLevel,
    pub criteria: Vec<QualificationCriterion>,
    pub priority_recommendation: String,
    /// At most 4 entries
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentOwner {
    Seller,
    Buyer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentStatus {
    Pending,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A promise made on the call, attributed to one side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    /// Position-derived, e.g. "seller-3"
    pub id: String,
    pub owner: CommitmentOwner,
    /// Truncated to 100 characters
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub timestamp: String,
    pub status: CommitmentStatus,
    pub priority: Priority,
}

/// Commitments split by owner
///
/// The rendered lists are capped at 5 each but `total_count` is the
/// untruncated sum; consumers see the mismatch whenever a side exceeds 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentTracker {
    pub seller_commitments: Vec<Commitment>,
    pub buyer_commitments: Vec<Commitment>,
    pub total_count: usize,
}

/// One competitor mention with its surrounding moment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorMentionDetail {
    pub timestamp: String,
    pub quote: String,
    pub sentiment: Sentiment,
    pub context: String,
}

/// Static battle-card content for a competitor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleCardInsight {
    pub positioning: Vec<String>,
    pub trap_questions: Vec<String>,
    pub case_studies: Vec<String>,
    pub key_differentiators: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    High,
    Medium,
    Low,
}

/// Aggregated mentions of one tracked competitor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAlert {
    pub competitor_name: String,
    pub mention_count: usize,
    pub mentions: Vec<CompetitorMentionDetail>,
    /// Majority vote across mention sentiments; ties fall to neutral
    pub overall_sentiment: Sentiment,
    pub battle_card_insights: BattleCardInsight,
    pub threat_level: ThreatLevel,
}

/// Everything the sales deriver produces from one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesIntelligence {
    pub deal_scorecard: DealScorecard,
    pub commitment_tracker: CommitmentTracker,
    pub competitive_alerts: Vec<CompetitiveAlert>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_level_boundaries() {
        assert_eq!(HealthLevel::from_score(100), HealthLevel::High);
        assert_eq!(HealthLevel::from_score(75), HealthLevel::High);
        assert_eq!(HealthLevel::from_score(74), HealthLevel::Medium);
        assert_eq!(HealthLevel::from_score(50), HealthLevel::Medium);
        assert_eq!(HealthLevel::from_score(49), HealthLevel::Low);
        assert_eq!(HealthLevel::from_score(0), HealthLevel::Low);
    }

    #[test]
    fn test_needs_attention() {
        assert!(QualificationStatus::Missing.needs_attention());
        assert!(QualificationStatus::Risk.needs_attention());
        assert!(!QualificationStatus::Confirmed.needs_attention());
        assert!(!QualificationStatus::Partial.needs_attention());
    }
}
