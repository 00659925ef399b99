use serde::{Deserialize, Serialize};

/// Sentiment assigned to a timeline moment by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Classification of a timeline moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentType {
    Engagement,
    Objection,
    Question,
    Feature,
}

/// A timestamped event extracted from the call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMoment {
    /// Timestamp as produced by the model (MM:SS or free text)
    pub time: String,
    pub description: String,
    pub sentiment: Sentiment,
    #[serde(rename = "type")]
    pub moment_type: MomentType,
    /// Verbatim quote from the transcript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Model justification for this classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl KeyMoment {
    /// Lower-cased description + quote, the shared haystack for every
    /// keyword scan in the derivers.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {}",
            self.description,
            self.quote.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    /// The quote when present and non-empty, otherwise the description.
    pub fn quote_or_description(&self) -> &str {
        match self.quote.as_deref() {
            Some(q) if !q.is_empty() => q,
            _ => &self.description,
        }
    }
}

/// A pain point surfaced by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainPoint {
    /// Standardized category, e.g. "Infrastructure Visibility"
    pub category: String,
    /// How deeply this pain was felt (0-100)
    pub resonance_score: u32,
    pub mention_count: u32,
    /// Direct quote from the prospect
    pub evidence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Product category taxonomy (fixed by the knowledge base)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCategory {
    Monitoring,
    Data,
    Intelligence,
    Workflow,
    Security,
}

/// Prospect interest level in a product area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestLevel {
    High,
    Medium,
    Low,
}

impl InterestLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestLevel::High => "High",
            InterestLevel::Medium => "Medium",
            InterestLevel::Low => "Low",
        }
    }

    /// Confidence bucket attached to interest-level provenance
    pub fn confidence(&self) -> f64 {
        match self {
            InterestLevel::High => 0.92,
            InterestLevel::Medium => 0.78,
            InterestLevel::Low => 0.65,
        }
    }
}

/// Interest in one product area of the heatmap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureInterest {
    /// Product name from the knowledge base, e.g. "APM"
    pub name: String,
    pub category: FeatureCategory,
    pub interest_level: InterestLevel,
    pub time_spent_minutes: u32,
}

/// Aggregate engagement metrics for the call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    /// Positive vs negative signal balance (0-100)
    pub satisfaction_score: u32,
    /// Percentage of the call where the prospect is talking or asking
    pub engagement_rate: u32,
    pub objection_count: u32,
    pub positive_signal_count: u32,
}

/// Follow-up email drafted by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// Role of a call participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "SE")]
    Se,
    #[serde(rename = "AE")]
    Ae,
    Prospect,
    Other,
}

/// A person on the call, detected locally and corrected by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_decision_maker: bool,
}

/// Call details, locally guessed then user-editable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMetadata {
    pub title: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Confirmed call details attached to a result before scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContext {
    pub metadata: CallMetadata,
    pub participants: Vec<Participant>,
}

/// The immutable value returned by the model (or the mock)
///
/// Every deriver takes this as read-only input and produces a fresh
/// structure; nothing downstream mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub metrics: EngagementMetrics,
    #[serde(default)]
    pub timeline: Vec<KeyMoment>,
    #[serde(default)]
    pub pain_points: Vec<PainPoint>,
    #[serde(default)]
    pub feature_heatmap: Vec<FeatureInterest>,
    pub email_draft: EmailDraft,
    /// Attached locally after the model call; never part of the wire schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CallContext>,
}

impl AnalysisResult {
    /// Participants from the confirmed call context, if any
    pub fn participants(&self) -> &[Participant] {
        self.context
            .as_ref()
            .map(|c| c.participants.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(description: &str, quote: Option<&str>) -> KeyMoment {
        KeyMoment {
            time: "01:00".to_string(),
            description: description.to_string(),
            sentiment: Sentiment::Neutral,
            moment_type: MomentType::Engagement,
            quote: quote.map(String::from),
            reasoning: None,
        }
    }

    #[test]
    fn test_searchable_text_concatenates_and_lowercases() {
        let m = moment("SE shows Infrastructure Map", Some("Wow, Kubernetes too?"));
        assert_eq!(
            m.searchable_text(),
            "se shows infrastructure map wow, kubernetes too?"
        );
    }

    #[test]
    fn test_searchable_text_without_quote() {
        let m = moment("Budget discussion", None);
        assert_eq!(m.searchable_text(), "budget discussion ");
    }

    #[test]
    fn test_quote_or_description_falls_back_on_empty_quote() {
        let m = moment("Pricing question", Some(""));
        assert_eq!(m.quote_or_description(), "Pricing question");

        let m = moment("Pricing question", Some("How much is it?"));
        assert_eq!(m.quote_or_description(), "How much is it?");
    }

    #[test]
    fn test_analysis_result_wire_format() {
        let json = r#"{
            "metrics": {
                "satisfactionScore": 78,
                "engagementRate": 85,
                "objectionCount": 1,
                "positiveSignalCount": 4
            },
            "timeline": [
                {
                    "time": "00:45",
                    "description": "Prospect confirms visibility pain point",
                    "sentiment": "negative",
                    "type": "engagement",
                    "quote": "It's a black box when things go down."
                }
            ],
            "painPoints": [
                {
                    "category": "Infrastructure Visibility",
                    "resonanceScore": 95,
                    "mentionCount": 2,
                    "evidence": "It's a black box when things go down."
                }
            ],
            "featureHeatmap": [
                {
                    "name": "APM",
                    "category": "Monitoring",
                    "interestLevel": "High",
                    "timeSpentMinutes": 2
                }
            ],
            "emailDraft": {"subject": "Follow-up", "body": "Hi"}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.metrics.satisfaction_score, 78);
        assert_eq!(result.timeline[0].sentiment, Sentiment::Negative);
        assert_eq!(result.timeline[0].moment_type, MomentType::Engagement);
        assert_eq!(result.pain_points[0].resonance_score, 95);
        assert_eq!(result.feature_heatmap[0].interest_level, InterestLevel::High);
        assert!(result.context.is_none());
    }

    #[test]
    fn test_thin_response_still_deserializes() {
        // A structurally incomplete model response must not fail here;
        // the derivers degrade to "no matches" on empty collections.
        let json = r#"{
            "metrics": {
                "satisfactionScore": 50,
                "engagementRate": 50,
                "objectionCount": 0,
                "positiveSignalCount": 0
            },
            "emailDraft": {"subject": "", "body": ""}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.timeline.is_empty());
        assert!(result.pain_points.is_empty());
        assert!(result.feature_heatmap.is_empty());
    }
}
