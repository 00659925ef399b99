use crate::models::{
    AnalysisResult, EmailDraft, EngagementMetrics, FeatureCategory, FeatureInterest,
    InterestLevel, KeyMoment, MomentType, PainPoint, Sentiment,
};

/// The canned analysis substituted whenever the model is unreachable
pub fn mock_analysis() -> AnalysisResult {
    AnalysisResult {
        metrics: EngagementMetrics {
            satisfaction_score: 78,
            engagement_rate: 85,
            objection_count: 1,
            positive_signal_count: 4,
        },
        timeline: vec![
            moment(
                "00:45",
                "Prospect confirms visibility pain point",
                Sentiment::Negative,
                MomentType::Engagement,
                "It's a black box when things go down.",
            ),
            moment(
                "01:20",
                "Strong interest in Infrastructure Map",
                Sentiment::Positive,
                MomentType::Feature,
                "Wow, does it handle containers too? We use Kubernetes heavily.",
            ),
            moment(
                "02:15",
                "Prospect mentions Alert Fatigue",
                Sentiment::Negative,
                MomentType::Objection,
                "But my team is drowning in alerts right now. We get PagerDuty storms every night.",
            ),
            moment(
                "03:40",
                "Concern about Log retention costs",
                Sentiment::Neutral,
                MomentType::Question,
                "How much does the log retention cost though? That's a concern for finance.",
            ),
            moment(
                "04:30",
                "Enthusiasm for APM Traces and MTTR reduction",
                Sentiment::Positive,
                MomentType::Engagement,
                "This is exactly what we need to lower our MTTR.",
            ),
        ],
        pain_points: vec![
            pain(
                "Infrastructure Visibility",
                95,
                2,
                "It's a black box when things go down.",
            ),
            pain("Alert Fatigue", 90, 1, "Drowning in alerts right now."),
            pain("Cost Management", 60, 1, "How much does log retention cost?"),
            pain("Troubleshooting Efficiency", 85, 1, "Need to lower our MTTR."),
        ],
        feature_heatmap: vec![
            feature("Infrastructure", FeatureCategory::Monitoring, InterestLevel::High, 3),
            feature("APM", FeatureCategory::Monitoring, InterestLevel::High, 2),
            feature("Logs", FeatureCategory::Data, InterestLevel::Medium, 2),
            feature("Watchdog", FeatureCategory::Intelligence, InterestLevel::Medium, 1),
            feature("Security", FeatureCategory::Security, InterestLevel::Low, 0),
        ],
        email_draft: EmailDraft {
            subject: "Datadog Demo Follow-up: Solving Visibility & Alert Fatigue".to_string(),
            body: "Hi Alex,\n\nThanks for the time today. It was great to hear how Datadog can \
                   help solve the visibility 'black box' issues you're facing with your hybrid \
                   setup.\n\nBased on our conversation, I wanted to highlight:\n1. Infrastructure \
                   Map: Full visibility into your K8s containers.\n2. Watchdog: Reducing that \
                   alert fatigue you mentioned.\n3. Cost Control: Our decoupled \
                   ingestion/indexing for logs.\n\nI'm attaching the implementation guide we \
                   discussed. Let's touch base Tuesday?\n\nBest,\n[Your Name]"
                .to_string(),
        },
        context: None,
    }
}

fn moment(
    time: &str,
    description: &str,
    sentiment: Sentiment,
    moment_type: MomentType,
    quote: &str,
) -> KeyMoment {
    KeyMoment {
        time: time.to_string(),
        description: description.to_string(),
        sentiment,
        moment_type,
        quote: Some(quote.to_string()),
        reasoning: None,
    }
}

fn pain(category: &str, resonance_score: u32, mention_count: u32, evidence: &str) -> PainPoint {
    PainPoint {
        category: category.to_string(),
        resonance_score,
        mention_count,
        evidence: evidence.to_string(),
        reasoning: None,
    }
}

fn feature(
    name: &str,
    category: FeatureCategory,
    interest_level: InterestLevel,
    time_spent_minutes: u32,
) -> FeatureInterest {
    FeatureInterest {
        name: name.to_string(),
        category,
        interest_level,
        time_spent_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shape() {
        let mock = mock_analysis();
        assert_eq!(mock.timeline.len(), 5);
        assert_eq!(mock.pain_points.len(), 4);
        assert_eq!(mock.feature_heatmap.len(), 5);
        assert_eq!(mock.metrics.satisfaction_score, 78);
        assert!(mock.context.is_none());
    }

    #[test]
    fn test_mock_pain_points_lead_with_highest_resonance() {
        // The need criterion reads pain_points[0] without sorting, so the
        // canned data keeps the strongest pain first
        let mock = mock_analysis();
        let top = mock.pain_points[0].resonance_score;
        assert!(mock.pain_points.iter().all(|p| p.resonance_score <= top));
    }
}
