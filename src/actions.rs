use crate::intelligence::competitive::{capitalize_first, TRACKED_COMPETITORS};
use crate::models::{
    ActionCategory, ActionIntelligence, AnalysisResult, CompetitorMention, DealRiskIndicator,
    InterestLevel, Priority, RecommendedAction, RiskType, Sentiment, Severity,
};

const BUDGET_RISK_KEYWORDS: &[&str] = &["budget", "cost", "expensive", "price", "pricing"];
const TIMELINE_RISK_KEYWORDS: &[&str] = &["deadline", "urgent", "asap", "timeline", "soon"];

/// Derive competitor sightings, deal risks, and recommended actions
///
/// A second heuristic pass over the same result as the sales deriver,
/// kept separate because it feeds a different surface. Competitor
/// sightings here are NOT aggregated: one entry per matching moment,
/// so the same competitor can appear several times.
pub fn generate_action_intelligence(result: &AnalysisResult) -> ActionIntelligence {
    let competitors = detect_competitors(result);
    let deal_risks = detect_deal_risks(result, &competitors);
    let next_steps = recommend_next_steps(result);

    ActionIntelligence {
        competitors: competitors.into_iter().take(3).collect(),
        deal_risks: deal_risks.into_iter().take(5).collect(),
        next_steps: next_steps.into_iter().take(4).collect(),
    }
}

fn detect_competitors(result: &AnalysisResult) -> Vec<CompetitorMention> {
    let mut competitors = Vec::new();

    for moment in &result.timeline {
        let text = moment.searchable_text();
        for keyword in TRACKED_COMPETITORS {
            if text.contains(keyword) {
                competitors.push(CompetitorMention {
                    name: capitalize_first(keyword),
                    context: moment.description.clone(),
                    timestamp: Some(moment.time.clone()),
                    battle_card_url: Some(format!("#battlecard-{keyword}")),
                });
            }
        }
    }

    competitors
}

fn detect_deal_risks(
    result: &AnalysisResult,
    competitors: &[CompetitorMention],
) -> Vec<DealRiskIndicator> {
    let mut risks = Vec::new();

    // Budget concerns only count when voiced negatively
    for moment in &result.timeline {
        let text = moment.searchable_text();
        if BUDGET_RISK_KEYWORDS.iter().any(|kw| text.contains(kw))
            && moment.sentiment == Sentiment::Negative
        {
            risks.push(DealRiskIndicator {
                risk_type: RiskType::Budget,
                severity: Severity::High,
                description: "Budget concerns expressed during call".to_string(),
                evidence: moment.quote_or_description().to_string(),
                timestamp: Some(moment.time.clone()),
            });
        }
    }

    for moment in &result.timeline {
        let text = moment.searchable_text();
        if TIMELINE_RISK_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            risks.push(DealRiskIndicator {
                risk_type: RiskType::Timeline,
                severity: Severity::Medium,
                description: "Timeline pressure identified".to_string(),
                evidence: moment.quote_or_description().to_string(),
                timestamp: Some(moment.time.clone()),
            });
        }
    }

    if !competitors.is_empty() {
        let names: Vec<&str> = competitors.iter().map(|c| c.name.as_str()).collect();
        risks.push(DealRiskIndicator {
            risk_type: RiskType::Competition,
            severity: Severity::High,
            description: format!("Evaluating {} competitor(s)", competitors.len()),
            evidence: format!("Mentioned: {}", names.join(", ")),
            timestamp: None,
        });
    }

    risks
}

fn recommend_next_steps(result: &AnalysisResult) -> Vec<RecommendedAction> {
    let mut steps = Vec::new();

    // Top three pain points by resonance, sorted on a local copy so the
    // source result stays untouched
    let mut pains = result.pain_points.clone();
    pains.sort_by(|a, b| b.resonance_score.cmp(&a.resonance_score));

    for pain in pains.iter().take(3) {
        if pain.resonance_score > 80 {
            steps.push(RecommendedAction {
                title: format!("Address {}", pain.category),
                description: format!(
                    "Schedule technical deep-dive focused on solving {}. Prepare specific case \
                     studies showing 40-60% improvement in similar scenarios.",
                    pain.category.to_lowercase()
                ),
                priority: Priority::High,
                category: ActionCategory::Technical,
                based_on: vec![pain.category.clone()],
            });
        }
    }

    let high_interest: Vec<&str> = result
        .feature_heatmap
        .iter()
        .filter(|f| f.interest_level == InterestLevel::High)
        .map(|f| f.name.as_str())
        .collect();
    if !high_interest.is_empty() {
        steps.push(RecommendedAction {
            title: "Provide Hands-on Demo".to_string(),
            description: format!(
                "Set up sandbox environment for {}. Include realistic data and customer-specific \
                 use cases.",
                high_interest.join(", ")
            ),
            priority: Priority::High,
            category: ActionCategory::Demo,
            based_on: high_interest.iter().map(|n| n.to_string()).collect(),
        });
    }

    steps.push(RecommendedAction {
        title: "Send Customized Follow-up".to_string(),
        description: "Use AI-generated email below with specific pain point evidence and ROI \
                      calculator focused on time savings."
            .to_string(),
        priority: Priority::Medium,
        category: ActionCategory::FollowUp,
        based_on: vec!["Email Draft".to_string()],
    });

    if result.metrics.satisfaction_score > 75 {
        steps.push(RecommendedAction {
            title: "Progress to Commercial Discussion".to_string(),
            description: format!(
                "High satisfaction score ({}/100) indicates readiness. Prepare pricing proposal \
                 with 30-day POC option.",
                result.metrics.satisfaction_score
            ),
            priority: Priority::High,
            category: ActionCategory::Commercial,
            based_on: vec!["Satisfaction Score".to_string()],
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EmailDraft, EngagementMetrics, FeatureCategory, FeatureInterest, KeyMoment, MomentType,
        PainPoint,
    };

    fn moment(description: &str, quote: &str, sentiment: Sentiment) -> KeyMoment {
        KeyMoment {
            time: "04:00".to_string(),
            description: description.to_string(),
            sentiment,
            moment_type: MomentType::Engagement,
            quote: if quote.is_empty() {
                None
            } else {
                Some(quote.to_string())
            },
            reasoning: None,
        }
    }

    fn pain(category: &str, resonance: u32) -> PainPoint {
        PainPoint {
            category: category.to_string(),
            resonance_score: resonance,
            mention_count: 1,
            evidence: "evidence".to_string(),
            reasoning: None,
        }
    }

    fn feature(name: &str, interest: InterestLevel) -> FeatureInterest {
        FeatureInterest {
            name: name.to_string(),
            category: FeatureCategory::Monitoring,
            interest_level: interest,
            time_spent_minutes: 2,
        }
    }

    fn base_result() -> AnalysisResult {
        AnalysisResult {
            metrics: EngagementMetrics {
                satisfaction_score: 70,
                engagement_rate: 80,
                objection_count: 0,
                positive_signal_count: 2,
            },
            timeline: vec![],
            pain_points: vec![],
            feature_heatmap: vec![],
            email_draft: EmailDraft {
                subject: String::new(),
                body: String::new(),
            },
            context: None,
        }
    }

    #[test]
    fn test_competitor_mentions_are_not_aggregated() {
        let mut result = base_result();
        result.timeline = vec![
            moment("Mentions Splunk", "Splunk was our old tool.", Sentiment::Neutral),
            moment("Mentions Splunk again", "Splunk billing hurt us.", Sentiment::Negative),
        ];
        let intel = generate_action_intelligence(&result);

        assert_eq!(intel.competitors.len(), 2);
        assert!(intel.competitors.iter().all(|c| c.name == "Splunk"));
        assert_eq!(
            intel.competitors[0].battle_card_url.as_deref(),
            Some("#battlecard-splunk")
        );
    }

    #[test]
    fn test_competitor_list_capped_at_three() {
        let mut result = base_result();
        result.timeline = (0..5)
            .map(|i| {
                moment(
                    "Competitive talk",
                    &format!("Round {i} comparing with Elastic."),
                    Sentiment::Neutral,
                )
            })
            .collect();
        let intel = generate_action_intelligence(&result);

        assert_eq!(intel.competitors.len(), 3);
        // The synthetic competition risk still counts the full list
        let competition_risk = intel
            .deal_risks
            .iter()
            .find(|r| r.risk_type == RiskType::Competition)
            .unwrap();
        assert_eq!(competition_risk.description, "Evaluating 5 competitor(s)");
        assert_eq!(competition_risk.severity, Severity::High);
    }

    #[test]
    fn test_budget_risk_requires_negative_sentiment() {
        let mut result = base_result();
        result.timeline = vec![
            moment("Pricing question", "How much does it cost?", Sentiment::Neutral),
            moment(
                "Objection on cost",
                "That sounds expensive for our team.",
                Sentiment::Negative,
            ),
        ];
        let intel = generate_action_intelligence(&result);

        let budget_risks: Vec<_> = intel
            .deal_risks
            .iter()
            .filter(|r| r.risk_type == RiskType::Budget)
            .collect();
        assert_eq!(budget_risks.len(), 1);
        assert_eq!(
            budget_risks[0].evidence,
            "That sounds expensive for our team."
        );
    }

    #[test]
    fn test_timeline_risk_is_medium_regardless_of_sentiment() {
        let mut result = base_result();
        result.timeline = vec![moment(
            "Deployment deadline",
            "We have a deadline next sprint.",
            Sentiment::Positive,
        )];
        let intel = generate_action_intelligence(&result);

        let timeline_risk = intel
            .deal_risks
            .iter()
            .find(|r| r.risk_type == RiskType::Timeline)
            .unwrap();
        assert_eq!(timeline_risk.severity, Severity::Medium);
    }

    #[test]
    fn test_deal_risks_capped_at_five() {
        let mut result = base_result();
        result.timeline = (0..7)
            .map(|i| {
                moment(
                    "Timeline pressure",
                    &format!("Deadline item {i} coming up soon."),
                    Sentiment::Neutral,
                )
            })
            .collect();
        let intel = generate_action_intelligence(&result);
        assert_eq!(intel.deal_risks.len(), 5);
    }

    #[test]
    fn test_pain_actions_only_above_80_within_top_three() {
        let mut result = base_result();
        result.pain_points = vec![
            pain("Cost Management", 60),
            pain("Infrastructure Visibility", 95),
            pain("Alert Fatigue", 90),
            pain("Troubleshooting Efficiency", 85),
            pain("Tool Sprawl", 82),
        ];
        let intel = generate_action_intelligence(&result);

        // Only the top 3 by resonance are considered even though a
        // fourth also clears 80
        let titles: Vec<&str> = intel.next_steps.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Address Infrastructure Visibility"));
        assert!(titles.contains(&"Address Alert Fatigue"));
        assert!(titles.contains(&"Address Troubleshooting Efficiency"));
        assert!(!titles.iter().any(|t| t.contains("Tool Sprawl")));
    }

    #[test]
    fn test_pain_sorting_does_not_mutate_input() {
        let mut result = base_result();
        result.pain_points = vec![pain("Low", 10), pain("High", 95)];
        let _ = generate_action_intelligence(&result);
        assert_eq!(result.pain_points[0].category, "Low");
    }

    #[test]
    fn test_demo_action_for_high_interest_features() {
        let mut result = base_result();
        result.feature_heatmap = vec![
            feature("APM", InterestLevel::High),
            feature("Logs", InterestLevel::Medium),
            feature("Infrastructure", InterestLevel::High),
        ];
        let intel = generate_action_intelligence(&result);

        let demo = intel
            .next_steps
            .iter()
            .find(|s| s.category == ActionCategory::Demo)
            .unwrap();
        assert!(demo.description.contains("APM, Infrastructure"));
        assert_eq!(demo.based_on, vec!["APM", "Infrastructure"]);
    }

    #[test]
    fn test_follow_up_always_present_and_commercial_gated() {
        let intel = generate_action_intelligence(&base_result());
        assert!(intel
            .next_steps
            .iter()
            .any(|s| s.category == ActionCategory::FollowUp));
        assert!(!intel
            .next_steps
            .iter()
            .any(|s| s.category == ActionCategory::Commercial));

        let mut result = base_result();
        result.metrics.satisfaction_score = 80;
        let intel = generate_action_intelligence(&result);
        let commercial = intel
            .next_steps
            .iter()
            .find(|s| s.category == ActionCategory::Commercial)
            .unwrap();
        assert!(commercial.description.contains("(80/100)"));
    }

    #[test]
    fn test_next_steps_capped_at_four() {
        let mut result = base_result();
        result.pain_points = vec![
            pain("Visibility", 95),
            pain("Alerting", 90),
            pain("Costs", 85),
        ];
        result.feature_heatmap = vec![feature("APM", InterestLevel::High)];
        result.metrics.satisfaction_score = 90;
        let intel = generate_action_intelligence(&result);

        // 3 pain actions + demo + follow-up + commercial would be 6
        assert_eq!(intel.next_steps.len(), 4);
    }
}
