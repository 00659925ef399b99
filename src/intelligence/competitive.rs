use crate::models::{
    AnalysisResult, BattleCardInsight, CompetitiveAlert, CompetitorMentionDetail, Sentiment,
    ThreatLevel,
};

/// The competitors tracked by substring match, lower-case
pub const TRACKED_COMPETITORS: &[&str] =
    &["splunk", "new relic", "dynatrace", "appdynamics", "elastic"];

/// Aggregate competitor mentions across the timeline
///
/// One alert per tracked competitor that appears at least once; overall
/// sentiment is a majority vote over the mention sentiments with ties
/// falling to neutral.
pub fn generate_competitive_alerts(result: &AnalysisResult) -> Vec<CompetitiveAlert> {
    let mut alerts = Vec::new();

    for competitor in TRACKED_COMPETITORS {
        let mentions: Vec<CompetitorMentionDetail> = result
            .timeline
            .iter()
            .filter(|m| m.searchable_text().contains(competitor))
            .map(|m| CompetitorMentionDetail {
                timestamp: m.time.clone(),
                quote: m.quote_or_description().to_string(),
                sentiment: m.sentiment,
                context: m.description.clone(),
            })
            .collect();

        if mentions.is_empty() {
            continue;
        }

        let overall_sentiment = majority_sentiment(&mentions);
        let threat_level = if mentions.len() > 2 {
            ThreatLevel::High
        } else if mentions.len() > 1 {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        };

        alerts.push(CompetitiveAlert {
            competitor_name: capitalize_first(competitor),
            mention_count: mentions.len(),
            overall_sentiment,
            battle_card_insights: battle_card(competitor),
            threat_level,
            mentions,
        });
    }

    alerts
}

fn majority_sentiment(mentions: &[CompetitorMentionDetail]) -> Sentiment {
    let negative = mentions
        .iter()
        .filter(|m| m.sentiment == Sentiment::Negative)
        .count();
    let positive = mentions
        .iter()
        .filter(|m| m.sentiment == Sentiment::Positive)
        .count();

    if negative > positive {
        Sentiment::Negative
    } else if positive > negative {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// Upper-case the first letter only ("new relic" renders as "New relic")
pub(crate) fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Static battle-card table; only splunk and new relic have bespoke
/// entries, everything else gets the generic bundle.
fn battle_card(competitor: &str) -> BattleCardInsight {
    match competitor {
        "splunk" => BattleCardInsight {
            positioning: vec![
                "Emphasize Datadog's ease of use vs Splunk's complexity".to_string(),
                "Highlight transparent pricing (no data ingestion surprises)".to_string(),
                "Showcase unified platform (APM + Infrastructure + Logs)".to_string(),
            ],
            trap_questions: vec![
                "How long did your Splunk implementation take?".to_string(),
                "How many team members required Splunk training?".to_string(),
                "What were your data ingestion overages last quarter?".to_string(),
            ],
            case_studies: vec![
                "TechCorp reduced setup time by 60% switching from Splunk to Datadog".to_string(),
                "FinanceApp cut monitoring costs by 40% after Splunk migration".to_string(),
            ],
            key_differentiators: vec![
                "Out-of-box integrations (600+ vs Splunk's 100+)".to_string(),
                "Unified agent (vs multiple Splunk components)".to_string(),
                "Predictable pricing model".to_string(),
            ],
        },
        "new relic" => BattleCardInsight {
            positioning: vec![
                "Emphasize Datadog's infrastructure monitoring strength".to_string(),
                "Highlight Datadog's superior Kubernetes support".to_string(),
                "Showcase Network Performance Monitoring (NPM) capability".to_string(),
            ],
            trap_questions: vec![
                "How granular is New Relic's infrastructure visibility?".to_string(),
                "Does New Relic provide network-level insights?".to_string(),
                "What's your experience with New Relic's Kubernetes monitoring?".to_string(),
            ],
            case_studies: vec![
                "CloudScale improved incident response time by 50% after switching from New Relic"
                    .to_string(),
            ],
            key_differentiators: vec![
                "Best-in-class Infrastructure Monitoring".to_string(),
                "Native Kubernetes and container support".to_string(),
                "Network Performance Monitoring included".to_string(),
            ],
        },
        _ => BattleCardInsight {
            positioning: vec!["Position Datadog as unified observability platform".to_string()],
            trap_questions: vec![
                "What gaps exist in your current monitoring solution?".to_string()
            ],
            case_studies: vec!["Share relevant competitive displacement stories".to_string()],
            key_differentiators: vec![
                "Unified platform".to_string(),
                "Ease of use".to_string(),
                "Transparent pricing".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailDraft, EngagementMetrics, KeyMoment, MomentType};

    fn moment(quote: &str, sentiment: Sentiment) -> KeyMoment {
        KeyMoment {
            time: "03:00".to_string(),
            description: "Competitive discussion".to_string(),
            sentiment,
            moment_type: MomentType::Objection,
            quote: Some(quote.to_string()),
            reasoning: None,
        }
    }

    fn result_with(timeline: Vec<KeyMoment>) -> AnalysisResult {
        AnalysisResult {
            metrics: EngagementMetrics {
                satisfaction_score: 70,
                engagement_rate: 80,
                objection_count: 1,
                positive_signal_count: 1,
            },
            timeline,
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
    fn test_no_alerts_without_mentions() {
        let result = result_with(vec![moment("We love the demo so far.", Sentiment::Positive)]);
        assert!(generate_competitive_alerts(&result).is_empty());
    }

    #[test]
    fn test_single_mention_is_low_threat() {
        let result = result_with(vec![moment(
            "We ran Splunk for two years.",
            Sentiment::Neutral,
        )]);
        let alerts = generate_competitive_alerts(&result);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].competitor_name, "Splunk");
        assert_eq!(alerts[0].mention_count, 1);
        assert_eq!(alerts[0].threat_level, ThreatLevel::Low);
    }

    #[test]
    fn test_threat_level_thresholds() {
        let two = result_with(vec![
            moment("Splunk quote one.", Sentiment::Neutral),
            moment("Splunk quote two.", Sentiment::Neutral),
        ]);
        assert_eq!(
            generate_competitive_alerts(&two)[0].threat_level,
            ThreatLevel::Medium
        );

        let three = result_with(vec![
            moment("Splunk quote one.", Sentiment::Neutral),
            moment("Splunk quote two.", Sentiment::Neutral),
            moment("Splunk quote three.", Sentiment::Neutral),
        ]);
        assert_eq!(
            generate_competitive_alerts(&three)[0].threat_level,
            ThreatLevel::High
        );
    }

    #[test]
    fn test_majority_sentiment_with_neutral_tie() {
        let result = result_with(vec![
            moment("Splunk was painful.", Sentiment::Negative),
            moment("Splunk dashboards were nice.", Sentiment::Positive),
        ]);
        let alerts = generate_competitive_alerts(&result);
        assert_eq!(alerts[0].overall_sentiment, Sentiment::Neutral);

        let result = result_with(vec![
            moment("Splunk was painful.", Sentiment::Negative),
            moment("Splunk was slow.", Sentiment::Negative),
            moment("Splunk dashboards were nice.", Sentiment::Positive),
        ]);
        let alerts = generate_competitive_alerts(&result);
        assert_eq!(alerts[0].overall_sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_display_name_capitalizes_first_letter_only() {
        let result = result_with(vec![moment(
            "We also have new relic in one team.",
            Sentiment::Neutral,
        )]);
        let alerts = generate_competitive_alerts(&result);
        assert_eq!(alerts[0].competitor_name, "New relic");
    }

    #[test]
    fn test_battle_card_lookup_and_fallback() {
        let splunk = battle_card("splunk");
        assert!(splunk.positioning[0].contains("ease of use"));

        let generic = battle_card("dynatrace");
        assert_eq!(
            generic.positioning,
            vec!["Position Datadog as unified observability platform".to_string()]
        );
    }

    #[test]
    fn test_one_alert_per_competitor() {
        let result = result_with(vec![
            moment("Comparing Splunk and Dynatrace today.", Sentiment::Neutral),
            moment("Splunk pricing was the issue.", Sentiment::Negative),
        ]);
        let alerts = generate_competitive_alerts(&result);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].competitor_name, "Splunk");
        assert_eq!(alerts[0].mention_count, 2);
        assert_eq!(alerts[1].competitor_name, "Dynatrace");
        assert_eq!(alerts[1].mention_count, 1);
    }
}
