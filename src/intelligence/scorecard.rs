use crate::models::{
    AnalysisResult, DealScorecard, HealthLevel, KeyMoment, QualificationCriteria,
    QualificationCriterion, QualificationStatus, Sentiment,
};

const BUDGET_KEYWORDS: &[&str] = &[
    "budget",
    "cost",
    "price",
    "pricing",
    "$",
    "investment",
    "allocated",
];
const BUDGET_POSITIVE_SIGNALS: &[&str] = &["allocated", "approved", "ready", "set aside"];

const TIMELINE_KEYWORDS: &[&str] = &[
    "urgent", "asap", "deadline", "quarter", "month", "week", "timeline",
];
const URGENCY_SIGNALS: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "this week",
    "this month",
    "q1",
    "next month",
];

const COMPETITION_KEYWORDS: &[&str] = &[
    "splunk",
    "new relic",
    "dynatrace",
    "appdynamics",
    "elastic",
    "competitor",
    "alternative",
];

/// Score the deal across the five qualification criteria
///
/// Each criterion is an independent rule over the same result; the
/// overall score is the rounded mean of the five.
pub fn generate_deal_scorecard(result: &AnalysisResult) -> DealScorecard {
    let criteria = vec![
        analyze_budget(result),
        analyze_authority(result),
        analyze_need(result),
        analyze_timeline(result),
        analyze_competition(result),
    ];

    let total: u32 = criteria.iter().map(|c| c.score).sum();
    let overall_score = (total as f64 / criteria.len() as f64).round() as u32;
    let health_level = HealthLevel::from_score(overall_score);

    let priority_recommendation = build_priority_recommendation(overall_score, &criteria);
    let next_steps = build_next_steps(&criteria, result);

    DealScorecard {
        overall_score,
        health_level,
        criteria,
        priority_recommendation,
        next_steps,
    }
}

fn combined_timeline_text(result: &AnalysisResult) -> String {
    result
        .timeline
        .iter()
        .map(|m| m.searchable_text())
        .collect::<Vec<_>>()
        .join(" ")
}

fn find_moment_matching<'a>(
    result: &'a AnalysisResult,
    keywords: &[&str],
) -> Option<&'a KeyMoment> {
    result
        .timeline
        .iter()
        .find(|m| keywords.iter().any(|kw| m.searchable_text().contains(kw)))
}

fn analyze_budget(result: &AnalysisResult) -> QualificationCriterion {
    let combined = combined_timeline_text(result);
    let has_budget_mention = BUDGET_KEYWORDS.iter().any(|kw| combined.contains(kw));

    if !has_budget_mention {
        return QualificationCriterion {
            criterion: QualificationCriteria::Budget,
            status: QualificationStatus::Missing,
            score: 40,
            evidence: None,
            timestamp: None,
            recommendation: Some(
                "Schedule discovery call to discuss budget and investment parameters".to_string(),
            ),
        };
    }

    let has_positive = BUDGET_POSITIVE_SIGNALS
        .iter()
        .any(|sig| combined.contains(sig));
    let budget_moment = find_moment_matching(result, BUDGET_KEYWORDS);

    if has_positive {
        let evidence = budget_moment
            .map(|m| m.quote_or_description().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "Budget discussed positively".to_string());
        return QualificationCriterion {
            criterion: QualificationCriteria::Budget,
            status: QualificationStatus::Confirmed,
            score: 95,
            evidence: Some(evidence),
            timestamp: budget_moment.map(|m| m.time.clone()),
            recommendation: Some("Budget confirmed - proceed to commercial discussion".to_string()),
        };
    }

    QualificationCriterion {
        criterion: QualificationCriteria::Budget,
        status: QualificationStatus::Partial,
        score: 65,
        evidence: budget_moment.map(|m| m.quote_or_description().to_string()),
        timestamp: budget_moment.map(|m| m.time.clone()),
        recommendation: Some(
            "Budget mentioned but not confirmed - send ROI calculator and case studies".to_string(),
        ),
    }
}

fn analyze_authority(result: &AnalysisResult) -> QualificationCriterion {
    let participants = result.participants();
    let decision_makers: Vec<_> = participants.iter().filter(|p| p.is_decision_maker).collect();

    if decision_makers.is_empty() {
        let senior = participants.iter().find(|p| {
            p.title.as_ref().is_some_and(|t| {
                let t = t.to_lowercase();
                t.contains("vp") || t.contains("director") || t.contains("head")
            })
        });

        return match senior {
            Some(person) => QualificationCriterion {
                criterion: QualificationCriteria::Authority,
                status: QualificationStatus::Partial,
                score: 60,
                evidence: Some(format!(
                    "Spoke with {} ({})",
                    person.name,
                    person.title.as_deref().unwrap_or("")
                )),
                timestamp: None,
                recommendation: Some(
                    "Escalate to VP level - arrange executive briefing".to_string(),
                ),
            },
            None => QualificationCriterion {
                criterion: QualificationCriteria::Authority,
                status: QualificationStatus::Missing,
                score: 30,
                evidence: Some("No senior stakeholders identified".to_string()),
                timestamp: None,
                recommendation: Some(
                    "Identify and engage with decision-makers and economic buyer".to_string(),
                ),
            },
        };
    }

    let names: Vec<String> = decision_makers
        .iter()
        .map(|d| format!("{} ({})", d.name, d.title.as_deref().unwrap_or("")))
        .collect();

    QualificationCriterion {
        criterion: QualificationCriteria::Authority,
        status: QualificationStatus::Confirmed,
        score: 90,
        evidence: Some(format!("Decision maker present: {}", names.join(", "))),
        timestamp: None,
        recommendation: Some("Authority confirmed - proceed with commercial proposal".to_string()),
    }
}

/// Trusts the caller's ordering: the first pain point is taken as the
/// highest-resonance one and is the only one scored.
fn analyze_need(result: &AnalysisResult) -> QualificationCriterion {
    let top = result.pain_points.first();

    let Some(top) = top.filter(|p| p.resonance_score >= 50) else {
        return QualificationCriterion {
            criterion: QualificationCriteria::Need,
            status: QualificationStatus::Missing,
            score: 35,
            evidence: None,
            timestamp: None,
            recommendation: Some(
                "Conduct deeper discovery to uncover pain points and business impact".to_string(),
            ),
        };
    };

    if top.resonance_score >= 80 {
        return QualificationCriterion {
            criterion: QualificationCriteria::Need,
            status: QualificationStatus::Confirmed,
            score: 95,
            evidence: Some(top.evidence.clone()),
            timestamp: None,
            recommendation: Some(format!(
                "Critical need identified ({}) - emphasize ROI and quick wins",
                top.category
            )),
        };
    }

    QualificationCriterion {
        criterion: QualificationCriteria::Need,
        status: QualificationStatus::Partial,
        score: 70,
        evidence: Some(format!("{} pain points identified", result.pain_points.len())),
        timestamp: None,
        recommendation: Some(
            "Quantify business impact - ask about costs of current process".to_string(),
        ),
    }
}

fn analyze_timeline(result: &AnalysisResult) -> QualificationCriterion {
    let combined = combined_timeline_text(result);
    let has_timeline_mention = TIMELINE_KEYWORDS.iter().any(|kw| combined.contains(kw));

    if !has_timeline_mention {
        return QualificationCriterion {
            criterion: QualificationCriteria::Timeline,
            status: QualificationStatus::Missing,
            score: 40,
            evidence: None,
            timestamp: None,
            recommendation: Some(
                "Establish timeline and create urgency - discuss upcoming initiatives".to_string(),
            ),
        };
    }

    let has_urgency = URGENCY_SIGNALS.iter().any(|sig| combined.contains(sig));
    let timeline_moment = find_moment_matching(result, TIMELINE_KEYWORDS);

    if has_urgency {
        return QualificationCriterion {
            criterion: QualificationCriteria::Timeline,
            status: QualificationStatus::Confirmed,
            score: 90,
            evidence: timeline_moment.map(|m| m.quote_or_description().to_string()),
            timestamp: timeline_moment.map(|m| m.time.clone()),
            recommendation: Some(
                "Urgent timeline identified - fast-track deal and provide expedited implementation"
                    .to_string(),
            ),
        };
    }

    QualificationCriterion {
        criterion: QualificationCriteria::Timeline,
        status: QualificationStatus::Risk,
        score: 55,
        evidence: timeline_moment.map(|m| m.quote_or_description().to_string()),
        timestamp: timeline_moment.map(|m| m.time.clone()),
        recommendation: Some(
            "Timeline mentioned but not urgent - create compelling event to accelerate".to_string(),
        ),
    }
}

/// No competitor talk at all reads as a good sign, and so does a
/// competitor mentioned unfavorably; a neutral evaluation is the risk.
fn analyze_competition(result: &AnalysisResult) -> QualificationCriterion {
    let combined = combined_timeline_text(result);
    let competitor_mentioned = COMPETITION_KEYWORDS.iter().any(|kw| combined.contains(kw));

    if !competitor_mentioned {
        return QualificationCriterion {
            criterion: QualificationCriteria::Competition,
            status: QualificationStatus::Confirmed,
            score: 85,
            evidence: Some("No competitors mentioned".to_string()),
            timestamp: None,
            recommendation: Some(
                "Position as clear leader - proactively address common competitive questions"
                    .to_string(),
            ),
        };
    }

    let negative_mentions = result.timeline.iter().any(|m| {
        m.sentiment == Sentiment::Negative
            && COMPETITION_KEYWORDS
                .iter()
                .any(|kw| m.searchable_text().contains(kw))
    });

    if negative_mentions {
        return QualificationCriterion {
            criterion: QualificationCriteria::Competition,
            status: QualificationStatus::Confirmed,
            score: 80,
            evidence: Some("Competitors mentioned negatively".to_string()),
            timestamp: None,
            recommendation: Some(
                "Leverage competitive weakness - share battle card and switch stories".to_string(),
            ),
        };
    }

    QualificationCriterion {
        criterion: QualificationCriteria::Competition,
        status: QualificationStatus::Risk,
        score: 50,
        evidence: Some("Active competitive evaluation".to_string()),
        timestamp: None,
        recommendation: Some(
            "Engage competitive intelligence - arrange differentiation session".to_string(),
        ),
    }
}

fn build_priority_recommendation(score: u32, criteria: &[QualificationCriterion]) -> String {
    if score >= 75 {
        format!(
            "High Priority Deal ({score}/100) - Fast-track to proposal stage. \
             Schedule executive alignment call within 1 week to maintain momentum."
        )
    } else if score >= 50 {
        let focus = criteria
            .iter()
            .find(|c| c.status.needs_attention())
            .map(|c| c.criterion.as_str())
            .unwrap_or("qualification");
        format!(
            "Medium Priority ({score}/100) - Focus on strengthening {focus}. \
             Schedule follow-up discovery within 2 weeks."
        )
    } else {
        format!(
            "Low Priority ({score}/100) - Significant qualification gaps. Consider disqualifying \
             or nurturing for 90 days while focusing on higher-priority opportunities."
        )
    }
}

fn build_next_steps(criteria: &[QualificationCriterion], result: &AnalysisResult) -> Vec<String> {
    let mut steps: Vec<String> = criteria
        .iter()
        .filter(|c| c.status.needs_attention())
        .map(|c| {
            c.recommendation
                .clone()
                .unwrap_or_else(|| format!("Address {}", c.criterion.as_str()))
        })
        .collect();

    if result.metrics.satisfaction_score > 75 {
        steps.insert(
            0,
            "Send follow-up email within 24 hours (draft provided below)".to_string(),
        );
    }

    steps.truncate(4);
    steps
}
