use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{EnhancedAnalysisResult, SalesIntelligence};

/// Human-readable report over one analysis
pub struct CallReport<'a> {
    result: &'a EnhancedAnalysisResult,
    intelligence: &'a SalesIntelligence,
}

impl<'a> CallReport<'a> {
    pub fn new(result: &'a EnhancedAnalysisResult, intelligence: &'a SalesIntelligence) -> Self {
        Self {
            result,
            intelligence,
        }
    }

    /// Format the full report as plain text
    pub fn format(&self) -> String {
        let mut out = String::new();

        out.push_str("Sales Call Intelligence Report\n");
        out.push_str("==============================\n\n");

        if let Some(context) = &self.result.context {
            if !context.metadata.title.is_empty() {
                let _ = writeln!(out, "Call: {}", context.metadata.title);
            }
            if !context.metadata.customer_name.is_empty() {
                let _ = writeln!(out, "Customer: {}", context.metadata.customer_name);
            }
            if let Some(date) = &context.metadata.date {
                let _ = writeln!(out, "Date: {date}");
            }
            if let Some(duration) = &context.metadata.duration {
                let _ = writeln!(out, "Duration: {duration}");
            }
            out.push('\n');
        }

        self.push_metrics(&mut out);
        self.push_scorecard(&mut out);
        self.push_timeline(&mut out);
        self.push_pain_points(&mut out);
        self.push_heatmap(&mut out);
        self.push_commitments(&mut out);
        self.push_alerts(&mut out);
        self.push_actions(&mut out);
        self.push_email(&mut out);

        out
    }

    /// Write the report to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.format())
            .with_context(|| format!("Failed to write report: {:?}", path))
    }

    fn push_metrics(&self, out: &mut String) {
        let m = &self.result.metrics;
        out.push_str("Engagement Metrics\n------------------\n");
        let _ = writeln!(out, "Satisfaction score: {}/100", m.satisfaction_score);
        let _ = writeln!(out, "Engagement rate: {}%", m.engagement_rate);
        let _ = writeln!(out, "Objections: {}", m.objection_count);
        let _ = writeln!(out, "Positive signals: {}\n", m.positive_signal_count);
    }

    fn push_scorecard(&self, out: &mut String) {
        let card = &self.intelligence.deal_scorecard;
        out.push_str("Deal Scorecard\n--------------\n");
        let _ = writeln!(
            out,
            "Overall: {}/100 ({:?} health)",
            card.overall_score, card.health_level
        );
        for criterion in &card.criteria {
            let _ = write!(
                out,
                "- {}: {:?} ({})",
                criterion.criterion.as_str(),
                criterion.status,
                criterion.score
            );
            if let Some(evidence) = &criterion.evidence {
                let _ = write!(out, " | {evidence}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Priority: {}", card.priority_recommendation);
        if !card.next_steps.is_empty() {
            out.push_str("Next steps:\n");
            for (i, step) in card.next_steps.iter().enumerate() {
                let _ = writeln!(out, "  {}. {step}", i + 1);
            }
        }
        out.push('\n');
    }

    fn push_timeline(&self, out: &mut String) {
        out.push_str("Timeline\n--------\n");
        for moment in &self.result.timeline {
            let _ = writeln!(
                out,
                "[{}] ({:?}/{:?}) {}",
                moment.moment.time,
                moment.moment.sentiment,
                moment.moment.moment_type,
                moment.moment.description
            );
            if let Some(quote) = &moment.moment.quote {
                let _ = writeln!(out, "        \"{quote}\"");
            }
        }
        out.push('\n');
    }

    fn push_pain_points(&self, out: &mut String) {
        out.push_str("Pain Points\n-----------\n");
        for pain in &self.result.pain_points {
            let _ = writeln!(
                out,
                "- {} (resonance {}, {} mentions): {}",
                pain.pain.category,
                pain.pain.resonance_score,
                pain.pain.mention_count,
                pain.pain.evidence
            );
        }
        out.push('\n');
    }

    fn push_heatmap(&self, out: &mut String) {
        out.push_str("Feature Interest\n----------------\n");
        for feature in &self.result.feature_heatmap {
            let _ = writeln!(
                out,
                "- {} [{:?}]: {:?} interest, ~{} min",
                feature.feature.name,
                feature.feature.category,
                feature.feature.interest_level,
                feature.feature.time_spent_minutes
            );
        }
        out.push('\n');
    }

    fn push_commitments(&self, out: &mut String) {
        let tracker = &self.intelligence.commitment_tracker;
        out.push_str("Commitments\n-----------\n");
        let _ = writeln!(out, "Total: {}", tracker.total_count);
        for c in &tracker.seller_commitments {
            let due = c.due_date.as_deref().unwrap_or("TBD");
            let _ = writeln!(out, "- [seller] {} (due: {due})", c.description);
        }
        for c in &tracker.buyer_commitments {
            let due = c.due_date.as_deref().unwrap_or("TBD");
            let _ = writeln!(out, "- [buyer] {} (due: {due})", c.description);
        }
        out.push('\n');
    }

    fn push_alerts(&self, out: &mut String) {
        out.push_str("Competitive Alerts\n------------------\n");
        if self.intelligence.competitive_alerts.is_empty() {
            out.push_str("No competitors mentioned\n");
        }
        for alert in &self.intelligence.competitive_alerts {
            let _ = writeln!(
                out,
                "- {} ({} mentions, {:?} threat, {:?} overall)",
                alert.competitor_name,
                alert.mention_count,
                alert.threat_level,
                alert.overall_sentiment
            );
            for positioning in &alert.battle_card_insights.positioning {
                let _ = writeln!(out, "    * {positioning}");
            }
        }
        out.push('\n');
    }

    fn push_actions(&self, out: &mut String) {
        let intel = &self.result.action_intelligence;
        out.push_str("Recommended Actions\n-------------------\n");
        for (i, action) in intel.next_steps.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. [{:?}] {}: {}",
                i + 1,
                action.priority,
                action.title,
                action.description
            );
        }
        if !intel.deal_risks.is_empty() {
            out.push_str("Deal risks:\n");
            for risk in &intel.deal_risks {
                let _ = writeln!(
                    out,
                    "- ({:?}) {}: {}",
                    risk.severity, risk.description, risk.evidence
                );
            }
        }
        out.push('\n');
    }

    fn push_email(&self, out: &mut String) {
        out.push_str("Follow-up Email Draft\n---------------------\n");
        let _ = writeln!(out, "Subject: {}", self.result.email_draft.subject);
        out.push('\n');
        out.push_str(&self.result.email_draft.body);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::enhance_analysis;
    use crate::intelligence::generate_sales_intelligence;
    use crate::llm::mock_analysis;

    #[test]
    fn test_report_contains_all_sections() {
        let result = mock_analysis();
        let enhanced = enhance_analysis(&result);
        let intelligence = generate_sales_intelligence(&result);
        let report = CallReport::new(&enhanced, &intelligence).format();

        for section in [
            "Engagement Metrics",
            "Deal Scorecard",
            "Timeline",
            "Pain Points",
            "Feature Interest",
            "Commitments",
            "Competitive Alerts",
            "Recommended Actions",
            "Follow-up Email Draft",
        ] {
            assert!(report.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn test_report_reflects_mock_data() {
        let result = mock_analysis();
        let enhanced = enhance_analysis(&result);
        let intelligence = generate_sales_intelligence(&result);
        let report = CallReport::new(&enhanced, &intelligence).format();

        assert!(report.contains("Satisfaction score: 78/100"));
        assert!(report.contains("Infrastructure Visibility"));
        assert!(report.contains("Datadog Demo Follow-up"));
    }
}
