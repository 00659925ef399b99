use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{
    Commitment, CommitmentOwner, CommitmentTracker, EditableFeatureInterest, EditablePainPoint,
    EnhancedAnalysisResult,
};

/// The persisted analysis document
///
/// Edited subsets are duplicated next to the full result so downstream
/// consumers can diff user corrections without walking the whole tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    /// RFC 3339 creation time
    pub timestamp: String,
    pub edited_features: Vec<EditableFeatureInterest>,
    pub edited_pain_points: Vec<EditablePainPoint>,
    pub full_data: EnhancedAnalysisResult,
}

impl AnalysisSnapshot {
    /// Snapshot an enhanced result, stamping the current time
    pub fn from_result(result: EnhancedAnalysisResult) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            edited_features: result
                .feature_heatmap
                .iter()
                .filter(|f| f.is_edited)
                .cloned()
                .collect(),
            edited_pain_points: result
                .pain_points
                .iter()
                .filter(|p| p.is_edited)
                .cloned()
                .collect(),
            full_data: result,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }

    /// Load a previously written snapshot
    pub fn read_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {:?}", path))?;
        serde_json::from_str(&content).context("Failed to parse analysis snapshot")
    }
}

/// One line per commitment, ready to paste into a calendar
pub fn calendar_summary(tracker: &CommitmentTracker) -> String {
    tracker
        .seller_commitments
        .iter()
        .chain(tracker.buyer_commitments.iter())
        .map(|c| {
            let due_date = c.due_date.as_deref().unwrap_or("TBD");
            let marker = match c.owner {
                CommitmentOwner::Seller => "\u{1F535}",
                CommitmentOwner::Buyer => "\u{1F7E2}",
            };
            format!("{marker} {} (Due: {due_date})", c.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text commitments block for pasting into a CRM
pub fn crm_summary(tracker: &CommitmentTracker) -> String {
    let render = |commitments: &[Commitment]| {
        commitments
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{}. {} (Due: {}) - {}",
                    i + 1,
                    c.description,
                    c.due_date.as_deref().unwrap_or("TBD"),
                    c.timestamp
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "COMMITMENTS SUMMARY\n==================\n\nYOUR COMMITMENTS:\n{}\n\nTHEIR COMMITMENTS:\n{}",
        render(&tracker.seller_commitments),
        render(&tracker.buyer_commitments)
    )
}
