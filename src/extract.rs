use regex::Regex;

use crate::models::{CallMetadata, Participant, Role};

/// Configuration for transcript metadata extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Own brand name, rejected as a customer-name guess
    pub brand_name: String,
    /// How many leading lines to scan for title/date
    pub header_lines: usize,
    /// Transcripts shorter than this are rejected by the caller
    pub min_transcript_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            brand_name: "Datadog".to_string(),
            header_lines: 20,
            min_transcript_len: 50,
        }
    }
}

/// Best-effort guess at call details, meant to pre-fill a confirmation step
#[derive(Debug, Clone)]
pub struct MetadataGuess {
    pub metadata: CallMetadata,
    pub participants: Vec<Participant>,
}

/// Extract a metadata guess from raw transcript text
///
/// Every rule either matches or leaves its field empty; this never fails.
/// Title and date are only looked for in the first `header_lines` lines,
/// timestamps and speaker labels are scanned across the full text.
pub fn extract_call_metadata(text: &str, config: &ExtractorConfig) -> MetadataGuess {
    let header: Vec<&str> = text.lines().take(config.header_lines).collect();

    let mut title = String::new();
    let mut customer_name = String::new();

    let title_line = header
        .iter()
        .find(|l| l.to_lowercase().contains("demo") || l.contains("<>") || l.contains(" - "));
    if let Some(line) = title_line {
        title = line.trim().to_string();
        if title.contains("<>") {
            // Assumes a "Brand <> Customer - ..." header
            let parts: Vec<&str> = title.split("<>").collect();
            if parts.len() > 1 {
                let possible_customer = parts[1].split('-').next().unwrap_or("").trim();
                if !possible_customer.is_empty()
                    && possible_customer.to_lowercase() != config.brand_name.to_lowercase()
                {
                    customer_name = possible_customer.to_string();
                }
            }
        }
    }

    // Loose day/month-name/year pattern, e.g. "21 gen 2026"; stored verbatim
    let date_re = Regex::new(r"\d{1,2}\s+\w+\s+\d{4}").unwrap();
    let date = header
        .iter()
        .find(|l| date_re.is_match(l))
        .map(|l| l.trim().to_string());

    // The last clock-time in the transcript stands in for the call duration
    let timestamp_re = Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?\b").unwrap();
    let duration = timestamp_re
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string());

    let metadata = CallMetadata {
        title,
        customer_name,
        duration,
        date,
    };

    MetadataGuess {
        metadata,
        participants: extract_participants(text),
    }
}

/// Detect "Full Name:" speaker labels at line starts
///
/// Requires two or more capitalized words before the colon, deduplicated
/// by exact name in first-seen order. The first speaker defaults to SE
/// and the rest to Prospect; the user corrects roles afterwards.
fn extract_participants(text: &str) -> Vec<Participant> {
    let speaker_re = Regex::new(r"(?m)^([A-Z][a-z]+(?: [A-Z][a-z]+)+):").unwrap();

    let mut names: Vec<String> = Vec::new();
    for caps in speaker_re.captures_iter(text) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        // Placeholder rows for the confirmation step
        return vec![
            placeholder(Role::Se),
            placeholder(Role::Ae),
            placeholder(Role::Prospect),
        ];
    }

    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Participant {
            name,
            role: if index == 0 { Role::Se } else { Role::Prospect },
            title: None,
            is_decision_maker: false,
        })
        .collect()
}

fn placeholder(role: Role) -> Participant {
    Participant {
        name: String::new(),
        role,
        title: None,
        is_decision_maker: false,
    }
}
