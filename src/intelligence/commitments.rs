use crate::models::{
    AnalysisResult, Commitment, CommitmentOwner, CommitmentStatus, CommitmentTracker, KeyMoment,
    Priority,
};

const SELLER_KEYWORDS: &[&str] = &[
    "will send",
    "will share",
    "will provide",
    "will arrange",
    "will schedule",
    "i'll",
    "we'll",
];
const BUYER_KEYWORDS: &[&str] = &[
    "will send",
    "will share",
    "will provide",
    "will get back",
    "will check",
    "i'll get",
    "we'll send",
];

/// How many commitments per side are kept for rendering
const RENDER_CAP: usize = 5;
/// Commitment descriptions are clipped for display
const DESCRIPTION_CAP: usize = 100;

/// Extract commitments from the timeline via keyword matching
///
/// A moment counts for the seller when its description carries the
/// literal "SE" label, otherwise for the buyer. One commitment is pushed
/// per matching keyword, so a moment can contribute more than once.
/// The two lists are clipped to 5 entries each while `total_count` keeps
/// the untruncated sum; that mismatch is intentional, see the tests.
pub fn generate_commitment_tracker(result: &AnalysisResult) -> CommitmentTracker {
    let mut seller_commitments = Vec::new();
    let mut buyer_commitments = Vec::new();

    for (idx, moment) in result.timeline.iter().enumerate() {
        let text = moment.searchable_text();

        for keyword in SELLER_KEYWORDS {
            if text.contains(keyword) && moment.description.contains("SE") {
                seller_commitments.push(build_commitment(moment, idx, CommitmentOwner::Seller));
            }
        }

        for keyword in BUYER_KEYWORDS {
            if text.contains(keyword) && !moment.description.contains("SE") {
                buyer_commitments.push(build_commitment(moment, idx, CommitmentOwner::Buyer));
            }
        }
    }

    let total_count = seller_commitments.len() + buyer_commitments.len();
    seller_commitments.truncate(RENDER_CAP);
    buyer_commitments.truncate(RENDER_CAP);

    CommitmentTracker {
        seller_commitments,
        buyer_commitments,
        total_count,
    }
}

fn build_commitment(moment: &KeyMoment, idx: usize, owner: CommitmentOwner) -> Commitment {
    let description: String = moment
        .quote_or_description()
        .chars()
        .take(DESCRIPTION_CAP)
        .collect();

    match owner {
        CommitmentOwner::Seller => Commitment {
            id: format!("seller-{idx}"),
            owner,
            description,
            due_date: Some("Within 2 days".to_string()),
            timestamp: moment.time.clone(),
            status: CommitmentStatus::Pending,
            priority: Priority::High,
        },
        CommitmentOwner::Buyer => Commitment {
            id: format!("buyer-{idx}"),
            owner,
            description,
            due_date: None,
            timestamp: moment.time.clone(),
            status: CommitmentStatus::Pending,
            priority: Priority::Medium,
        },
    }
}
