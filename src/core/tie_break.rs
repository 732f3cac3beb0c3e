//! Near-tie resolution between the top two candidates of an axis

use tracing::debug;

use crate::types::{AxisLabel, Candidate, EvidenceSource};

/// Sources consulted on the Actor axis, in order
pub const ACTOR_TIE_SOURCES: &[EvidenceSource] =
    &[EvidenceSource::Wb, EvidenceSource::Abe, EvidenceSource::Osr];

/// Sources consulted on the Role axis (no OSR contributions exist there)
pub const ROLE_TIE_SOURCES: &[EvidenceSource] = &[EvidenceSource::Wb, EvidenceSource::Abe];

/// Winner of one axis
#[derive(Debug, Clone)]
pub struct AxisResolution<L> {
    /// Chosen label, Unknown when the axis has no candidates
    pub winner: L,
    /// Top total on the axis, kept when a tie-break swaps the label
    pub score: f64,
    /// Source that settled a near-tie
    pub tie_break: Option<EvidenceSource>,
    /// All candidates, descending
    pub ranked: Vec<Candidate<L>>,
}

/// Pick the axis winner from a ranked list, consulting sub-totals on a near-tie
pub fn resolve<L: AxisLabel>(
    ranked: Vec<Candidate<L>>,
    epsilon: f64,
    sources: &[EvidenceSource],
) -> AxisResolution<L> {
    let (winner, score, tie_break) = match ranked.as_slice() {
        [] => (L::UNKNOWN, 0.0, None),
        [only] => (only.key, only.score, None),
        [first, second, ..] => {
            if (first.score - second.score).abs() <= epsilon {
                match break_tie(first, second, sources) {
                    Some((pick, source)) => {
                        debug!(
                            first = first.key.label(),
                            second = second.key.label(),
                            winner = pick.key.label(),
                            source = source.code(),
                            "near-tie broken"
                        );
                        (pick.key, first.score, Some(source))
                    }
                    None => (first.key, first.score, None),
                }
            } else {
                (first.key, first.score, None)
            }
        }
    };

    AxisResolution {
        winner,
        score,
        tie_break,
        ranked,
    }
}

/// First source whose sub-totals differ decides
fn break_tie<'a, L>(
    first: &'a Candidate<L>,
    second: &'a Candidate<L>,
    sources: &[EvidenceSource],
) -> Option<(&'a Candidate<L>, EvidenceSource)> {
    sources.iter().find_map(|&source| {
        let a = first.sources.get(source);
        let b = second.sources.get(source);
        if a == b {
            None
        } else if a > b {
            Some((first, source))
        } else {
            Some((second, source))
        }
    })
}
