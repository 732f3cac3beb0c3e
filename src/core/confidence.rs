//! Confidence estimator
//!
//! Average winning score per item, capped so small samples can never read
//! as high confidence.

use crate::types::ConfidenceBand;
use crate::{CONFIDENCE_CAP_MEDIUM, CONFIDENCE_CAP_SMALL, SAMPLE_MEDIUM, SAMPLE_SMALL};

/// Confidence in [0, 1] for the winning pair
pub fn estimate(actor_score: f64, role_score: f64, sample_size: usize) -> f64 {
    if sample_size == 0 {
        return 0.0;
    }

    let raw = (actor_score + role_score) / sample_size.max(1) as f64;
    let mut confidence = raw.clamp(0.0, 1.0);

    if sample_size < SAMPLE_SMALL {
        confidence = confidence.min(CONFIDENCE_CAP_SMALL);
    } else if sample_size < SAMPLE_MEDIUM {
        confidence = confidence.min(CONFIDENCE_CAP_MEDIUM);
    }

    confidence
}

/// Confidence and its band together
pub fn estimate_banded(actor_score: f64, role_score: f64, sample_size: usize) -> (f64, ConfidenceBand) {
    let confidence = estimate(actor_score, role_score, sample_size);
    (confidence, ConfidenceBand::from_confidence(confidence))
}
