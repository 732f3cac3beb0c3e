//! Drift index calculator
//!
//! driftIndex = DRIVER / (DRIVER + ROLE) over conclusive probes. Areas are
//! collected from every probe; a band confined to fewer than two areas is
//! treated as state-dependent and not surfaced.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{DriftAssessment, DriftBand, DriftReason, OsrProbe, ProbeMapping, ThematicArea};
use crate::{
    DRIFT_POSSIBLE_INDEX, DRIFT_POSSIBLE_MIN_EVIDENCE, DRIFT_STRONG_INDEX, DRIFT_STRONG_MIN_AREAS,
    DRIFT_STRONG_MIN_EVIDENCE,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct DriftCalculator;

impl DriftCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, probes: &[OsrProbe]) -> DriftAssessment {
        if probes.is_empty() {
            return DriftAssessment::empty(DriftReason::R020_DRIFT_NO_PROBES);
        }

        let driver = probes.iter().filter(|p| p.mapped_to == ProbeMapping::Driver).count();
        let evidence_n = probes.iter().filter(|p| p.mapped_to.is_conclusive()).count();
        let role = evidence_n - driver;
        let drift_index = if evidence_n > 0 {
            driver as f64 / evidence_n as f64
        } else {
            0.0
        };

        let areas: BTreeSet<ThematicArea> = probes.iter().filter_map(OsrProbe::thematic_area).collect();
        let areas_spanned: Vec<ThematicArea> = areas.into_iter().collect();

        let raw_band = classify(evidence_n, areas_spanned.len(), drift_index);
        let state_dependent = raw_band != DriftBand::None && areas_spanned.len() < DRIFT_STRONG_MIN_AREAS;
        let band = if state_dependent { DriftBand::None } else { raw_band };

        let reason = if evidence_n == 0 {
            DriftReason::R021_DRIFT_INCONCLUSIVE_ONLY
        } else if state_dependent {
            DriftReason::R022_DRIFT_STATE_DEPENDENT
        } else {
            match band {
                DriftBand::Strong => DriftReason::R025_DRIFT_STRONG,
                DriftBand::Possible => DriftReason::R024_DRIFT_POSSIBLE,
                DriftBand::None => DriftReason::R023_DRIFT_BELOW_THRESHOLD,
            }
        };

        debug!(
            driver,
            role,
            drift_index,
            areas = areas_spanned.len(),
            band = %band,
            reason = reason.code(),
            "drift computed"
        );

        DriftAssessment {
            drift_index,
            band,
            evidence_n,
            areas_spanned,
            state_dependent,
            reason,
        }
    }
}

/// Band before single-area suppression
fn classify(evidence_n: usize, areas: usize, drift_index: f64) -> DriftBand {
    if evidence_n >= DRIFT_STRONG_MIN_EVIDENCE
        && areas >= DRIFT_STRONG_MIN_AREAS
        && drift_index >= DRIFT_STRONG_INDEX
    {
        DriftBand::Strong
    } else if evidence_n >= DRIFT_POSSIBLE_MIN_EVIDENCE && drift_index >= DRIFT_POSSIBLE_INDEX {
        DriftBand::Possible
    } else {
        DriftBand::None
    }
}
