//! Drift index types
//!
//! Ratio of DRIVER-leaning probe clarifications to all conclusive ones,
//! banded and gated on how many life areas the evidence spans.

use serde::{Deserialize, Serialize};

use crate::types::ThematicArea;

/// Drift band surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftBand {
    #[default]
    None,
    Possible,
    Strong,
}

impl std::fmt::Display for DriftBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DriftBand::None => "NONE",
            DriftBand::Possible => "POSSIBLE",
            DriftBand::Strong => "STRONG",
        };
        write!(f, "{}", name)
    }
}

/// Result of the drift calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftAssessment {
    /// driver / (driver + role), 0.0 when nothing qualifies
    pub drift_index: f64,
    /// Band after single-area suppression
    pub band: DriftBand,
    /// Number of DRIVER + ROLE probes
    pub evidence_n: usize,
    /// Distinct recognized areas across all probes
    pub areas_spanned: Vec<ThematicArea>,
    /// A band qualified but was confined to fewer than two areas
    pub state_dependent: bool,
    pub reason: DriftReason,
}

impl DriftAssessment {
    /// Assessment for an empty probe list
    pub fn empty(reason: DriftReason) -> Self {
        Self {
            drift_index: 0.0,
            band: DriftBand::None,
            evidence_n: 0,
            areas_spanned: Vec::new(),
            state_dependent: false,
            reason,
        }
    }

    /// POSSIBLE or STRONG surfaced
    pub fn is_detected(&self) -> bool {
        self.band != DriftBand::None
    }

    pub fn display_value(&self) -> String {
        if self.evidence_n == 0 {
            "n/a".to_string()
        } else {
            format!("{:.2}", self.drift_index)
        }
    }
}

/// Reason codes for the drift outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum DriftReason {
    /// No probes supplied
    R020_DRIFT_NO_PROBES,
    /// Probes present but all INCONCLUSIVE
    R021_DRIFT_INCONCLUSIVE_ONLY,
    /// Band qualified but evidence confined to one area
    R022_DRIFT_STATE_DEPENDENT,
    /// Not enough evidence or ratio too low
    R023_DRIFT_BELOW_THRESHOLD,
    /// POSSIBLE band surfaced
    R024_DRIFT_POSSIBLE,
    /// STRONG band surfaced
    R025_DRIFT_STRONG,
}

impl DriftReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::R020_DRIFT_NO_PROBES => "R020_DRIFT_NO_PROBES",
            Self::R021_DRIFT_INCONCLUSIVE_ONLY => "R021_DRIFT_INCONCLUSIVE_ONLY",
            Self::R022_DRIFT_STATE_DEPENDENT => "R022_DRIFT_STATE_DEPENDENT",
            Self::R023_DRIFT_BELOW_THRESHOLD => "R023_DRIFT_BELOW_THRESHOLD",
            Self::R024_DRIFT_POSSIBLE => "R024_DRIFT_POSSIBLE",
            Self::R025_DRIFT_STRONG => "R025_DRIFT_STRONG",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::R020_DRIFT_NO_PROBES => "No probed clarifications",
            Self::R021_DRIFT_INCONCLUSIVE_ONLY => "All clarifications inconclusive",
            Self::R022_DRIFT_STATE_DEPENDENT => "Signal confined to a single area",
            Self::R023_DRIFT_BELOW_THRESHOLD => "Below drift threshold",
            Self::R024_DRIFT_POSSIBLE => "Possible driver/style drift",
            Self::R025_DRIFT_STRONG => "Strong driver/style drift",
        }
    }
}

impl std::fmt::Display for DriftReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
