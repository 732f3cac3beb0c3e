//! Composite output record

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{Actor, Candidate, DriftAssessment, EvidenceSource, Role};
use crate::{CONFIDENCE_HIGH, CONFIDENCE_MODERATE};

/// Confidence band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceBand {
    Low,
    Moderate,
    High,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > CONFIDENCE_HIGH {
            ConfidenceBand::High
        } else if confidence >= CONFIDENCE_MODERATE {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    /// Terminal color for the band
    pub fn color(&self) -> Color {
        match self {
            ConfidenceBand::Low => Color::BrightBlack,
            ConfidenceBand::Moderate => Color::Yellow,
            ConfidenceBand::High => Color::Green,
        }
    }
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfidenceBand::Low => "LOW",
            ConfidenceBand::Moderate => "MODERATE",
            ConfidenceBand::High => "HIGH",
        };
        write!(f, "{}", name)
    }
}

/// Actor/Role composite for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRoleComposite {
    /// Driver label (Unknown below the floor)
    pub actor: Actor,
    /// Presentation label (Unknown below the floor)
    pub role: Role,
    /// Matrix name or "<Actor> / <Role>"
    pub composite: String,
    /// 0.0-1.0, capped by sample size
    pub confidence: f64,
    pub confidence_band: ConfidenceBand,
    pub sample_size: usize,
    /// Surfaced drift band is POSSIBLE or STRONG
    pub drift_detected: bool,
    /// Present only when probes were supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift: Option<DriftAssessment>,
    pub actor_signs: Vec<String>,
    pub role_signs: Vec<String>,
    /// Source that settled a near-tie
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_break: Option<EvidenceSource>,
    /// Passthrough annotations
    #[serde(default)]
    pub notes: Vec<String>,
    pub actor_breakdown: Vec<Candidate<Actor>>,
    pub role_breakdown: Vec<Candidate<Role>>,
}

impl ActorRoleComposite {
    /// SHA-256 (hex) of the canonical JSON form
    pub fn digest(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let hash: [u8; 32] = Sha256::digest(&bytes).into();
        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Drift state dependence, false when no probes were given
    pub fn state_dependent(&self) -> bool {
        self.drift.as_ref().map(|d| d.state_dependent).unwrap_or(false)
    }

    /// One-line colored summary
    pub fn to_terminal_string(&self) -> String {
        let line = self.to_parseable_string();
        line.color(self.confidence_band.color()).to_string()
    }

    /// One-line summary without colors
    pub fn to_parseable_string(&self) -> String {
        let drift = match &self.drift {
            Some(d) => format!("{}({})", d.band, d.display_value()),
            None => "n/a".to_string(),
        };
        format!(
            "composite={} | actor={} | role={} | confidence={:.3} ({}) | n={} | drift={}",
            self.composite,
            self.actor,
            self.role,
            self.confidence,
            self.confidence_band,
            self.sample_size,
            drift,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(ConfidenceBand::from_confidence(0.66), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(0.65), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(0.35), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(0.3499), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.0), ConfidenceBand::Low);
    }
}
