//! Scoring structures: per-pattern points, per-snippet analysis, per-label tallies

use serde::{Deserialize, Serialize};

use crate::types::{Actor, EvidenceSource, Role};

/// Point breakdown for one pattern against one token stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternScore {
    /// Matched keywords (1 each, 0.5 if negated)
    pub keyword_points: f64,
    /// Matched tonality words after strong/weak and negation weighting
    pub tonality_points: f64,
    /// Matched behavior phrases (1 each, 0.5 if negated)
    pub behavior_points: f64,
    /// Weighted sum of the three
    pub raw: f64,
    /// Normalized score: raw / pattern maximum (0.0-1.0)
    pub score: f64,
}

impl PatternScore {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Best Actor and Role for a single snippet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub actor: Actor,
    pub role: Role,
    pub actor_score: f64,
    pub role_score: f64,
}

impl ContentAnalysis {
    pub fn unknown() -> Self {
        Self {
            actor: Actor::Unknown,
            role: Role::Unknown,
            actor_score: 0.0,
            role_score: 0.0,
        }
    }
}

/// Contributions to one label split by evidence tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTotals {
    pub wb: f64,
    pub abe: f64,
    pub osr: f64,
}

impl SourceTotals {
    pub fn get(&self, source: EvidenceSource) -> f64 {
        match source {
            EvidenceSource::Wb => self.wb,
            EvidenceSource::Abe => self.abe,
            EvidenceSource::Osr => self.osr,
        }
    }

    pub fn add(&mut self, source: EvidenceSource, by: f64) {
        match source {
            EvidenceSource::Wb => self.wb += by,
            EvidenceSource::Abe => self.abe += by,
            EvidenceSource::Osr => self.osr += by,
        }
    }
}

/// Aggregated standing of one label across a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<L> {
    pub key: L,
    pub score: f64,
    pub sources: SourceTotals,
}

impl<L> Candidate<L> {
    pub fn new(key: L) -> Self {
        Self {
            key,
            score: 0.0,
            sources: SourceTotals::default(),
        }
    }
}
