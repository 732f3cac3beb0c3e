//! Core types for actorrole

mod pattern;
mod evidence;
mod score;
mod drift;
mod composite;
mod config;
mod error;

pub use pattern::{DiagnosticPattern, AxisLabel, Actor, Role};
pub use evidence::{EvidenceSource, ProbeKind, ProbeMapping, ThematicArea, OsrPattern, OsrProbe, SessionEvidence, BonusOptions};
pub use score::{PatternScore, ContentAnalysis, SourceTotals, Candidate};
pub use drift::{DriftBand, DriftAssessment, DriftReason};
pub use composite::{ActorRoleComposite, ConfidenceBand};
pub use config::DetectorConfig;
pub use error::InputError;
