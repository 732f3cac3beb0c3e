//! Core modules for actorrole

pub mod normalizer;
pub mod registry;
pub mod scorer;
pub mod aggregator;
pub mod tie_break;
pub mod confidence;
pub mod drift;
pub mod detector;
pub mod input;
pub mod api;

pub use normalizer::{normalize, tokenize, has_negation_before};
pub use registry::{composite_name, lookup_composite, ACTOR_PATTERNS, ROLE_PATTERNS};
pub use scorer::PatternScorer;
pub use aggregator::{aggregate, AxisTally, SessionTally};
pub use tie_break::{resolve, AxisResolution};
pub use confidence::{estimate, estimate_banded};
pub use drift::DriftCalculator;
pub use detector::ActorRoleDetector;
pub use input::{parse_evidence_line, read_evidence, EvidenceLine};
pub use api::{create_router, run_server};
