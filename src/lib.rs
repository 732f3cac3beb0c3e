//! actorrole: lexical Actor/Role diagnostic engine
//!
//! Pipeline: text → normalizer → scorer → aggregator → tie-break →
//! confidence → drift → composite. Pure and synchronous; the caller owns
//! all session evidence.

pub mod core;
pub mod types;

// =============================================================================
// EVIDENCE SOURCE WEIGHTS
// =============================================================================

/// Fully confirmed feedback
pub const WEIGHT_WB: f64 = 1.0;

/// Partially confirmed feedback
pub const WEIGHT_ABE: f64 = 0.5;

/// Probed OSR clarification (Actor axis only)
pub const WEIGHT_OSR_PROBE: f64 = 0.75;

// =============================================================================
// PATTERN SCORER
// =============================================================================

/// Raw points per matched keyword
pub const SCORE_WEIGHT_KEYWORD: f64 = 2.0;
/// Raw points per matched tonality word
pub const SCORE_WEIGHT_TONALITY: f64 = 1.0;
/// Raw points per matched behavior phrase
pub const SCORE_WEIGHT_BEHAVIOR: f64 = 0.5;

/// Tonality words outside the strong list count this much without a keyword hit
pub const WEAK_TONALITY_FACTOR: f64 = 0.25;

/// Multiplier applied to a negated trigger
pub const NEGATION_FACTOR: f64 = 0.5;

/// Tokens before a trigger searched for a negation word
pub const NEGATION_WINDOW: usize = 2;

/// Tokens after a phrase's first word searched for the remaining words
pub const BEHAVIOR_LOOKAHEAD: usize = 4;

/// Words that negate a following trigger
pub const NEGATION_WORDS: &[&str] = &["no", "not", "never", "rarely", "hardly", "seldom", "without"];

/// Tonality words that carry full weight without keyword context
pub const STRONG_TONALITY: &[&str] = &[
    "bold", "urgent", "direct", "fast", "expansive",
    "precise", "intense", "warm", "fluid", "structured",
];

// =============================================================================
// AGGREGATION + RESOLUTION
// =============================================================================

/// Top-two totals within this distance go to the per-source tie-break
pub const TIE_EPSILON: f64 = 0.02;

/// A winning label scoring below this resolves to Unknown
pub const UNKNOWN_FLOOR: f64 = 0.15;

/// Uniform nudge applied when aspect notes are supplied
pub const ASPECT_NOTE_BONUS: f64 = 0.05;

// =============================================================================
// CONFIDENCE
// =============================================================================

/// Below this sample size confidence is capped at CONFIDENCE_CAP_SMALL
pub const SAMPLE_SMALL: usize = 3;
pub const CONFIDENCE_CAP_SMALL: f64 = 0.4;

/// Below this sample size confidence is capped at CONFIDENCE_CAP_MEDIUM
pub const SAMPLE_MEDIUM: usize = 6;
pub const CONFIDENCE_CAP_MEDIUM: f64 = 0.7;

/// Band edges
pub const CONFIDENCE_HIGH: f64 = 0.65;
pub const CONFIDENCE_MODERATE: f64 = 0.35;

// =============================================================================
// DRIFT INDEX
// =============================================================================

pub const DRIFT_STRONG_MIN_EVIDENCE: usize = 4;
pub const DRIFT_STRONG_MIN_AREAS: usize = 2;
pub const DRIFT_STRONG_INDEX: f64 = 0.7;

pub const DRIFT_POSSIBLE_MIN_EVIDENCE: usize = 3;
pub const DRIFT_POSSIBLE_INDEX: f64 = 0.5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
