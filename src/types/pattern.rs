//! Diagnostic patterns and the two label axes (Actor / Role)

use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::registry;
use crate::types::InputError;

/// One category's trigger vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosticPattern {
    /// Display tag, never scored
    pub signs: &'static [&'static str],
    /// Exact-token triggers (2 pts)
    pub keywords: &'static [&'static str],
    /// Mood adjectives (1 pt, 0.25 when weak and out of context)
    pub tonality: &'static [&'static str],
    /// Short phrases matched by proximity (0.5 pts)
    pub behaviors: &'static [&'static str],
}

impl DiagnosticPattern {
    /// Highest raw score this pattern can produce
    pub fn max_raw_score(&self) -> f64 {
        self.keywords.len() as f64 * crate::SCORE_WEIGHT_KEYWORD
            + self.tonality.len() as f64 * crate::SCORE_WEIGHT_TONALITY
            + self.behaviors.len() as f64 * crate::SCORE_WEIGHT_BEHAVIOR
    }
}

/// A label axis backed by a static pattern registry
pub trait AxisLabel: Copy + Eq + Hash + Debug + Serialize + 'static {
    /// Fallback when nothing scores
    const UNKNOWN: Self;

    /// Registry members in declaration order (excludes Unknown)
    fn all() -> &'static [Self];

    /// Display label
    fn label(&self) -> &'static str;

    /// Pattern for this label, None for Unknown
    fn pattern(&self) -> Option<&'static DiagnosticPattern>;

    fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Display tags, empty for Unknown
    fn signs(&self) -> &'static [&'static str] {
        self.pattern().map(|p| p.signs).unwrap_or(&[])
    }
}

// =============================================================================
// ACTOR (underlying driver)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Actor {
    Initiator,
    Stabilizer,
    Connector,
    Nurturer,
    Validator,
    Optimizer,
    Harmonizer,
    Investigator,
    Visionary,
    Architect,
    Reformer,
    Empath,
    Unknown,
}

impl Actor {
    pub const ALL: [Actor; 12] = [
        Actor::Initiator,
        Actor::Stabilizer,
        Actor::Connector,
        Actor::Nurturer,
        Actor::Validator,
        Actor::Optimizer,
        Actor::Harmonizer,
        Actor::Investigator,
        Actor::Visionary,
        Actor::Architect,
        Actor::Reformer,
        Actor::Empath,
    ];
}

impl AxisLabel for Actor {
    const UNKNOWN: Self = Actor::Unknown;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            Actor::Initiator => "Initiator",
            Actor::Stabilizer => "Stabilizer",
            Actor::Connector => "Connector",
            Actor::Nurturer => "Nurturer",
            Actor::Validator => "Validator",
            Actor::Optimizer => "Optimizer",
            Actor::Harmonizer => "Harmonizer",
            Actor::Investigator => "Investigator",
            Actor::Visionary => "Visionary",
            Actor::Architect => "Architect",
            Actor::Reformer => "Reformer",
            Actor::Empath => "Empath",
            Actor::Unknown => "Unknown",
        }
    }

    fn pattern(&self) -> Option<&'static DiagnosticPattern> {
        registry::actor_pattern(*self)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Actor {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s).ok_or_else(|| InputError::UnknownActor(s.to_string()))
    }
}

// =============================================================================
// ROLE (surface presentation style)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Direct & Fast")]
    DirectFast,
    #[serde(rename = "Deliberate & Grounded")]
    DeliberateGrounded,
    #[serde(rename = "Verbal & Multi-threaded")]
    VerbalMultiThreaded,
    #[serde(rename = "Emotionally Coded")]
    EmotionallyCoded,
    #[serde(rename = "Expressive & Central")]
    ExpressiveCentral,
    #[serde(rename = "Precise & Critical")]
    PreciseCritical,
    #[serde(rename = "Diplomatic & Relational")]
    DiplomaticRelational,
    #[serde(rename = "Penetrating & Private")]
    PenetratingPrivate,
    #[serde(rename = "Candid & Expansive")]
    CandidExpansive,
    #[serde(rename = "Formal & Structured")]
    FormalStructured,
    #[serde(rename = "Detached & Conceptual")]
    DetachedConceptual,
    #[serde(rename = "Impressionistic & Evasive")]
    ImpressionisticEvasive,
    Unknown,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::DirectFast,
        Role::DeliberateGrounded,
        Role::VerbalMultiThreaded,
        Role::EmotionallyCoded,
        Role::ExpressiveCentral,
        Role::PreciseCritical,
        Role::DiplomaticRelational,
        Role::PenetratingPrivate,
        Role::CandidExpansive,
        Role::FormalStructured,
        Role::DetachedConceptual,
        Role::ImpressionisticEvasive,
    ];
}

impl AxisLabel for Role {
    const UNKNOWN: Self = Role::Unknown;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            Role::DirectFast => "Direct & Fast",
            Role::DeliberateGrounded => "Deliberate & Grounded",
            Role::VerbalMultiThreaded => "Verbal & Multi-threaded",
            Role::EmotionallyCoded => "Emotionally Coded",
            Role::ExpressiveCentral => "Expressive & Central",
            Role::PreciseCritical => "Precise & Critical",
            Role::DiplomaticRelational => "Diplomatic & Relational",
            Role::PenetratingPrivate => "Penetrating & Private",
            Role::CandidExpansive => "Candid & Expansive",
            Role::FormalStructured => "Formal & Structured",
            Role::DetachedConceptual => "Detached & Conceptual",
            Role::ImpressionisticEvasive => "Impressionistic & Evasive",
            Role::Unknown => "Unknown",
        }
    }

    fn pattern(&self) -> Option<&'static DiagnosticPattern> {
        registry::role_pattern(*self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Role {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s).ok_or_else(|| InputError::UnknownRole(s.to_string()))
    }
}

/// Case-insensitive label lookup across an axis, Unknown included
fn parse_label<L: AxisLabel>(s: &str) -> Option<L> {
    let s = s.trim();
    L::all()
        .iter()
        .copied()
        .chain(std::iter::once(L::UNKNOWN))
        .find(|l| l.label().eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for actor in Actor::ALL {
            assert_eq!(actor.label().parse::<Actor>().unwrap(), actor);
        }
        for role in Role::ALL {
            assert_eq!(role.label().parse::<Role>().unwrap(), role);
        }
        assert_eq!("candid & expansive".parse::<Role>().unwrap(), Role::CandidExpansive);
    }

    #[test]
    fn test_unparseable_label_is_error() {
        assert!("Wizard".parse::<Actor>().is_err());
        assert!("Loud & Proud".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Role::VerbalMultiThreaded).unwrap();
        assert_eq!(json, "\"Verbal & Multi-threaded\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::VerbalMultiThreaded);
    }

    #[test]
    fn test_unknown_has_no_pattern() {
        assert!(Actor::Unknown.pattern().is_none());
        assert!(Role::Unknown.signs().is_empty());
        assert!(Actor::Unknown.is_unknown());
    }
}
