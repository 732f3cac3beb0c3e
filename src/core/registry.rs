//! Pattern registries and composite matrix
//!
//! Read-only after process start. Registry order is the tie order for
//! equal per-snippet scores (first declared wins).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::types::{Actor, AxisLabel, DiagnosticPattern, Role};

// =============================================================================
// ACTOR REGISTRY (underlying driver)
// =============================================================================

pub static ACTOR_PATTERNS: [(Actor, DiagnosticPattern); 12] = [
    (Actor::Initiator, DiagnosticPattern {
        signs: &["Aries"],
        keywords: &["ignite", "spark", "drive", "action", "catalyst", "start", "begin", "act", "go", "move", "push", "launch"],
        tonality: &["bold", "urgent", "direct", "fast", "immediate", "decisive", "energetic"],
        behaviors: &["fears stagnation", "needs action", "initiates", "leads", "sparks action but risks burnout", "commands pace", "avoids hesitation"],
    }),
    (Actor::Stabilizer, DiagnosticPattern {
        signs: &["Taurus"],
        keywords: &["anchor", "endure", "stable", "steady", "persist", "build", "solid", "reliable", "secure", "consistent", "maintain", "preserve"],
        tonality: &["calm", "grounded", "solid", "reliable", "steady", "measured", "deliberate", "patient"],
        behaviors: &["fears chaos", "needs security", "preserves", "maintains", "anchors firmly but stifles growth", "emphasizes reliability", "avoids change", "builds slowly but resists pivot"],
    }),
    (Actor::Connector, DiagnosticPattern {
        signs: &["Gemini"],
        keywords: &["connect", "share", "communicate", "link", "exchange", "network", "bridge", "translate", "relate", "converse", "discuss"],
        tonality: &["quick", "witty", "verbal", "fluid", "lively", "rapid", "conversational", "engaging"],
        behaviors: &["fears isolation", "needs interaction", "bridges", "translates", "links endlessly but loses depth", "scatters focus", "engages with questions", "avoids silence"],
    }),
    (Actor::Nurturer, DiagnosticPattern {
        signs: &["Cancer"],
        keywords: &["care", "protect", "nurture", "shield", "support", "tend"],
        tonality: &["warm", "caring", "emotional", "gentle"],
        behaviors: &["fears neglect", "needs connection", "protects", "provides"],
    }),
    (Actor::Validator, DiagnosticPattern {
        signs: &["Leo"],
        keywords: &["shine", "validate", "recognize", "celebrate", "honor", "appreciate", "acknowledge", "praise", "affirm", "spotlight", "radiate"],
        tonality: &["vibrant", "confident", "expressive", "warm", "charismatic", "bold", "magnetic", "generous"],
        behaviors: &["fears obscurity", "needs recognition", "affirms", "celebrates", "commands presence but craves applause", "shines boldly", "seeks validation", "performs emotions"],
    }),
    (Actor::Optimizer, DiagnosticPattern {
        signs: &["Virgo"],
        keywords: &["perfect", "refine", "fix", "improve", "analyze", "correct"],
        tonality: &["precise", "analytical", "detailed", "careful"],
        behaviors: &["fears error", "needs accuracy", "refines", "perfects"],
    }),
    (Actor::Harmonizer, DiagnosticPattern {
        signs: &["Libra"],
        keywords: &["balance", "harmonize", "mediate", "fair", "equalize", "diplomatic", "negotiate", "compromise", "reconcile", "smooth", "peaceful"],
        tonality: &["polished", "fair", "balanced", "gracious", "diplomatic", "refined", "courteous", "measured"],
        behaviors: &["fears conflict", "needs harmony", "mediates", "balances", "mediates gracefully but avoids conflict", "seeks compromise", "harmonizes but avoids depth", "risks indecision"],
    }),
    (Actor::Investigator, DiagnosticPattern {
        signs: &["Scorpio"],
        keywords: &["probe", "uncover", "investigate", "penetrate", "reveal", "transform", "discover", "expose", "dig", "search", "analyze", "scrutinize"],
        tonality: &["intense", "probing", "deep", "private", "penetrating", "sharp", "focused", "thorough"],
        behaviors: &["fears deception", "needs truth", "investigates", "transforms", "uncovers deeply but withdraws", "guards secrets", "penetrates covertly", "respects privacy"],
    }),
    (Actor::Visionary, DiagnosticPattern {
        signs: &["Sagittarius"],
        keywords: &["inspire", "expand", "explore", "teach", "guide", "envision"],
        tonality: &["expansive", "candid", "bold", "open"],
        behaviors: &["fears ignorance", "needs meaning", "explores", "teaches"],
    }),
    (Actor::Architect, DiagnosticPattern {
        signs: &["Capricorn"],
        keywords: &["build", "structure", "organize", "plan", "achieve", "master", "construct", "establish", "command", "lead", "control", "discipline"],
        tonality: &["authoritative", "structured", "formal", "disciplined", "commanding", "steady", "methodical", "serious"],
        behaviors: &["fears failure", "needs control", "builds", "achieves", "constructs masterfully but controls", "commands respect but isolates", "plans meticulously", "respects authority"],
    }),
    (Actor::Reformer, DiagnosticPattern {
        signs: &["Aquarius"],
        keywords: &["reform", "innovate", "revolutionize", "liberate", "progress", "change"],
        tonality: &["innovative", "detached", "radical", "abstract"],
        behaviors: &["fears conformity", "needs freedom", "reforms", "innovates"],
    }),
    (Actor::Empath, DiagnosticPattern {
        signs: &["Pisces"],
        keywords: &["feel", "empathize", "flow", "merge", "dissolve", "transcend", "absorb", "sense", "intuit", "connect", "understand", "compassion"],
        tonality: &["fluid", "evasive", "gentle", "impressionistic", "soft", "dreamy", "intuitive", "sensitive"],
        behaviors: &["fears disconnection", "needs unity", "flows", "transcends", "feels profoundly but dissolves", "empathizes deeply", "absorbs emotions", "withdraws to process"],
    }),
];

// =============================================================================
// ROLE REGISTRY (presentation style)
// =============================================================================

pub static ROLE_PATTERNS: [(Role, DiagnosticPattern); 12] = [
    (Role::DirectFast, DiagnosticPattern {
        signs: &["Aries"],
        keywords: &["direct", "immediate", "urgent", "quick", "decisive", "fast", "rapid", "instant", "swift", "abrupt", "blunt"],
        tonality: &["bold", "urgent", "fast", "sharp", "crisp", "energetic", "impatient"],
        behaviors: &["acts quickly", "speaks directly", "moves fast", "cuts to the chase", "avoids delays", "shows impatience", "demands immediate response"],
    }),
    (Role::DeliberateGrounded, DiagnosticPattern {
        signs: &["Taurus"],
        keywords: &["deliberate", "slow", "steady", "methodical", "patient"],
        tonality: &["calm", "grounded", "steady"],
        behaviors: &["moves slowly", "thinks carefully", "stays stable"],
    }),
    (Role::VerbalMultiThreaded, DiagnosticPattern {
        signs: &["Gemini"],
        keywords: &["talkative", "quick", "multiple", "varied", "changeable", "conversational", "articulate", "expressive", "chatty", "communicative"],
        tonality: &["witty", "rapid", "verbal", "lively", "animated", "clever", "engaging"],
        behaviors: &["talks much", "changes topics", "multitasks", "juggles ideas", "thinks aloud", "connects concepts", "avoids single focus"],
    }),
    (Role::EmotionallyCoded, DiagnosticPattern {
        signs: &["Cancer"],
        keywords: &["emotional", "feeling", "sensitive", "moody", "caring"],
        tonality: &["emotional", "warm", "caring"],
        behaviors: &["shows emotion", "cares deeply", "protective"],
    }),
    (Role::ExpressiveCentral, DiagnosticPattern {
        signs: &["Leo"],
        keywords: &["expressive", "dramatic", "central", "performative", "vibrant"],
        tonality: &["confident", "vibrant", "expressive"],
        behaviors: &["performs", "takes center", "expresses boldly"],
    }),
    (Role::PreciseCritical, DiagnosticPattern {
        signs: &["Virgo"],
        keywords: &["precise", "critical", "analytical", "detailed", "exact"],
        tonality: &["precise", "analytical", "detailed"],
        behaviors: &["analyzes", "criticizes", "perfects"],
    }),
    (Role::DiplomaticRelational, DiagnosticPattern {
        signs: &["Libra"],
        keywords: &["diplomatic", "relational", "social", "balanced", "harmonious"],
        tonality: &["polished", "fair", "diplomatic"],
        behaviors: &["mediates", "socializes", "seeks balance"],
    }),
    (Role::PenetratingPrivate, DiagnosticPattern {
        signs: &["Scorpio"],
        keywords: &["penetrating", "private", "intense", "secretive", "probing", "deep", "mysterious", "guarded", "reserved", "hidden"],
        tonality: &["intense", "private", "probing", "quiet", "focused", "magnetic", "controlled"],
        behaviors: &["penetrates", "keeps secrets", "investigates", "guards information", "speaks selectively", "maintains mystery", "reveals gradually"],
    }),
    (Role::CandidExpansive, DiagnosticPattern {
        signs: &["Sagittarius"],
        keywords: &["candid", "expansive", "open", "honest", "broad", "frank", "straightforward", "unfiltered", "blunt", "wide-ranging"],
        tonality: &["candid", "expansive", "open", "enthusiastic", "philosophical", "adventurous", "optimistic"],
        behaviors: &["speaks truth", "expands", "explores", "shares openly", "thinks big picture", "avoids small details", "embraces possibilities"],
    }),
    (Role::FormalStructured, DiagnosticPattern {
        signs: &["Capricorn"],
        keywords: &["formal", "structured", "organized", "disciplined", "authoritative", "methodical", "systematic", "professional", "proper", "hierarchical"],
        tonality: &["formal", "structured", "authoritative", "measured", "serious", "respectful", "controlled"],
        behaviors: &["organizes", "disciplines", "structures", "follows protocol", "maintains order", "respects hierarchy", "plans systematically"],
    }),
    (Role::DetachedConceptual, DiagnosticPattern {
        signs: &["Aquarius"],
        keywords: &["detached", "conceptual", "abstract", "innovative", "unique"],
        tonality: &["detached", "innovative", "abstract"],
        behaviors: &["detaches", "conceptualizes", "innovates"],
    }),
    (Role::ImpressionisticEvasive, DiagnosticPattern {
        signs: &["Pisces"],
        keywords: &["impressionistic", "evasive", "fluid", "vague", "dreamy", "subtle", "indirect", "elusive", "ambiguous", "metaphorical"],
        tonality: &["fluid", "evasive", "impressionistic", "soft", "gentle", "poetic", "mystical"],
        behaviors: &["evades", "flows", "dreams", "speaks in metaphors", "avoids direct answers", "changes subject gracefully", "uses imagery"],
    }),
];

// =============================================================================
// COMPOSITE MATRIX
// =============================================================================

static COMPOSITE_TABLE: [(Actor, [(Role, &str); 12]); 12] = [
    (Actor::Initiator, [
        (Role::DirectFast, "Pure Catalyst"),
        (Role::DeliberateGrounded, "Slow Burn"),
        (Role::VerbalMultiThreaded, "Brainstormer"),
        (Role::EmotionallyCoded, "Impulsive Heart"),
        (Role::ExpressiveCentral, "Star Player"),
        (Role::PreciseCritical, "Pointed Spear"),
        (Role::DiplomaticRelational, "Charming Leader"),
        (Role::PenetratingPrivate, "Covert Operator"),
        (Role::CandidExpansive, "Adventurous Leader"),
        (Role::FormalStructured, "Disciplined Leader"),
        (Role::DetachedConceptual, "Rebel Leader"),
        (Role::ImpressionisticEvasive, "Elusive Spark"),
    ]),
    (Actor::Stabilizer, [
        (Role::DirectFast, "Unmovable Force"),
        (Role::DeliberateGrounded, "Bedrock"),
        (Role::VerbalMultiThreaded, "Resourceful Voice"),
        (Role::EmotionallyCoded, "Quiet Feeler"),
        (Role::ExpressiveCentral, "Generous Host"),
        (Role::PreciseCritical, "Practical Critic"),
        (Role::DiplomaticRelational, "Gracious Host"),
        (Role::PenetratingPrivate, "Silent Power"),
        (Role::CandidExpansive, "Honest Broker"),
        (Role::FormalStructured, "Master Builder"),
        (Role::DetachedConceptual, "Principled Investor"),
        (Role::ImpressionisticEvasive, "Gentle Giant"),
    ]),
    (Actor::Connector, [
        (Role::DirectFast, "Fast Talker"),
        (Role::DeliberateGrounded, "Patient Storyteller"),
        (Role::VerbalMultiThreaded, "Idea Machine"),
        (Role::EmotionallyCoded, "Sensitive Wit"),
        (Role::ExpressiveCentral, "Magnetic Speaker"),
        (Role::PreciseCritical, "Fact-Checker"),
        (Role::DiplomaticRelational, "Smooth Talker"),
        (Role::PenetratingPrivate, "Secret Keeper"),
        (Role::CandidExpansive, "Enthusiastic Debater"),
        (Role::FormalStructured, "Clear Communicator"),
        (Role::DetachedConceptual, "Genius Thinker"),
        (Role::ImpressionisticEvasive, "Poetic Storyteller"),
    ]),
    (Actor::Nurturer, [
        (Role::DirectFast, "Protective First Responder"),
        (Role::DeliberateGrounded, "Hearth Keeper"),
        (Role::VerbalMultiThreaded, "Story Weaver"),
        (Role::EmotionallyCoded, "Tidal Heart"),
        (Role::ExpressiveCentral, "Radiant Caregiver"),
        (Role::PreciseCritical, "Attentive Steward"),
        (Role::DiplomaticRelational, "Gentle Mediator"),
        (Role::PenetratingPrivate, "Hidden Well"),
        (Role::CandidExpansive, "Encouraging Guide"),
        (Role::FormalStructured, "Guardian of Boundaries"),
        (Role::DetachedConceptual, "Archetypal Care"),
        (Role::ImpressionisticEvasive, "Moonlit Shelter"),
    ]),
    (Actor::Validator, [
        (Role::DirectFast, "Spotlight Sprinter"),
        (Role::DeliberateGrounded, "Steady Beacon"),
        (Role::VerbalMultiThreaded, "Golden Voice"),
        (Role::EmotionallyCoded, "Warm Center"),
        (Role::ExpressiveCentral, "Solar Heart"),
        (Role::PreciseCritical, "Exacting Muse"),
        (Role::DiplomaticRelational, "Gracious Host"),
        (Role::PenetratingPrivate, "Hidden Flame"),
        (Role::CandidExpansive, "Generous Leader"),
        (Role::FormalStructured, "Regal Architect"),
        (Role::DetachedConceptual, "Iconoclast Star"),
        (Role::ImpressionisticEvasive, "Dramatic Mirage"),
    ]),
    (Actor::Optimizer, [
        (Role::DirectFast, "Surgical Fixer"),
        (Role::DeliberateGrounded, "Patient Refiner"),
        (Role::VerbalMultiThreaded, "Systems Analyst"),
        (Role::EmotionallyCoded, "Careful Helper"),
        (Role::ExpressiveCentral, "Pointed Critic"),
        (Role::PreciseCritical, "Pure Analyst"),
        (Role::DiplomaticRelational, "Tactful Editor"),
        (Role::PenetratingPrivate, "Forensic Healer"),
        (Role::CandidExpansive, "Ethical Improver"),
        (Role::FormalStructured, "Method Architect"),
        (Role::DetachedConceptual, "Abstract Optimizer"),
        (Role::ImpressionisticEvasive, "Whispered Correction"),
    ]),
    (Actor::Harmonizer, [
        (Role::DirectFast, "Grace Under Pressure"),
        (Role::DeliberateGrounded, "Elegant Anchor"),
        (Role::VerbalMultiThreaded, "Silver Mediator"),
        (Role::EmotionallyCoded, "Soft Balancer"),
        (Role::ExpressiveCentral, "Charming Diplomat"),
        (Role::PreciseCritical, "Fair Arbiter"),
        (Role::DiplomaticRelational, "Pure Harmonist"),
        (Role::PenetratingPrivate, "Subtle Broker"),
        (Role::CandidExpansive, "Open Negotiator"),
        (Role::FormalStructured, "Equity Architect"),
        (Role::DetachedConceptual, "Idealist Reconciler"),
        (Role::ImpressionisticEvasive, "Velvet Balance"),
    ]),
    (Actor::Investigator, [
        (Role::DirectFast, "Cutting Truth"),
        (Role::DeliberateGrounded, "Deep Root"),
        (Role::VerbalMultiThreaded, "Information Broker"),
        (Role::EmotionallyCoded, "Hidden Current"),
        (Role::ExpressiveCentral, "Charismatic Leader"),
        (Role::PreciseCritical, "Forensic Analyst"),
        (Role::DiplomaticRelational, "Strategic Advisor"),
        (Role::PenetratingPrivate, "Silent Oracle"),
        (Role::CandidExpansive, "Truth-Teller"),
        (Role::FormalStructured, "Strategic Planner"),
        (Role::DetachedConceptual, "Strategic Futurist"),
        (Role::ImpressionisticEvasive, "Psychic Investigator"),
    ]),
    (Actor::Visionary, [
        (Role::DirectFast, "Blunt Prophet"),
        (Role::DeliberateGrounded, "Enduring Wisdom"),
        (Role::VerbalMultiThreaded, "Enthusiastic Teacher"),
        (Role::EmotionallyCoded, "Protective Guide"),
        (Role::ExpressiveCentral, "Inspiring Preacher"),
        (Role::PreciseCritical, "Moral Compass"),
        (Role::DiplomaticRelational, "Fair-Minded Guru"),
        (Role::PenetratingPrivate, "Truth Seeker"),
        (Role::CandidExpansive, "Pure Visionary"),
        (Role::FormalStructured, "Ambitious Teacher"),
        (Role::DetachedConceptual, "Radical Philosopher"),
        (Role::ImpressionisticEvasive, "Spiritual Wanderer"),
    ]),
    (Actor::Architect, [
        (Role::DirectFast, "Command Builder"),
        (Role::DeliberateGrounded, "Stone Mason"),
        (Role::VerbalMultiThreaded, "Executive Communicator"),
        (Role::EmotionallyCoded, "Steeled Guardian"),
        (Role::ExpressiveCentral, "Dignified Leader"),
        (Role::PreciseCritical, "Master Planner"),
        (Role::DiplomaticRelational, "Statesman"),
        (Role::PenetratingPrivate, "Silent Strategist"),
        (Role::CandidExpansive, "Ambitious Captain"),
        (Role::FormalStructured, "Pure Architect"),
        (Role::DetachedConceptual, "Systemic Builder"),
        (Role::ImpressionisticEvasive, "Sober Dreamer"),
    ]),
    (Actor::Reformer, [
        (Role::DirectFast, "Shock Innovator"),
        (Role::DeliberateGrounded, "Principled Reformer"),
        (Role::VerbalMultiThreaded, "Signal Splitter"),
        (Role::EmotionallyCoded, "Detached Advocate"),
        (Role::ExpressiveCentral, "Iconoclast Performer"),
        (Role::PreciseCritical, "Analytical Maverick"),
        (Role::DiplomaticRelational, "Civic Futurist"),
        (Role::PenetratingPrivate, "Underground Radical"),
        (Role::CandidExpansive, "Visionary Reformer"),
        (Role::FormalStructured, "Policy Architect"),
        (Role::DetachedConceptual, "Pure Innovator"),
        (Role::ImpressionisticEvasive, "Electric Phantom"),
    ]),
    (Actor::Empath, [
        (Role::DirectFast, "Soft Surge"),
        (Role::DeliberateGrounded, "Kind Anchor"),
        (Role::VerbalMultiThreaded, "Dream Messenger"),
        (Role::EmotionallyCoded, "Oceanic Heart"),
        (Role::ExpressiveCentral, "Mystic Performer"),
        (Role::PreciseCritical, "Discerning Mystic"),
        (Role::DiplomaticRelational, "Porous Bridge"),
        (Role::PenetratingPrivate, "Psychic Diver"),
        (Role::CandidExpansive, "Pilgrim Poet"),
        (Role::FormalStructured, "Vessel Maker"),
        (Role::DetachedConceptual, "Neptunian Thinker"),
        (Role::ImpressionisticEvasive, "Pure Dreamer"),
    ]),
];

lazy_static! {
    static ref COMPOSITE_MATRIX: HashMap<(Actor, Role), &'static str> = COMPOSITE_TABLE
        .iter()
        .flat_map(|(actor, row)| row.iter().map(move |(role, name)| ((*actor, *role), *name)))
        .collect();
}

/// Pattern for an Actor, None for Unknown
pub fn actor_pattern(actor: Actor) -> Option<&'static DiagnosticPattern> {
    ACTOR_PATTERNS.iter().find(|(a, _)| *a == actor).map(|(_, p)| p)
}

/// Pattern for a Role, None for Unknown
pub fn role_pattern(role: Role) -> Option<&'static DiagnosticPattern> {
    ROLE_PATTERNS.iter().find(|(r, _)| *r == role).map(|(_, p)| p)
}

/// Matrix entry for a pair, if any
pub fn lookup_composite(actor: Actor, role: Role) -> Option<&'static str> {
    COMPOSITE_MATRIX.get(&(actor, role)).copied()
}

/// Matrix entry, or "<Actor> / <Role>" on a miss
pub fn composite_name(actor: Actor, role: Role) -> String {
    match lookup_composite(actor, role) {
        Some(name) => name.to_string(),
        None => format!("{} / {}", actor.label(), role.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_axis_order() {
        let actors: Vec<Actor> = ACTOR_PATTERNS.iter().map(|(a, _)| *a).collect();
        assert_eq!(actors, Actor::ALL.to_vec());
        let roles: Vec<Role> = ROLE_PATTERNS.iter().map(|(r, _)| *r).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_every_label_has_a_pattern() {
        for actor in Actor::ALL {
            let p = actor.pattern().unwrap();
            assert!(!p.keywords.is_empty(), "{} has no keywords", actor);
            assert!(p.max_raw_score() > 0.0);
        }
        for role in Role::ALL {
            assert!(role.pattern().is_some(), "{} has no pattern", role);
        }
    }

    #[test]
    fn test_matrix_is_complete() {
        for actor in Actor::ALL {
            for role in Role::ALL {
                assert!(
                    lookup_composite(actor, role).is_some(),
                    "missing composite for {} x {}",
                    actor,
                    role
                );
            }
        }
    }

    #[test]
    fn test_matrix_lookup() {
        assert_eq!(composite_name(Actor::Initiator, Role::DirectFast), "Pure Catalyst");
        assert_eq!(composite_name(Actor::Visionary, Role::CandidExpansive), "Pure Visionary");
    }

    #[test]
    fn test_unknown_falls_back_to_pair_form() {
        assert_eq!(composite_name(Actor::Unknown, Role::DirectFast), "Unknown / Direct & Fast");
        assert_eq!(composite_name(Actor::Empath, Role::Unknown), "Empath / Unknown");
        assert_eq!(composite_name(Actor::Unknown, Role::Unknown), "Unknown / Unknown");
    }
}
