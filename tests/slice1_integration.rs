//! Integration tests for Slice 1 - normalizer + pattern scorer
//!
//! Text → tokens → per-pattern scores → best Actor/Role per snippet

use actorrole::core::{normalize, tokenize, PatternScorer};
use actorrole::types::{Actor, AxisLabel, DiagnosticPattern, Role};
use actorrole::WEAK_TONALITY_FACTOR;

const STARTING: DiagnosticPattern = DiagnosticPattern {
    signs: &[],
    keywords: &["starting"],
    tonality: &[],
    behaviors: &[],
};

const NAIVE: DiagnosticPattern = DiagnosticPattern {
    signs: &[],
    keywords: &["naive"],
    tonality: &[],
    behaviors: &[],
};

#[test]
fn test_hyphen_and_space_score_identically() {
    let scorer = PatternScorer::new();
    let hyphen = scorer.score(&tokenize("I am self-starting"), &STARTING);
    let space = scorer.score(&tokenize("I am self starting"), &STARTING);
    assert_eq!(hyphen, space);
    assert_eq!(hyphen.score, 1.0);
}

#[test]
fn test_diacritics_score_identically() {
    let scorer = PatternScorer::new();
    let accented = scorer.score(&tokenize("a naïve plan"), &NAIVE);
    let plain = scorer.score(&tokenize("a naive plan"), &NAIVE);
    assert_eq!(accented, plain);
    assert_eq!(plain.score, 1.0);
}

#[test]
fn test_negation_halves_real_pattern_keyword() {
    let scorer = PatternScorer::new();
    let pattern = Actor::Nurturer.pattern().unwrap();
    let plain = scorer.score(&tokenize("I protect people"), pattern);
    let negated = scorer.score(&tokenize("I never protect people"), pattern);
    assert_eq!(negated.keyword_points, plain.keyword_points * 0.5);
    assert!((negated.score - plain.score * 0.5).abs() < 1e-12);
}

#[test]
fn test_negation_outside_window_is_ignored() {
    let scorer = PatternScorer::new();
    let pattern = Actor::Nurturer.pattern().unwrap();
    let s = scorer.score(&tokenize("not what you think but I protect"), pattern);
    assert_eq!(s.keyword_points, 1.0);
}

#[test]
fn test_tonality_context_amplification_on_registry() {
    // "gentle" is Nurturer tonality but not on the strong list
    let scorer = PatternScorer::new();
    let pattern = Actor::Nurturer.pattern().unwrap();
    let alone = scorer.score(&tokenize("a gentle tone"), pattern);
    let in_context = scorer.score(&tokenize("a gentle tone when I nurture"), pattern);
    assert_eq!(alone.tonality_points, WEAK_TONALITY_FACTOR);
    assert_eq!(in_context.tonality_points, 1.0);
    assert!(in_context.score > alone.score);
}

#[test]
fn test_best_match_actor_and_role() {
    let analysis = PatternScorer::new().analyze("I investigate and uncover, always probing and private");
    assert_eq!(analysis.actor, Actor::Investigator);
    assert_eq!(analysis.role, Role::PenetratingPrivate);
}

#[test]
fn test_shared_keyword_goes_to_smaller_pattern() {
    // "connect" is a Connector and an Empath keyword; Connector has fewer keywords
    let scorer = PatternScorer::new();
    let tokens = tokenize("connect");
    let connector = scorer.score(&tokens, Actor::Connector.pattern().unwrap()).score;
    let empath = scorer.score(&tokens, Actor::Empath.pattern().unwrap()).score;
    assert!(connector > empath);

    let (winner, score) = scorer.best_match::<Actor>(&tokens);
    assert_eq!(winner, Actor::Connector);
    assert_eq!(score, connector);
}

#[test]
fn test_nothing_matches_is_unknown() {
    let analysis = PatternScorer::new().analyze("the weather was mild on tuesday");
    assert_eq!(analysis.actor, Actor::Unknown);
    assert_eq!(analysis.role, Role::Unknown);
    assert_eq!(analysis.actor_score, 0.0);
}

#[test]
fn test_scores_stay_in_unit_range() {
    let scorer = PatternScorer::new();
    let text = "direct immediate urgent quick decisive fast rapid instant swift abrupt blunt \
                bold sharp crisp energetic impatient acts quickly speaks directly moves fast";
    for role in Role::ALL {
        let s = scorer.score(&tokenize(text), role.pattern().unwrap()).score;
        assert!((0.0..=1.0).contains(&s), "{} scored {}", role, s);
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let once = normalize("Self-Starting, naïve — and “bold”!");
    assert_eq!(normalize(&once), once);
    assert_eq!(once, "self starting naive and bold");
}
