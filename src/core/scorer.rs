//! Pattern scorer: token stream × diagnostic pattern → normalized score
//!
//! Three signal families per pattern:
//! - keywords: whole-token (or contiguous run) triggers
//! - tonality: mood words, strong only when allow-listed or in keyword context
//! - behaviors: short phrases matched as ordered subsequences within a lookahead
//!
//! Every family counts each trigger once and halves negated hits.

use tracing::{debug, trace};

use crate::core::normalizer::{has_negation_before, tokenize};
use crate::types::{
    Actor, AxisLabel, ContentAnalysis, DetectorConfig, DiagnosticPattern, PatternScore, Role,
};
use crate::{
    BEHAVIOR_LOOKAHEAD, NEGATION_FACTOR, NEGATION_WINDOW, SCORE_WEIGHT_BEHAVIOR,
    SCORE_WEIGHT_KEYWORD, SCORE_WEIGHT_TONALITY, STRONG_TONALITY, WEAK_TONALITY_FACTOR,
};

/// Scores token streams against the pattern registries
#[derive(Debug, Clone, Copy)]
pub struct PatternScorer {
    negation_window: usize,
    behavior_lookahead: usize,
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternScorer {
    pub fn new() -> Self {
        Self {
            negation_window: NEGATION_WINDOW,
            behavior_lookahead: BEHAVIOR_LOOKAHEAD,
        }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            negation_window: config.negation_window,
            behavior_lookahead: config.behavior_lookahead,
        }
    }

    /// Score one pattern against a token stream
    pub fn score(&self, tokens: &[String], pattern: &DiagnosticPattern) -> PatternScore {
        if tokens.is_empty() {
            return PatternScore::zero();
        }

        let mut keyword_points = 0.0;
        for keyword in pattern.keywords {
            if let Some(index) = find_run(tokens, &phrase_words(keyword)) {
                keyword_points += self.negation_weight(tokens, index);
            }
        }
        let keyword_context = keyword_points > 0.0;

        let mut tonality_points = 0.0;
        for word in pattern.tonality {
            let words = phrase_words(word);
            if let Some(index) = find_run(tokens, &words) {
                let strong = keyword_context || words.iter().all(|w| STRONG_TONALITY.contains(&w.as_str()));
                let base = if strong { 1.0 } else { WEAK_TONALITY_FACTOR };
                tonality_points += base * self.negation_weight(tokens, index);
            }
        }

        let mut behavior_points = 0.0;
        for phrase in pattern.behaviors {
            behavior_points += self.phrase_hit(tokens, &phrase_words(phrase));
        }

        let raw = keyword_points * SCORE_WEIGHT_KEYWORD
            + tonality_points * SCORE_WEIGHT_TONALITY
            + behavior_points * SCORE_WEIGHT_BEHAVIOR;
        let max = pattern.max_raw_score();
        let score = if max > 0.0 { (raw / max).clamp(0.0, 1.0) } else { 0.0 };

        PatternScore {
            keyword_points,
            tonality_points,
            behavior_points,
            raw,
            score,
        }
    }

    /// Highest-scoring label on one axis; first declared wins exact ties, 0 → Unknown
    pub fn best_match<L: AxisLabel>(&self, tokens: &[String]) -> (L, f64) {
        let mut best = (L::UNKNOWN, 0.0);
        for label in L::all() {
            let Some(pattern) = label.pattern() else {
                continue;
            };
            let s = self.score(tokens, pattern).score;
            if s > 0.0 {
                trace!(label = label.label(), score = s, "pattern hit");
            }
            if s > best.1 {
                best = (*label, s);
            }
        }
        best
    }

    /// Normalize, tokenize and pick the best Actor and Role for one snippet
    pub fn analyze(&self, text: &str) -> ContentAnalysis {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return ContentAnalysis::unknown();
        }

        let (actor, actor_score) = self.best_match::<Actor>(&tokens);
        let (role, role_score) = self.best_match::<Role>(&tokens);

        debug!(
            tokens = tokens.len(),
            actor = actor.label(),
            actor_score,
            role = role.label(),
            role_score,
            "snippet analyzed"
        );

        ContentAnalysis {
            actor,
            role,
            actor_score,
            role_score,
        }
    }

    fn negation_weight(&self, tokens: &[String], index: usize) -> f64 {
        if has_negation_before(tokens, index, self.negation_window) {
            NEGATION_FACTOR
        } else {
            1.0
        }
    }

    /// Best hit for a behavior phrase: 1.0 clean, 0.5 negated, 0.0 absent
    fn phrase_hit(&self, tokens: &[String], words: &[String]) -> f64 {
        let Some((first, rest)) = words.split_first() else {
            return 0.0;
        };

        let mut best: f64 = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            if token != first {
                continue;
            }
            let end = (i + 1 + self.behavior_lookahead).min(tokens.len());
            if !is_ordered_subsequence(rest, &tokens[i + 1..end]) {
                continue;
            }
            best = best.max(self.negation_weight(tokens, i));
            if best >= 1.0 {
                break;
            }
        }
        best
    }
}

/// Split vocabulary on whitespace and hyphens ("wide-ranging" → ["wide", "ranging"])
fn phrase_words(phrase: &str) -> Vec<String> {
    phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// First index where `words` appears as a contiguous run
fn find_run(tokens: &[String], words: &[String]) -> Option<usize> {
    if words.is_empty() || words.len() > tokens.len() {
        return None;
    }
    tokens.windows(words.len()).position(|w| w == words)
}

fn is_ordered_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut remaining = needle.iter().peekable();
    for token in haystack {
        if remaining.peek().is_some_and(|w| *w == token) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}
