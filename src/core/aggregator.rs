//! Evidence aggregator: per-snippet winners → per-label weighted totals
//!
//! Only each snippet's best (non-Unknown) Actor and Role accumulate.
//! Bonus deltas apply to existing candidates only.

use tracing::debug;

use crate::core::scorer::PatternScorer;
use crate::types::{Actor, AxisLabel, BonusOptions, Candidate, EvidenceSource, Role, SessionEvidence};
use crate::ASPECT_NOTE_BONUS;

/// Candidates for one axis in first-seen order
#[derive(Debug, Clone)]
pub struct AxisTally<L> {
    candidates: Vec<Candidate<L>>,
}

impl<L: AxisLabel> Default for AxisTally<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: AxisLabel> AxisTally<L> {
    pub fn new() -> Self {
        Self { candidates: Vec::new() }
    }

    /// Credit `by` to a label from one source; Unknown is ignored
    pub fn add(&mut self, key: L, source: EvidenceSource, by: f64) {
        if key.is_unknown() {
            return;
        }
        let index = match self.candidates.iter().position(|c| c.key == key) {
            Some(i) => i,
            None => {
                self.candidates.push(Candidate::new(key));
                self.candidates.len() - 1
            }
        };
        let candidate = &mut self.candidates[index];
        candidate.score += by;
        candidate.sources.add(source, by);
    }

    /// Flat delta on every existing candidate total
    pub fn bump_all(&mut self, by: f64) {
        for candidate in &mut self.candidates {
            candidate.score += by;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn get(&self, key: L) -> Option<&Candidate<L>> {
        self.candidates.iter().find(|c| c.key == key)
    }

    /// Descending by total; equal totals keep first-seen order
    pub fn ranked(&self) -> Vec<Candidate<L>> {
        let mut ranked = self.candidates.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Both axes after aggregation and bonuses
#[derive(Debug, Clone, Default)]
pub struct SessionTally {
    pub actors: AxisTally<Actor>,
    pub roles: AxisTally<Role>,
}

/// Fold a session's evidence into weighted per-label totals
pub fn aggregate(
    scorer: &PatternScorer,
    evidence: &SessionEvidence,
    bonus: Option<&BonusOptions>,
) -> SessionTally {
    let mut tally = SessionTally::default();

    for (source, snippet) in evidence.scored_snippets() {
        let weight = source.weight();
        let analysis = scorer.analyze(snippet);
        tally.actors.add(analysis.actor, source, analysis.actor_score * weight);
        tally.roles.add(analysis.role, source, analysis.role_score * weight);
    }

    // Probed clarifications inform the Actor axis only
    let weight = EvidenceSource::Osr.weight();
    for text in evidence.osr_probes.iter().filter_map(|p| p.clarification()) {
        let analysis = scorer.analyze(text);
        tally.actors.add(analysis.actor, EvidenceSource::Osr, analysis.actor_score * weight);
    }

    if let Some(bonus) = bonus {
        apply_bonus(&mut tally, bonus);
    }

    debug!(
        actors = tally.actors.len(),
        roles = tally.roles.len(),
        "evidence aggregated"
    );

    tally
}

fn apply_bonus(tally: &mut SessionTally, bonus: &BonusOptions) {
    if let Some(delta) = bonus.actor_bonus.filter(|d| *d != 0.0) {
        tally.actors.bump_all(delta);
    }
    if let Some(delta) = bonus.role_bonus.filter(|d| *d != 0.0) {
        tally.roles.bump_all(delta);
    }
    if !bonus.aspect_notes.is_empty() {
        tally.actors.bump_all(ASPECT_NOTE_BONUS);
        tally.roles.bump_all(ASPECT_NOTE_BONUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OsrProbe, ProbeKind, ProbeMapping};

    #[test]
    fn test_tally_ignores_unknown() {
        let mut tally: AxisTally<Actor> = AxisTally::new();
        tally.add(Actor::Unknown, EvidenceSource::Wb, 1.0);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_ranked_is_stable_on_equal_totals() {
        let mut tally = AxisTally::new();
        tally.add(Actor::Empath, EvidenceSource::Abe, 0.3);
        tally.add(Actor::Initiator, EvidenceSource::Wb, 0.3);
        tally.add(Actor::Architect, EvidenceSource::Wb, 0.5);
        let keys: Vec<Actor> = tally.ranked().iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![Actor::Architect, Actor::Empath, Actor::Initiator]);
    }

    #[test]
    fn test_source_subtotals_accumulate() {
        let mut tally = AxisTally::new();
        tally.add(Role::DirectFast, EvidenceSource::Wb, 0.2);
        tally.add(Role::DirectFast, EvidenceSource::Abe, 0.1);
        tally.add(Role::DirectFast, EvidenceSource::Wb, 0.2);
        let c = tally.get(Role::DirectFast).unwrap();
        assert!((c.score - 0.5).abs() < 1e-12);
        assert!((c.sources.wb - 0.4).abs() < 1e-12);
        assert!((c.sources.abe - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_bonus_never_creates_candidates() {
        let evidence = SessionEvidence::new();
        let bonus = BonusOptions {
            actor_bonus: Some(0.3),
            role_bonus: Some(0.3),
            aspect_notes: vec!["note".into()],
        };
        let tally = aggregate(&PatternScorer::new(), &evidence, Some(&bonus));
        assert!(tally.actors.is_empty());
        assert!(tally.roles.is_empty());
    }

    #[test]
    fn test_aspect_notes_add_uniform_nudge() {
        let evidence = SessionEvidence {
            wb_patterns: vec!["I ignite and launch things".into()],
            ..Default::default()
        };
        let scorer = PatternScorer::new();
        let plain = aggregate(&scorer, &evidence, None);
        let bonus = BonusOptions {
            aspect_notes: vec!["fire-heavy chart".into()],
            ..Default::default()
        };
        let nudged = aggregate(&scorer, &evidence, Some(&bonus));

        let before = plain.actors.get(Actor::Initiator).unwrap().score;
        let after = nudged.actors.get(Actor::Initiator).unwrap().score;
        assert!((after - before - ASPECT_NOTE_BONUS).abs() < 1e-12);
    }

    #[test]
    fn test_probes_feed_actor_axis_only() {
        let evidence = SessionEvidence {
            osr_probes: vec![
                OsrProbe::new("m1", ProbeKind::Direction, ProbeMapping::Driver)
                    .with_text("I nurture and protect, warm and direct"),
                OsrProbe::new("m2", ProbeKind::Tone, ProbeMapping::Role),
            ],
            ..Default::default()
        };
        let tally = aggregate(&PatternScorer::new(), &evidence, None);
        let nurturer = tally.actors.get(Actor::Nurturer).unwrap();
        assert!(nurturer.sources.osr > 0.0);
        assert_eq!(nurturer.sources.wb, 0.0);
        assert!(tally.roles.is_empty());
    }

    #[test]
    fn test_abe_weighs_half_of_wb() {
        let text = "I ignite and launch things";
        let scorer = PatternScorer::new();
        let wb = aggregate(&scorer, &SessionEvidence { wb_patterns: vec![text.into()], ..Default::default() }, None);
        let abe = aggregate(&scorer, &SessionEvidence { abe_patterns: vec![text.into()], ..Default::default() }, None);
        let wb_total = wb.actors.get(Actor::Initiator).unwrap().score;
        let abe_total = abe.actors.get(Actor::Initiator).unwrap().score;
        assert!((abe_total * 2.0 - wb_total).abs() < 1e-12);
    }
}
