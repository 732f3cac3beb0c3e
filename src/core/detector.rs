//! Actor/Role detector: the public engine surface
//!
//! Stateless between calls; all accumulators live on the call stack, so one
//! instance can be shared freely across threads.

use lazy_static::lazy_static;
use tracing::info;

use crate::core::aggregator::aggregate;
use crate::core::confidence::estimate_banded;
use crate::core::drift::DriftCalculator;
use crate::core::registry::composite_name;
use crate::core::scorer::PatternScorer;
use crate::core::tie_break::{resolve, ACTOR_TIE_SOURCES, ROLE_TIE_SOURCES};
use crate::types::{
    ActorRoleComposite, AxisLabel, BonusOptions, ContentAnalysis, DetectorConfig, DriftAssessment,
    OsrProbe, SessionEvidence,
};

lazy_static! {
    static ref SHARED: ActorRoleDetector = ActorRoleDetector::new();
}

#[derive(Debug, Clone)]
pub struct ActorRoleDetector {
    config: DetectorConfig,
    scorer: PatternScorer,
    drift: DriftCalculator,
}

impl Default for ActorRoleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorRoleDetector {
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            scorer: PatternScorer::from_config(&config),
            drift: DriftCalculator::new(),
            config,
        }
    }

    /// Process-wide instance with default settings
    pub fn shared() -> &'static ActorRoleDetector {
        &SHARED
    }

    /// Best Actor and Role for one snippet
    pub fn analyze_content(&self, text: &str) -> ContentAnalysis {
        self.scorer.analyze(text)
    }

    /// Drift assessment over probed clarifications
    pub fn compute_drift_index(&self, probes: &[OsrProbe]) -> DriftAssessment {
        self.drift.compute(probes)
    }

    /// Full composite for one session
    pub fn generate_composite(
        &self,
        evidence: &SessionEvidence,
        bonus: Option<&BonusOptions>,
    ) -> ActorRoleComposite {
        let tally = aggregate(&self.scorer, evidence, bonus);

        let actor = resolve(tally.actors.ranked(), self.config.tie_epsilon, ACTOR_TIE_SOURCES);
        let role = resolve(tally.roles.ranked(), self.config.tie_epsilon, ROLE_TIE_SOURCES);

        let sample_size = evidence.sample_size();
        let (confidence, confidence_band) = estimate_banded(actor.score, role.score, sample_size);

        let drift = if evidence.osr_probes.is_empty() {
            None
        } else {
            Some(self.compute_drift_index(&evidence.osr_probes))
        };
        let drift_detected = drift.as_ref().map(DriftAssessment::is_detected).unwrap_or(false);

        let final_actor = floor(actor.winner, actor.score, self.config.unknown_floor);
        let final_role = floor(role.winner, role.score, self.config.unknown_floor);
        let composite = composite_name(final_actor, final_role);

        info!(
            composite = %composite,
            actor = final_actor.label(),
            role = final_role.label(),
            confidence,
            sample_size,
            drift_detected,
            "composite generated"
        );

        ActorRoleComposite {
            actor: final_actor,
            role: final_role,
            composite,
            confidence,
            confidence_band,
            sample_size,
            drift_detected,
            drift,
            actor_signs: signs_of(final_actor),
            role_signs: signs_of(final_role),
            // Actor axis decides first
            tie_break: actor.tie_break.or(role.tie_break),
            notes: bonus.map(|b| b.aspect_notes.clone()).unwrap_or_default(),
            actor_breakdown: actor.ranked,
            role_breakdown: role.ranked,
        }
    }
}

fn floor<L: AxisLabel>(label: L, score: f64, unknown_floor: f64) -> L {
    if score >= unknown_floor {
        label
    } else {
        L::UNKNOWN
    }
}

fn signs_of<L: AxisLabel>(label: L) -> Vec<String> {
    label.signs().iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Actor, DriftBand, ProbeKind, ProbeMapping, Role};

    fn probe(mapped_to: ProbeMapping, area: &str) -> OsrProbe {
        OsrProbe::new("m", ProbeKind::Inversion, mapped_to).with_area(area)
    }

    #[test]
    fn test_empty_session() {
        let c = ActorRoleDetector::new().generate_composite(&SessionEvidence::new(), None);
        assert_eq!(c.actor, Actor::Unknown);
        assert_eq!(c.role, Role::Unknown);
        assert_eq!(c.composite, "Unknown / Unknown");
        assert_eq!(c.confidence, 0.0);
        assert!(c.drift.is_none());
        assert!(!c.drift_detected);
        assert!(c.actor_signs.is_empty());
    }

    #[test]
    fn test_single_snippet_caps_confidence() {
        let evidence = SessionEvidence {
            wb_patterns: vec!["I am visionary and candid, always expanding.".into()],
            ..Default::default()
        };
        let c = ActorRoleDetector::new().generate_composite(&evidence, None);
        assert_eq!(c.sample_size, 1);
        assert!(c.confidence <= 0.4);
    }

    #[test]
    fn test_strong_drift_across_areas() {
        let evidence = SessionEvidence {
            osr_probes: vec![
                probe(ProbeMapping::Driver, "work"),
                probe(ProbeMapping::Driver, "home"),
                probe(ProbeMapping::Driver, "work"),
                probe(ProbeMapping::Driver, "relationships"),
                probe(ProbeMapping::Role, "energy"),
            ],
            ..Default::default()
        };
        let c = ActorRoleDetector::new().generate_composite(&evidence, None);
        let drift = c.drift.as_ref().unwrap();
        assert!((drift.drift_index - 0.8).abs() < 1e-12);
        assert_eq!(drift.evidence_n, 5);
        assert_eq!(drift.band, DriftBand::Strong);
        assert!(c.drift_detected);
        assert_eq!(c.sample_size, 5);
    }

    #[test]
    fn test_notes_pass_through() {
        let bonus = BonusOptions {
            aspect_notes: vec!["Mars conjunct Sun".into()],
            ..Default::default()
        };
        let c = ActorRoleDetector::new().generate_composite(&SessionEvidence::new(), Some(&bonus));
        assert_eq!(c.notes, vec!["Mars conjunct Sun".to_string()]);
    }

    #[test]
    fn test_custom_floor_demotes_winner() {
        let evidence = SessionEvidence {
            wb_patterns: vec!["I ignite, spark, launch and push; bold, urgent, direct, fast".into()],
            ..Default::default()
        };
        let default = ActorRoleDetector::new().generate_composite(&evidence, None);
        assert_eq!(default.actor, Actor::Initiator);

        let strict = ActorRoleDetector::with_config(DetectorConfig {
            unknown_floor: 0.99,
            ..Default::default()
        });
        let c = strict.generate_composite(&evidence, None);
        assert_eq!(c.actor, Actor::Unknown);
        // breakdown still reports the raw standing
        assert_eq!(c.actor_breakdown[0].key, Actor::Initiator);
    }

    #[test]
    fn test_shared_instance_matches_fresh() {
        let text = "we mediate and negotiate with diplomatic balance";
        assert_eq!(
            ActorRoleDetector::shared().analyze_content(text),
            ActorRoleDetector::new().analyze_content(text)
        );
    }
}
