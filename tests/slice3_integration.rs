//! Integration tests for Slice 3 - drift index
//!
//! Probe mappings + areas → driftIndex, band, state dependence

use actorrole::core::ActorRoleDetector;
use actorrole::types::{
    DriftBand, DriftReason, OsrProbe, ProbeKind, ProbeMapping, SessionEvidence, ThematicArea,
};

fn probe(id: &str, mapped_to: ProbeMapping, area: &str) -> OsrProbe {
    OsrProbe::new(id, ProbeKind::Inversion, mapped_to).with_area(area)
}

#[test]
fn test_scenario_four_driver_one_role_across_areas() {
    let probes = vec![
        probe("m1", ProbeMapping::Driver, "work"),
        probe("m2", ProbeMapping::Driver, "relationships"),
        probe("m3", ProbeMapping::Driver, "home"),
        probe("m4", ProbeMapping::Driver, "work"),
        probe("m5", ProbeMapping::Role, "energy"),
    ];
    let d = ActorRoleDetector::shared().compute_drift_index(&probes);
    assert!((d.drift_index - 0.8).abs() < 1e-12);
    assert_eq!(d.evidence_n, 5);
    assert_eq!(d.band, DriftBand::Strong);
    assert!(!d.state_dependent);
    assert_eq!(d.reason, DriftReason::R025_DRIFT_STRONG);
    assert_eq!(
        d.areas_spanned,
        vec![ThematicArea::Energy, ThematicArea::Relationships, ThematicArea::Work, ThematicArea::Home]
    );
}

#[test]
fn test_all_driver_in_one_area_is_suppressed() {
    let probes: Vec<OsrProbe> = (0..4)
        .map(|i| probe(&format!("m{}", i), ProbeMapping::Driver, "boundaries"))
        .collect();
    let d = ActorRoleDetector::shared().compute_drift_index(&probes);
    assert_eq!(d.band, DriftBand::None);
    assert!(d.state_dependent);
    assert_eq!(d.drift_index, 1.0);
    assert_eq!(d.reason, DriftReason::R022_DRIFT_STATE_DEPENDENT);
}

#[test]
fn test_inconclusive_probes_widen_area_span() {
    // Areas come from every probe, so an INCONCLUSIVE probe can lift suppression
    let probes = vec![
        probe("m1", ProbeMapping::Driver, "work"),
        probe("m2", ProbeMapping::Driver, "work"),
        probe("m3", ProbeMapping::Driver, "work"),
        probe("m4", ProbeMapping::Inconclusive, "identity"),
    ];
    let d = ActorRoleDetector::shared().compute_drift_index(&probes);
    assert_eq!(d.evidence_n, 3);
    assert_eq!(d.areas_spanned.len(), 2);
    assert_eq!(d.band, DriftBand::Possible);
    assert!(!d.state_dependent);
}

#[test]
fn test_strong_needs_four_conclusive() {
    let probes = vec![
        probe("m1", ProbeMapping::Driver, "work"),
        probe("m2", ProbeMapping::Driver, "home"),
        probe("m3", ProbeMapping::Driver, "agency"),
    ];
    let d = ActorRoleDetector::shared().compute_drift_index(&probes);
    assert_eq!(d.band, DriftBand::Possible);
}

#[test]
fn test_role_leaning_is_below_threshold() {
    let probes = vec![
        probe("m1", ProbeMapping::Role, "work"),
        probe("m2", ProbeMapping::Role, "home"),
        probe("m3", ProbeMapping::Role, "agency"),
        probe("m4", ProbeMapping::Driver, "energy"),
    ];
    let d = ActorRoleDetector::shared().compute_drift_index(&probes);
    assert!((d.drift_index - 0.25).abs() < 1e-12);
    assert_eq!(d.band, DriftBand::None);
    assert_eq!(d.reason, DriftReason::R023_DRIFT_BELOW_THRESHOLD);
}

#[test]
fn test_composite_drift_absent_without_probes() {
    let evidence = SessionEvidence {
        wb_patterns: vec!["I build and organize with structure".into()],
        ..Default::default()
    };
    let c = ActorRoleDetector::shared().generate_composite(&evidence, None);
    assert!(c.drift.is_none());
    assert!(!c.drift_detected);
    assert!(!c.state_dependent());
}

#[test]
fn test_composite_reports_suppressed_drift() {
    let evidence = SessionEvidence {
        osr_probes: vec![
            probe("m1", ProbeMapping::Driver, "home"),
            probe("m2", ProbeMapping::Driver, "home"),
            probe("m3", ProbeMapping::Driver, "home"),
        ],
        ..Default::default()
    };
    let c = ActorRoleDetector::shared().generate_composite(&evidence, None);
    assert!(!c.drift_detected);
    assert!(c.state_dependent());
    assert_eq!(c.drift.as_ref().map(|d| d.band), Some(DriftBand::None));
}

#[test]
fn test_drift_json_field_names() {
    let d = ActorRoleDetector::shared().compute_drift_index(&[probe("m1", ProbeMapping::Driver, "work")]);
    let json = serde_json::to_value(&d).unwrap();
    assert!(json.get("driftIndex").is_some());
    assert!(json.get("evidenceN").is_some());
    assert!(json.get("areasSpanned").is_some());
    assert!(json.get("stateDependent").is_some());
    assert_eq!(json["band"], "NONE");
}
