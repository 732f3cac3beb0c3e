//! Session evidence supplied by the feedback collaborator

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::InputError;
use crate::{WEIGHT_ABE, WEIGHT_OSR_PROBE, WEIGHT_WB};

/// Feedback affirmation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvidenceSource {
    /// Fully confirmed
    Wb,
    /// Partially confirmed
    Abe,
    /// Rejected or unclear (scored only through probes)
    Osr,
}

impl EvidenceSource {
    /// Aggregation weight for snippets from this tier
    pub fn weight(&self) -> f64 {
        match self {
            EvidenceSource::Wb => WEIGHT_WB,
            EvidenceSource::Abe => WEIGHT_ABE,
            EvidenceSource::Osr => WEIGHT_OSR_PROBE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EvidenceSource::Wb => "WB",
            EvidenceSource::Abe => "ABE",
            EvidenceSource::Osr => "OSR",
        }
    }
}

impl std::fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Kind of clarification asked after an OSR response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeKind {
    Inversion,
    Tone,
    Direction,
}

impl FromStr for ProbeKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INVERSION" => Ok(ProbeKind::Inversion),
            "TONE" => Ok(ProbeKind::Tone),
            "DIRECTION" => Ok(ProbeKind::Direction),
            _ => Err(InputError::UnknownProbeKind(s.to_string())),
        }
    }
}

/// Which axis the clarification pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeMapping {
    Driver,
    Role,
    #[default]
    Inconclusive,
}

impl ProbeMapping {
    /// DRIVER and ROLE count toward the drift index
    pub fn is_conclusive(&self) -> bool {
        !matches!(self, ProbeMapping::Inconclusive)
    }
}

impl FromStr for ProbeMapping {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRIVER" => Ok(ProbeMapping::Driver),
            "ROLE" => Ok(ProbeMapping::Role),
            "INCONCLUSIVE" => Ok(ProbeMapping::Inconclusive),
            _ => Err(InputError::UnknownProbeMapping(s.to_string())),
        }
    }
}

/// Controlled vocabulary for probe areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThematicArea {
    Agency,
    Boundaries,
    Communication,
    Energy,
    Relationships,
    Work,
    Home,
    Identity,
}

impl ThematicArea {
    pub const ALL: [ThematicArea; 8] = [
        ThematicArea::Agency,
        ThematicArea::Boundaries,
        ThematicArea::Communication,
        ThematicArea::Energy,
        ThematicArea::Relationships,
        ThematicArea::Work,
        ThematicArea::Home,
        ThematicArea::Identity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThematicArea::Agency => "agency",
            ThematicArea::Boundaries => "boundaries",
            ThematicArea::Communication => "communication",
            ThematicArea::Energy => "energy",
            ThematicArea::Relationships => "relationships",
            ThematicArea::Work => "work",
            ThematicArea::Home => "home",
            ThematicArea::Identity => "identity",
        }
    }
}

impl FromStr for ThematicArea {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownArea(s.to_string()))
    }
}

impl std::fmt::Display for ThematicArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// OSR item that was not probed; carried through, never scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsrPattern {
    pub content: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// OSR item with its clarification outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsrProbe {
    #[serde(default)]
    pub mirror_id: String,
    pub probe: ProbeKind,
    #[serde(default)]
    pub mapped_to: ProbeMapping,
    /// Free-form area tag; only the controlled vocabulary counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// User's clarification text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl OsrProbe {
    pub fn new(mirror_id: impl Into<String>, probe: ProbeKind, mapped_to: ProbeMapping) -> Self {
        Self {
            mirror_id: mirror_id.into(),
            probe,
            mapped_to,
            area: None,
            text: None,
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Area if it belongs to the controlled vocabulary
    pub fn thematic_area(&self) -> Option<ThematicArea> {
        self.area.as_deref().and_then(|a| a.parse().ok())
    }

    /// Clarification text, if any non-blank text was given
    pub fn clarification(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Everything collected for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvidence {
    #[serde(default)]
    pub wb_patterns: Vec<String>,
    #[serde(default)]
    pub abe_patterns: Vec<String>,
    #[serde(default)]
    pub osr_patterns: Vec<OsrPattern>,
    #[serde(default)]
    pub osr_probes: Vec<OsrProbe>,
}

impl SessionEvidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items that count toward confidence (unprobed OSR excluded)
    pub fn sample_size(&self) -> usize {
        self.wb_patterns.len() + self.abe_patterns.len() + self.osr_probes.len()
    }

    /// WB then ABE snippets with their tier; OSR text is scored only through probes
    pub fn scored_snippets(&self) -> impl Iterator<Item = (EvidenceSource, &str)> + '_ {
        let wb = self.wb_patterns.iter().map(|s| (EvidenceSource::Wb, s.as_str()));
        let abe = self.abe_patterns.iter().map(|s| (EvidenceSource::Abe, s.as_str()));
        wb.chain(abe)
    }
}

/// Optional nudges applied after aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_bonus: Option<f64>,
    /// Passed through to the composite; non-empty adds ASPECT_NOTE_BONUS
    #[serde(default)]
    pub aspect_notes: Vec<String>,
}
