//! Evidence input for the CLI: JSON files and prefixed interactive lines
//!
//! Line forms (prefixes are case-insensitive):
//!   WB: <text>
//!   ABE: <text>
//!   OSR: <text>
//!   PROBE <DRIVER|ROLE|INCONCLUSIVE> [area] [INVERSION|TONE|DIRECTION]: <text>

use std::io::Read;

use crate::types::{InputError, OsrPattern, OsrProbe, ProbeKind, ProbeMapping, SessionEvidence};

/// Probe kind when a PROBE line names none
pub const DEFAULT_PROBE_KIND: ProbeKind = ProbeKind::Direction;

/// One parsed interactive line
#[derive(Debug, Clone, PartialEq)]
pub enum EvidenceLine {
    Wb(String),
    Abe(String),
    Osr(String),
    Probe {
        mapped_to: ProbeMapping,
        kind: ProbeKind,
        area: Option<String>,
        text: String,
    },
}

/// Parse a prefixed evidence line
pub fn parse_evidence_line(line: &str) -> Result<EvidenceLine, InputError> {
    let line = line.trim();
    let malformed = || InputError::MalformedLine { line: line.to_string() };

    let (head, text) = line.split_once(':').ok_or_else(malformed)?;
    let text = text.trim().to_string();
    let mut words = head.split_whitespace();
    let tag = words.next().ok_or_else(malformed)?.to_ascii_uppercase();

    match tag.as_str() {
        "WB" | "ABE" | "OSR" if words.next().is_some() => Err(malformed()),
        "WB" => Ok(EvidenceLine::Wb(text)),
        "ABE" => Ok(EvidenceLine::Abe(text)),
        "OSR" => Ok(EvidenceLine::Osr(text)),
        "PROBE" => {
            let mapped_to: ProbeMapping = words.next().ok_or_else(malformed)?.parse()?;
            let mut kind = None;
            let mut area = None;
            for word in words {
                match word.parse::<ProbeKind>() {
                    Ok(_) if kind.is_some() => return Err(malformed()),
                    Ok(k) => kind = Some(k),
                    Err(_) if area.is_none() => area = Some(word.to_string()),
                    Err(_) => return Err(malformed()),
                }
            }
            Ok(EvidenceLine::Probe {
                mapped_to,
                kind: kind.unwrap_or(DEFAULT_PROBE_KIND),
                area,
                text,
            })
        }
        _ => Err(malformed()),
    }
}

impl EvidenceLine {
    /// Append this line to a session
    pub fn apply(self, evidence: &mut SessionEvidence) {
        match self {
            EvidenceLine::Wb(text) => evidence.wb_patterns.push(text),
            EvidenceLine::Abe(text) => evidence.abe_patterns.push(text),
            EvidenceLine::Osr(content) => evidence.osr_patterns.push(OsrPattern {
                content,
                response: "OSR".to_string(),
                note: None,
            }),
            EvidenceLine::Probe {
                mapped_to,
                kind,
                area,
                text,
            } => {
                let mirror_id = format!("line-{}", evidence.osr_probes.len() + 1);
                let mut probe = OsrProbe::new(mirror_id, kind, mapped_to);
                probe.area = area;
                if !text.is_empty() {
                    probe.text = Some(text);
                }
                evidence.osr_probes.push(probe);
            }
        }
    }
}

/// Read a JSON session from a file path, or stdin for "-"
pub fn read_evidence(path: &str) -> Result<SessionEvidence, InputError> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_string(),
            source,
        })?
    };
    Ok(serde_json::from_str(&content)?)
}
