//! Errors at the input edges (label parsing, evidence and config files)
//!
//! The classification engine itself never fails.

/// Input rejected before it reaches the engine
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unknown probe kind: {0} (expected INVERSION, TONE or DIRECTION)")]
    UnknownProbeKind(String),

    #[error("unknown probe mapping: {0} (expected DRIVER, ROLE or INCONCLUSIVE)")]
    UnknownProbeMapping(String),

    #[error("unknown thematic area: {0}")]
    UnknownArea(String),

    #[error("unknown actor label: {0}")]
    UnknownActor(String),

    #[error("unknown role label: {0}")]
    UnknownRole(String),

    #[error("malformed evidence line: {line}")]
    MalformedLine { line: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
