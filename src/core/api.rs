//! HTTP API for the Actor/Role detector
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /patterns - Registry listing
//! - POST /analyze - Best Actor/Role for one snippet
//! - POST /composite - Composite for a full session
//! - POST /drift - Drift assessment over probes
//!
//! No session state is kept; every request carries its own evidence.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::ActorRoleDetector;
use crate::types::{
    Actor, ActorRoleComposite, AxisLabel, BonusOptions, ContentAnalysis, DetectorConfig,
    DiagnosticPattern, DriftAssessment, OsrProbe, Role, SessionEvidence,
};

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Composite request
#[derive(Debug, Deserialize)]
pub struct CompositeRequest {
    pub evidence: SessionEvidence,
    #[serde(default)]
    pub bonus: Option<BonusOptions>,
}

/// Composite response
#[derive(Debug, Serialize)]
pub struct CompositeResponse {
    pub composite: ActorRoleComposite,
    pub digest: String,
}

/// Drift request
#[derive(Debug, Deserialize)]
pub struct DriftRequest {
    #[serde(default)]
    pub probes: Vec<OsrProbe>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub actors: usize,
    pub roles: usize,
}

/// One registry entry
#[derive(Debug, Serialize)]
pub struct PatternEntry {
    pub label: &'static str,
    #[serde(flatten)]
    pub pattern: DiagnosticPattern,
}

/// Registry listing
#[derive(Debug, Serialize)]
pub struct PatternsResponse {
    pub actors: Vec<PatternEntry>,
    pub roles: Vec<PatternEntry>,
}

/// Create the API router
pub fn create_router(config: DetectorConfig) -> Router {
    let detector = Arc::new(ActorRoleDetector::with_config(config));

    Router::new()
        .route("/health", get(health))
        .route("/patterns", get(patterns))
        .route("/analyze", post(analyze))
        .route("/composite", post(composite))
        .route("/drift", post(drift))
        .with_state(detector)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        actors: Actor::ALL.len(),
        roles: Role::ALL.len(),
    })
}

/// List both registries in declaration order
async fn patterns() -> Json<PatternsResponse> {
    Json(PatternsResponse {
        actors: entries::<Actor>(),
        roles: entries::<Role>(),
    })
}

/// Analyze a single snippet
async fn analyze(
    State(detector): State<Arc<ActorRoleDetector>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<ContentAnalysis> {
    Json(detector.analyze_content(&req.text))
}

/// Build the composite for one session's evidence
async fn composite(
    State(detector): State<Arc<ActorRoleDetector>>,
    Json(req): Json<CompositeRequest>,
) -> Json<CompositeResponse> {
    let composite = detector.generate_composite(&req.evidence, req.bonus.as_ref());
    let digest = composite.digest();
    Json(CompositeResponse { composite, digest })
}

/// Drift assessment only
async fn drift(
    State(detector): State<Arc<ActorRoleDetector>>,
    Json(req): Json<DriftRequest>,
) -> Json<DriftAssessment> {
    Json(detector.compute_drift_index(&req.probes))
}

fn entries<L: AxisLabel>() -> Vec<PatternEntry> {
    L::all()
        .iter()
        .filter_map(|l| {
            l.pattern().map(|p| PatternEntry {
                label: l.label(),
                pattern: *p,
            })
        })
        .collect()
}

/// Run the API server
pub async fn run_server(addr: &str, config: DetectorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "api listening");
    println!("actorrole API running on {}", addr);
    println!("  GET  /health     - Health check");
    println!("  GET  /patterns   - Registry listing");
    println!("  POST /analyze    - Analyze one snippet");
    println!("  POST /composite  - Session composite");
    println!("  POST /drift      - Drift assessment");
    axum::serve(listener, router).await?;
    Ok(())
}
