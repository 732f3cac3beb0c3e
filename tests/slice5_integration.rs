//! Integration tests for Slice 5 - HTTP API
//!
//! Stateless endpoints: every request carries its own evidence

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use actorrole::core::create_router;
use actorrole::types::DetectorConfig;

fn create_test_router() -> axum::Router {
    create_router(DetectorConfig::default())
}

async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = create_test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], actorrole::VERSION);
    assert_eq!(json["actors"], 12);
    assert_eq!(json["roles"], 12);
}

#[tokio::test]
async fn test_patterns_listing() {
    let (status, json) = get_json("/patterns").await;
    assert_eq!(status, StatusCode::OK);
    let actors = json["actors"].as_array().unwrap();
    assert_eq!(actors.len(), 12);
    assert_eq!(actors[0]["label"], "Initiator");
    assert_eq!(actors[0]["signs"][0], "Aries");
    assert!(actors[0]["keywords"].as_array().unwrap().len() > 0);
    assert_eq!(json["roles"][8]["label"], "Candid & Expansive");
}

#[tokio::test]
async fn test_analyze_endpoint() {
    let (status, json) = post_json("/analyze", r#"{"text": "I nurture and protect, warm and gentle"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["actor"], "Nurturer");
    assert!(json["actorScore"].as_f64().unwrap() > 0.0);
    assert!(json.get("roleScore").is_some());
}

#[tokio::test]
async fn test_composite_endpoint() {
    let body = r#"{
        "evidence": {
            "wbPatterns": ["I ignite, spark, launch and push; direct, urgent, fast and decisive"],
            "abePatterns": [],
            "osrPatterns": [],
            "osrProbes": [
                {"mirrorId": "m1", "probe": "DIRECTION", "mappedTo": "DRIVER", "area": "work"},
                {"mirrorId": "m2", "probe": "TONE", "mappedTo": "DRIVER", "area": "home"},
                {"mirrorId": "m3", "probe": "INVERSION", "mappedTo": "ROLE", "area": "energy"}
            ]
        },
        "bonus": {"aspectNotes": ["Sun in Aries"]}
    }"#;
    let (status, json) = post_json("/composite", body).await;
    assert_eq!(status, StatusCode::OK);
    let composite = &json["composite"];
    assert_eq!(composite["composite"], "Pure Catalyst");
    assert_eq!(composite["sampleSize"], 4);
    assert_eq!(composite["notes"][0], "Sun in Aries");
    assert_eq!(composite["drift"]["band"], "POSSIBLE");
    assert_eq!(composite["driftDetected"], true);
    assert_eq!(json["digest"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_composite_is_deterministic_over_http() {
    let body = r#"{"evidence": {"wbPatterns": ["we mediate and negotiate, polished and fair"]}}"#;
    let (_, first) = post_json("/composite", body).await;
    let (_, second) = post_json("/composite", body).await;
    assert_eq!(first["digest"], second["digest"]);
}

#[tokio::test]
async fn test_drift_endpoint() {
    let body = r#"{"probes": [
        {"mirrorId": "a", "probe": "TONE", "mappedTo": "DRIVER", "area": "work"},
        {"mirrorId": "b", "probe": "TONE", "mappedTo": "DRIVER", "area": "work"},
        {"mirrorId": "c", "probe": "TONE", "mappedTo": "DRIVER", "area": "work"}
    ]}"#;
    let (status, json) = post_json("/drift", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["band"], "NONE");
    assert_eq!(json["stateDependent"], true);
    assert_eq!(json["evidenceN"], 3);
    assert_eq!(json["reason"], "R022_DRIFT_STATE_DEPENDENT");
}

#[tokio::test]
async fn test_bad_probe_mapping_is_rejected() {
    let body = r#"{"probes": [{"mirrorId": "a", "probe": "TONE", "mappedTo": "SIDEWAYS"}]}"#;
    let (status, _) = post_json("/drift", body).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, _) = post_json("/analyze", "{not json").await;
    assert!(status.is_client_error());
}
