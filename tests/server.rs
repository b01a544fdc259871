mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mimic_insight::{
    api::{router, AppState},
    client::ApiClient,
    config::Settings,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{settings_for, spawn_upstream, unreachable_settings};

fn app(settings: Settings) -> Router {
    let client = ApiClient::new(&settings).unwrap();
    router(AppState { settings, client })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::String(
        String::from_utf8_lossy(&bytes).into_owned(),
    ));
    (status, value)
}

#[tokio::test]
async fn health_reports_upstream_down() {
    let (status, body) = get_json(app(unreachable_settings()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "upstream": false}));
}

#[tokio::test]
async fn icicle_route_applies_local_threshold() {
    let addr = spawn_upstream().await;
    let (status, body) = get_json(
        app(settings_for(addr)),
        "/charts/diagnosis-icicle?min_count=5",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"name": "Diagnósticos", "children": [
            {"name": "A", "children": [{"name": "x", "value": 10.0}]}
        ]}})
    );
}

#[tokio::test]
async fn icicle_route_keeps_root_when_everything_is_pruned() {
    let addr = spawn_upstream().await;
    let (_, body) = get_json(
        app(settings_for(addr)),
        "/charts/diagnosis-icicle?min_count=100",
    )
    .await;
    assert_eq!(body, json!({"data": {"name": "Diagnósticos", "children": []}}));
}

#[tokio::test]
async fn sunburst_route_uses_count_window() {
    let addr = spawn_upstream().await;
    let (status, body) = get_json(
        app(settings_for(addr)),
        "/charts/medications-sunburst?min_count=50000&max_count=500000",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let routes = body["data"]["children"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["name"], "PO");
    assert_eq!(routes[0]["children"][0]["name"], "Acetaminophen");
}

#[tokio::test]
async fn sunburst_route_defaults_to_configured_maximum() {
    let addr = spawn_upstream().await;
    let (_, body) = get_json(
        app(settings_for(addr)),
        "/charts/medications-sunburst?min_count=50000",
    )
    .await;
    let routes = body["data"]["children"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["name"], "PO");

    let (_, body) = get_json(
        app(settings_for(addr)),
        "/charts/medications-sunburst?min_count=50000&unbounded=true",
    )
    .await;
    assert_eq!(body["data"]["children"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn chord_route_returns_matrix() {
    let addr = spawn_upstream().await;
    let (status, body) = get_json(
        app(settings_for(addr)),
        "/charts/hospital-transfers-chord?min_count=1000",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"], json!(["ED", "MICU"]));
    assert_eq!(body["matrix"], json!([[0.0, 20000.0], [0.0, 0.0]]));
}

#[tokio::test]
async fn unreachable_upstream_is_a_bad_gateway() {
    let (status, body) = get_json(app(unreachable_settings()), "/charts/diagnosis-icicle").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, Value::String("Error al cargar datos".into()));
}
