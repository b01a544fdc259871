//! In-process stand-in for the statistics API.

#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr};

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mimic_insight::config::Settings;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const KNOWN_PATIENT: &str = "10000032";

pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
        .route(
            "/api/dashboard/stats",
            get(|| async {
                Json(json!({
                    "total_patients": 100,
                    "total_admissions": 275,
                    "mortality_rate": 5.45,
                    "total_deaths": 15,
                    "total_icu_stays": 140
                }))
            }),
        )
        .route("/api/charts/diagnosis-icicle", get(diagnosis_icicle))
        .route(
            "/api/charts/medications-sunburst",
            get(|| async {
                Json(json!({
                    "data": [
                        {"route": "PO", "total": 160000, "drugs": [
                            {"drug": "Acetaminophen", "count": 120000},
                            {"drug": "Docusate", "count": 40000}
                        ]},
                        {"route": "IV", "total": 600000, "drugs": [
                            {"drug": "Heparin", "count": 600000}
                        ]}
                    ],
                    "total_routes": 2,
                    "description": "Prescripciones agrupadas por via"
                }))
            }),
        )
        .route(
            "/api/charts/hospital-transfers-chord",
            get(|| async {
                Json(json!({
                    "nodes": ["ED", "MICU", "Ward"],
                    "links": [
                        {"source": "ED", "target": "MICU", "value": 20000},
                        {"source": "MICU", "target": "Ward", "value": 500}
                    ]
                }))
            }),
        )
        .route(
            "/api/charts/admission-heatmap",
            get(|| async { "<html>maintenance</html>" }),
        )
        .route("/api/patients/:subject_id", get(patient))
        .route("/chat/", post(chat));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn settings_for(addr: SocketAddr) -> Settings {
    let url = format!("http://{addr}");
    Settings::from_lookup(|key| match key {
        "MIMIC_API_URL" => Some(url.clone()),
        "HEALTH_TIMEOUT_SECS" => Some("1".into()),
        _ => None,
    })
    .unwrap()
}

/// Settings pointing at a port nothing listens on.
pub fn unreachable_settings() -> Settings {
    Settings::from_lookup(|key| match key {
        "MIMIC_API_URL" => Some("http://127.0.0.1:9".into()),
        "HEALTH_TIMEOUT_SECS" => Some("1".into()),
        _ => None,
    })
    .unwrap()
}

async fn diagnosis_icicle(
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if query.get("min_count").map(String::as_str) != Some("1") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "expected min_count=1"})),
        );
    }
    let tree = json!({
        "name": "Diagnósticos",
        "children": [
            {"name": "A", "value": 12, "children": [
                {"name": "x", "value": 10},
                {"name": "y", "value": 2}
            ]},
            {"name": "B", "value": 1, "children": [
                {"name": "z", "value": 1}
            ]}
        ]
    });
    (StatusCode::OK, Json(json!({ "data": tree })))
}

async fn patient(Path(subject_id): Path<String>) -> (StatusCode, Json<Value>) {
    if subject_id != KNOWN_PATIENT {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Paciente no encontrado"})),
        );
    }
    let body = json!({
        "patient": {
            "_id": "66a1",
            "subject_id": 10000032,
            "gender": "F",
            "anchor_age": 52,
            "anchor_year": 2180,
            "anchor_year_group": "2014 - 2016",
            "dod": null
        },
        "admissions": [
            {"subject_id": 10000032, "hadm_id": 22595853,
             "admittime": "2180-05-06 22:23:00", "dischtime": "2180-05-07 17:15:00",
             "deathtime": null, "admission_type": "URGENT", "insurance": "Other",
             "marital_status": null, "race": "WHITE", "hospital_expire_flag": 0}
        ],
        "total_admissions": 1
    });
    (StatusCode::OK, Json(body))
}

async fn chat(Json(body): Json<Value>) -> Json<Value> {
    let turns = body["history"].as_array().map(Vec::len).unwrap_or(0);
    Json(json!({ "response": format!("{turns} turns") }))
}
