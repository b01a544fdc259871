//! HTTP route handlers for Axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::{
    api::types::{ChordDto, HealthDto, RangeQuery},
    client::ApiError,
    hierarchy::{filter_tree_range, medication_hierarchy, LeafRange, TreeEnvelope},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    let upstream = state.client.is_up().await;
    Json(HealthDto {
        status: "healthy".into(),
        upstream,
    })
}

pub async fn diagnosis_icicle(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<TreeEnvelope> {
    let range = query.range(LeafRange::at_least(state.settings.icicle_min_count));
    // fetch everything once and prune locally, as the dashboard does
    let tree = state
        .client
        .diagnosis_icicle(1)
        .await
        .map_err(upstream_error)?;
    Ok(Json(TreeEnvelope {
        data: filter_tree_range(&tree, &range),
    }))
}

pub async fn medications_sunburst(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<TreeEnvelope> {
    let range = query.range(state.settings.sunburst_range);
    let routes = state.client.medications().await.map_err(upstream_error)?;
    let tree = medication_hierarchy(&routes);
    Ok(Json(TreeEnvelope {
        data: filter_tree_range(&tree, &range),
    }))
}

pub async fn hospital_transfers_chord(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<ChordDto> {
    let range = query.range(state.settings.chord_range);
    let graph = state.client.transfers().await.map_err(upstream_error)?;
    Ok(Json(graph.filter_links(&range).into()))
}

fn upstream_error(err: ApiError) -> (StatusCode, String) {
    warn!(%err, "upstream request failed");
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, err.user_message())
}
