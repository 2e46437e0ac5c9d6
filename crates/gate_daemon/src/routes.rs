use std::convert::Infallible;
use std::sync::atomic::Ordering;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{
        sse::{Event, Sse},
        Json,
    },
    routing::{get, post},
    Router,
};
use gate_core::{journey, view};
use serde::Deserialize;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
pub fn make_router(state: AppState) -> Router {
    make_router_with_cors(state, "http://localhost:5173")
}

pub fn make_router_with_cors(state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<axum::http::HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/meta", get(meta_handler))
        .route("/api/v1/stations", get(stations_handler))
        .route("/api/v1/activities", get(activities_handler))
        .route("/api/v1/activities/:id/journey", get(journey_handler))
        .route("/api/v1/stream", get(stream_handler))
        .route("/api/v1/pause", post(pause_handler))
        .route("/api/v1/resume", post(resume_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn meta_handler(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    let sim = app_state.sim.lock();
    let paused = app_state.paused.load(Ordering::Relaxed);
    Json(serde_json::json!({
        "tick": sim.tick,
        "seed": sim.seed,
        "tick_secs": app_state.tick_secs,
        "paused": paused,
    }))
}

async fn stations_handler(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    let sim = app_state.sim.lock();
    Json(serde_json::json!({ "stations": sim.stations }))
}

#[derive(Debug, Deserialize)]
struct ActivitiesQuery {
    #[serde(default)]
    search: String,
    #[serde(default = "default_page")]
    page: usize,
}

fn default_page() -> usize {
    1
}

async fn activities_handler(
    State(app_state): State<AppState>,
    Query(query): Query<ActivitiesQuery>,
) -> Json<serde_json::Value> {
    let sim = app_state.sim.lock();
    let filtered = view::filter(&sim.activities, &query.search);
    let total = filtered.len();
    let (items, page) = view::paginate(&filtered, query.page);
    Json(serde_json::json!({
        "items": items,
        "page": page,
        "total_pages": view::total_pages(total),
        "total": total,
    }))
}

async fn journey_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut sim = app_state.sim.lock();
    let Some(activity) = sim.activities.iter().find(|a| a.id == id).cloned() else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("no activity with id {id}")})),
        );
    };
    let journey = journey::reconstruct(&activity, &mut sim.rng);
    drop(sim);
    let body = serde_json::json!({
        "journey": journey,
        "start_time_display": journey::display_start_time(&journey),
        "total_duration_display": journey::display_duration(&journey),
    });
    (StatusCode::OK, Json(body))
}

async fn pause_handler(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    app_state.paused.store(true, Ordering::Relaxed);
    Json(serde_json::json!({"paused": true}))
}

async fn resume_handler(State(app_state): State<AppState>) -> Json<serde_json::Value> {
    app_state.paused.store(false, Ordering::Relaxed);
    Json(serde_json::json!({"paused": false}))
}

async fn stream_handler(
    State(app_state): State<AppState>,
) -> Sse<impl futures_core::Stream<Item = Result<Event, Infallible>>> {
    let mut rx = app_state.update_tx.subscribe();
    let sim = app_state.sim.clone();

    let stream = async_stream::stream! {
        let mut heartbeat = tokio::time::interval(Duration::from_secs(15));
        heartbeat.tick().await; // discard the immediate first tick
        loop {
            tokio::select! {
                result = rx.recv() => {
                    match result {
                        Ok(update) => {
                            match serde_json::to_string(&update) {
                                Ok(data) => yield Ok(Event::default().data(data)),
                                Err(err) => tracing::error!("tick update serialization failed: {err}"),
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(_)) => {}
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
                _ = heartbeat.tick() => {
                    let tick = sim.lock().tick;
                    let hb = serde_json::json!({"heartbeat": true, "tick": tick});
                    yield Ok(Event::default().data(hb.to_string()));
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("ping"),
    )
}
