//! HTTP routes for transcript retrieval.
//!
//! Every handler resolves the video identifier first and makes at most one
//! gateway call. Nothing is shared between requests beyond the read-only
//! [`AppState`].

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use eyre::Result;
use log::{debug, info, warn};
use serde::Serialize;

use crate::error::ApiError;
use crate::gateway::TranscriptGateway;
use crate::output::render_text;
use crate::{Segment, TrackInfo, extract_video_id};

/// Shared, read-only application state
pub struct AppState {
    pub gateway: Arc<dyn TranscriptGateway>,
    pub default_languages: Vec<String>,
}

#[derive(Serialize)]
struct TranscriptResponse {
    video_id: String,
    transcript: TranscriptBody,
}

#[derive(Serialize)]
#[serde(untagged)]
enum TranscriptBody {
    Text(String),
    Segments(Vec<Segment>),
}

#[derive(Serialize)]
struct LanguagesResponse {
    video_id: String,
    available_languages: Vec<TrackInfo>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/transcript/{*video}", get(get_transcript))
        .route("/languages/{*video}", get(get_languages))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn run(addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    eprintln!("Listening on http://{addr}");
    eprintln!("  GET /transcript/<video_id_or_url>?lang=..&format=json|text");
    eprintln!("  GET /languages/<video_id_or_url>");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}

/// Resolve once `signal` fires; never resolve if the handler could not be installed
async fn shutdown_signal(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Could not listen for Ctrl+C, running until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "YouTube Transcript API Service",
        "endpoints": {
            "get_transcript": "/transcript/<video_id_or_url>",
            "get_transcript_languages": "/languages/<video_id_or_url>"
        },
        "example": "/transcript/dQw4w9WgXcQ"
    }))
}

/// Resolve the path segment, treating undecodable paths like any other bad input
fn resolve(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(video) = path.map_err(|e| {
        debug!("Rejected video path: {e}");
        ApiError::InvalidInput
    })?;
    extract_video_id(&video).ok_or(ApiError::InvalidInput)
}

async fn get_transcript(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let video_id = resolve(path)?;

    // Repeated `lang` params keep their order
    let mut languages: Vec<String> = params
        .iter()
        .filter(|(k, _)| k == "lang")
        .map(|(_, v)| v.clone())
        .collect();
    if languages.is_empty() {
        languages = state.default_languages.clone();
    }
    let as_text = params
        .iter()
        .find(|(k, _)| k == "format")
        .is_some_and(|(_, v)| v == "text");

    debug!("GET transcript video_id={video_id} languages={languages:?} text={as_text}");

    let segments = state.gateway.fetch(&video_id, &languages).await.map_err(|e| {
        warn!("Transcript fetch failed for {video_id}: {e}");
        ApiError::from(e)
    })?;

    let transcript = if as_text {
        TranscriptBody::Text(render_text(&segments))
    } else {
        TranscriptBody::Segments(segments)
    };

    Ok(Json(TranscriptResponse { video_id, transcript }))
}

async fn get_languages(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<LanguagesResponse>, ApiError> {
    let video_id = resolve(path)?;
    debug!("GET languages video_id={video_id}");

    let available_languages = state.gateway.list_tracks(&video_id).await.map_err(|e| {
        warn!("Track listing failed for {video_id}: {e}");
        ApiError::from(e)
    })?;

    Ok(Json(LanguagesResponse {
        video_id,
        available_languages,
    }))
}
