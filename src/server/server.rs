use anyhow::Result;
use std::time::{Duration, Instant};

use tracing::error;

use crate::store::{NewSong, Song, SongId, SongUpdate, StoreError};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::services::ServeDir;

use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub songs_count: Option<usize>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct SongResponse {
    message: &'static str,
    song: Song,
}

/// Map a store failure onto the transport contract: bad payloads and id
/// collisions are the client's fault, unknown ids are not found, anything
/// touching the file itself is an internal error.
fn store_error_response(err: StoreError) -> Response {
    let status = match &err {
        StoreError::MissingField { .. } | StoreError::DuplicateId { .. } => StatusCode::BAD_REQUEST,
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Read(_) | StoreError::Write(_) | StoreError::Corrupt(_) => {
            error!("Song store failure: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        songs_count: state.store.list().map(|songs| songs.len()).ok(),
    };
    Json(stats)
}

async fn list_songs(State(store): State<SharedSongStore>) -> Response {
    match store.list() {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn create_song(
    State(store): State<SharedSongStore>,
    Json(body): Json<NewSong>,
) -> Response {
    match store.insert(body) {
        Ok(song) => (
            StatusCode::CREATED,
            Json(SongResponse {
                message: "Song added",
                song,
            }),
        )
            .into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn update_song(
    State(store): State<SharedSongStore>,
    Path(id): Path<String>,
    Json(body): Json<SongUpdate>,
) -> Response {
    match store.update(&SongId::from(id), body) {
        Ok(song) => Json(SongResponse {
            message: "Song updated",
            song,
        })
        .into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn delete_song(State(store): State<SharedSongStore>, Path(id): Path<String>) -> Response {
    match store.delete(&SongId::from(id)) {
        Ok(song) => Json(SongResponse {
            message: "Song deleted",
            song,
        })
        .into_response(),
        Err(err) => store_error_response(err),
    }
}

pub fn make_app(config: ServerConfig, store: SharedSongStore) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        store,
    };

    let mut routes: Router<ServerState> = Router::new()
        .route("/songs", get(list_songs).post(create_song))
        .route("/songs/{id}", put(update_song).delete(delete_song));

    // The frontend's index.html takes over the root path when configured.
    if config.frontend_dir_path.is_none() {
        routes = routes.route("/", get(home));
    }

    let app: Router = routes
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state);

    match config.frontend_dir_path {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}

pub async fn run_server(config: ServerConfig, store: SharedSongStore) -> Result<()> {
    let port = config.port;
    let app = make_app(config, store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
