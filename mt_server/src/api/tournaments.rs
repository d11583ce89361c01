//! Tournament API handlers.
//!
//! This module provides HTTP REST endpoints for tournament operations:
//! - Creating tournaments with a player cap and start time
//! - Registering players with duplicate-email and capacity enforcement
//! - Listing registered players in sign-up order
//!
//! # Examples
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:3000/api/v1/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Weekend Cup", "max_players": 16, "start_at": "2026-09-01T10:00:00Z"}'
//! ```
//!
//! Register a player:
//! ```bash
//! curl -X POST http://localhost:3000/api/v1/tournaments/TOURNAMENT_ID/register \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Alice", "email": "alice@example.com"}'
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use mini_tournament::registration::{
    Player, PlayerId, RegistrationError, Tournament, TournamentId,
};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub max_players: i32,
    pub start_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: TournamentId,
    pub name: String,
    pub max_players: i32,
    pub start_at: DateTime<Utc>,
    pub registered_players: i64,
}

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    pub tournament_id: TournamentId,
    pub created_at: DateTime<Utc>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            email: player.email,
            tournament_id: player.tournament_id,
            created_at: player.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map an engine error to an HTTP response.
///
/// Validation, window, duplicate, and capacity failures are client errors;
/// an unknown tournament is 404; storage failures become a generic 500 with
/// the detail kept out of the body.
fn error_response(err: RegistrationError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        RegistrationError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistrationError::Database(e) => {
            tracing::error!("registration storage failure: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        _ => StatusCode::BAD_REQUEST,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.client_message(),
        }),
    )
}

/// Create a new tournament.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Weekend Cup",
///   "max_players": 16,
///   "start_at": "2026-09-01T10:00:00Z"
/// }
/// ```
///
/// # Response
///
/// Returns `201 Created` with the stored tournament and a zero player count:
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Weekend Cup",
///   "max_players": 16,
///   "start_at": "2026-09-01T10:00:00Z",
///   "registered_players": 0
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Name shorter than 3 characters after trimming,
///   player cap outside 2-100, or a start time not in the future
/// - `500 Internal Server Error`: Database error
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(request): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<TournamentResponse>), (StatusCode, Json<ErrorResponse>)> {
    let tournament: Tournament = state
        .engine
        .create_tournament(&request.name, request.max_players, request.start_at)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(TournamentResponse {
            id: tournament.id,
            name: tournament.name,
            max_players: tournament.max_players,
            start_at: tournament.start_at,
            registered_players: 0,
        }),
    ))
}

/// Register a player for a tournament.
///
/// Registration succeeds only while the tournament's start time is in the
/// future, the email (compared case-insensitively) is not yet registered for
/// this tournament, and the player cap is not reached. Concurrent attempts
/// are serialized per tournament, so the cap holds under load.
///
/// # Path Parameters
///
/// - `tournament_id`: Tournament ID (UUID)
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # Response
///
/// Returns `200 OK` with the registered player:
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Alice",
///   "email": "alice@example.com",
///   "tournament_id": "123e4567-e89b-12d3-a456-426614174000",
///   "created_at": "2026-08-07T10:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Invalid name or email, registration window closed,
///   email already registered, or tournament full
/// - `404 Not Found`: Tournament doesn't exist
/// - `500 Internal Server Error`: Database error
pub async fn register_player(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
    Json(request): Json<RegisterPlayerRequest>,
) -> Result<Json<PlayerResponse>, (StatusCode, Json<ErrorResponse>)> {
    let player = state
        .engine
        .register_player(tournament_id, &request.name, &request.email)
        .await
        .map_err(error_response)?;

    Ok(Json(player.into()))
}

/// List registered players for a tournament.
///
/// Players are returned in sign-up order.
///
/// # Path Parameters
///
/// - `tournament_id`: Tournament ID (UUID)
///
/// # Response
///
/// Returns `200 OK` with an array of player records.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
/// - `500 Internal Server Error`: Database error
pub async fn list_players(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
) -> Result<Json<Vec<PlayerResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let players = state
        .engine
        .list_players(tournament_id)
        .await
        .map_err(error_response)?;

    Ok(Json(players.into_iter().map(PlayerResponse::from).collect()))
}
