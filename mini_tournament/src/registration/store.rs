//! PostgreSQL storage adapter for tournaments and players.
//!
//! Owns every SQL statement. The engine drives the invariant checks; this
//! adapter exposes pool-level reads plus transaction-scoped operations for
//! the atomic registration sequence. A unique violation on
//! `(tournament_id, email)` is translated to [`RegistrationError::EmailTaken`]
//! so a constraint hit at insert time surfaces the same way as the
//! in-transaction duplicate check.

use super::errors::{RegistrationError, RegistrationResult};
use super::models::{Player, Tournament, TournamentId};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};
use std::sync::Arc;
use uuid::Uuid;

/// PostgreSQL tournament store
#[derive(Clone)]
pub struct PgTournamentStore {
    pool: Arc<PgPool>,
}

impl PgTournamentStore {
    /// Create a new store backed by the given pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool (for starting transactions)
    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    /// Insert a new tournament and return the stored row
    ///
    /// The adapter does not validate; callers pass already-validated data.
    pub async fn insert_tournament(
        &self,
        name: &str,
        max_players: i32,
        start_at: DateTime<Utc>,
    ) -> RegistrationResult<Tournament> {
        let row = sqlx::query(
            r#"
            INSERT INTO tournaments (id, name, max_players, start_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, max_players, start_at, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(max_players)
        .bind(start_at.naive_utc())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(tournament_from_row(&row))
    }

    /// Get a tournament by id
    pub async fn get_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> RegistrationResult<Option<Tournament>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, max_players, start_at, created_at, updated_at
            FROM tournaments
            WHERE id = $1
            "#,
        )
        .bind(tournament_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(tournament_from_row))
    }

    /// Get a tournament by id, locking its row for the duration of the
    /// transaction
    ///
    /// The lock serializes concurrent registration attempts against the same
    /// tournament: a second writer blocks here until the first commits or
    /// rolls back.
    pub async fn get_tournament_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: TournamentId,
    ) -> RegistrationResult<Option<Tournament>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, max_players, start_at, created_at, updated_at
            FROM tournaments
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(tournament_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(row.as_ref().map(tournament_from_row))
    }

    /// Check whether a normalized email is already registered for a
    /// tournament, within the current transaction
    pub async fn email_registered(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: TournamentId,
        email: &str,
    ) -> RegistrationResult<bool> {
        let row = sqlx::query(
            "SELECT EXISTS (SELECT 1 FROM players WHERE tournament_id = $1 AND email = $2)",
        )
        .bind(tournament_id)
        .bind(email)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row.get::<bool, _>(0))
    }

    /// Count registered players within the current transaction
    pub async fn count_players_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: TournamentId,
    ) -> RegistrationResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) FROM players WHERE tournament_id = $1")
            .bind(tournament_id)
            .fetch_one(&mut **tx)
            .await?;

        Ok(row.get::<i64, _>(0))
    }

    /// Count registered players for a tournament
    pub async fn count_players(&self, tournament_id: TournamentId) -> RegistrationResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) FROM players WHERE tournament_id = $1")
            .bind(tournament_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.get::<i64, _>(0))
    }

    /// Insert a player row within the current transaction
    ///
    /// A unique violation on `(tournament_id, email)` maps to `EmailTaken`;
    /// the constraint catches duplicate races from writers that do not hold
    /// the tournament row lock.
    pub async fn insert_player(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: TournamentId,
        name: &str,
        email: &str,
    ) -> RegistrationResult<Player> {
        let result = sqlx::query(
            r#"
            INSERT INTO players (id, tournament_id, name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tournament_id, name, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tournament_id)
        .bind(name)
        .bind(email)
        .fetch_one(&mut **tx)
        .await;

        match result {
            Ok(row) => Ok(player_from_row(&row)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RegistrationError::EmailTaken(email.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List registered players for a tournament in sign-up order
    pub async fn list_players(
        &self,
        tournament_id: TournamentId,
    ) -> RegistrationResult<Vec<Player>> {
        let rows = sqlx::query(
            r#"
            SELECT id, tournament_id, name, email, created_at
            FROM players
            WHERE tournament_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }
}

fn tournament_from_row(row: &PgRow) -> Tournament {
    Tournament {
        id: row.get("id"),
        name: row.get("name"),
        max_players: row.get("max_players"),
        start_at: row.get::<chrono::NaiveDateTime, _>("start_at").and_utc(),
        created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        updated_at: row.get::<chrono::NaiveDateTime, _>("updated_at").and_utc(),
    }
}

fn player_from_row(row: &PgRow) -> Player {
    Player {
        id: row.get("id"),
        tournament_id: row.get("tournament_id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
    }
}
