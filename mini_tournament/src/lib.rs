//! # Mini Tournament
//!
//! A tournament registration library backed by PostgreSQL.
//!
//! The library manages tournaments with a hard player cap and a start time,
//! and registers players against them while enforcing three invariants:
//!
//! - a tournament never admits more than `max_players` players;
//! - within one tournament no two players share an email address
//!   (compared case-insensitively);
//! - players can only register while the tournament's start time is still
//!   in the future.
//!
//! The invariants hold under concurrent registration attempts: each
//! registration runs its window check, duplicate check, capacity check, and
//! insert inside a single database transaction that locks the tournament
//! row, with a unique constraint on `(tournament_id, email)` as a
//! commit-time backstop.
//!
//! ## Core Modules
//!
//! - [`registration`]: the registration engine, data models, and typed errors
//! - [`db`]: connection pooling, configuration, and schema bootstrap
//!
//! ## Example
//!
//! ```no_run
//! use mini_tournament::db::{Database, DatabaseConfig};
//! use mini_tournament::registration::RegistrationEngine;
//! use chrono::{Duration, Utc};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     db.migrate().await?;
//!
//!     let engine = RegistrationEngine::new(Arc::new(db.pool().clone()));
//!
//!     let tournament = engine
//!         .create_tournament("Weekend Cup", 16, Utc::now() + Duration::days(7))
//!         .await?;
//!     let player = engine
//!         .register_player(tournament.id, "Alice", "alice@example.com")
//!         .await?;
//!     println!("Registered {} for {}", player.name, tournament.name);
//!
//!     Ok(())
//! }
//! ```

/// Database connection pooling, configuration, and schema bootstrap.
pub mod db;
pub use db::{Database, DatabaseConfig};

/// Tournament and player registration: engine, models, errors.
pub mod registration;
pub use registration::{
    Player, RegistrationEngine, RegistrationError, RegistrationResult, Tournament,
};
