//! Registration module for tournaments and player sign-ups.
//!
//! This module provides tournament registration functionality including:
//! - Tournament creation with a player cap and start time
//! - Player registration with duplicate-email and capacity enforcement
//! - Listing registered players in sign-up order
//!
//! Registration is race-safe: the window check, duplicate check, capacity
//! check, and insert run inside one transaction holding a row lock on the
//! tournament, so concurrent attempts against the same tournament are
//! serialized.
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
//!     let db = Database::new(&Default::default()).await?;
//!     let engine = RegistrationEngine::new(Arc::new(db.pool().clone()));
//!
//!     let tournament = engine
//!         .create_tournament("Sunday Special", 9, Utc::now() + Duration::days(2))
//!         .await?;
//!     println!("Created tournament: {}", tournament.id);
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod errors;
pub mod models;
pub mod store;
pub mod validate;

pub use engine::RegistrationEngine;
pub use errors::{RegistrationError, RegistrationResult};
pub use models::{Player, PlayerId, RegistrationPhase, Tournament, TournamentId};
pub use store::PgTournamentStore;
