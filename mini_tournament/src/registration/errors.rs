//! Registration error types.

use super::models::TournamentId;
use thiserror::Error;

/// Registration errors
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Malformed or out-of-range caller data, rejected before any mutation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced tournament does not exist
    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),

    /// Registration window closed: the tournament has already started
    #[error("Cannot register for a tournament that has already started")]
    RegistrationClosed(TournamentId),

    /// A player with this email is already registered for the tournament
    #[error("A player with email {0} is already registered for this tournament")]
    EmailTaken(String),

    /// The tournament has reached its player cap
    #[error("Tournament is full ({max_players} players)")]
    TournamentFull { max_players: i32 },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RegistrationError {
    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Database errors are sanitized to prevent information disclosure about
    /// the internal system structure. Storage failures are safe for the
    /// caller to retry with backoff.
    pub fn client_message(&self) -> String {
        match self {
            RegistrationError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_client_message_hides_database_detail() {
        let err = RegistrationError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn test_client_message_passes_domain_errors_through() {
        let err = RegistrationError::TournamentFull { max_players: 8 };
        assert_eq!(err.client_message(), "Tournament is full (8 players)");

        let err = RegistrationError::EmailTaken("alice@example.com".to_string());
        assert!(err.client_message().contains("alice@example.com"));

        let err = RegistrationError::RegistrationClosed(Uuid::new_v4());
        assert_eq!(
            err.client_message(),
            "Cannot register for a tournament that has already started"
        );
    }
}
