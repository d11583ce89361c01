//! Tournament and player data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tournament ID type
pub type TournamentId = Uuid;

/// Player ID type
pub type PlayerId = Uuid;

/// Registration phase of a tournament, derived from its start time and
/// current player count. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPhase {
    /// Start time in the future and seats available
    Open,
    /// Start time has passed
    Closed,
    /// All seats taken
    Full,
}

/// A tournament with a hard player cap and a start time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Tournament ID
    pub id: TournamentId,
    /// Tournament name (trimmed, 3-100 characters)
    pub name: String,
    /// Maximum number of players allowed (2-100)
    pub max_players: i32,
    /// Scheduled start time; registration closes at this instant
    pub start_at: DateTime<Utc>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Derive the registration phase for a given player count at a given
    /// instant.
    ///
    /// A tournament whose start time has passed reports [`RegistrationPhase::Closed`]
    /// even when it is also at capacity.
    pub fn phase_at(&self, registered: i64, now: DateTime<Utc>) -> RegistrationPhase {
        if self.start_at <= now {
            RegistrationPhase::Closed
        } else if registered >= i64::from(self.max_players) {
            RegistrationPhase::Full
        } else {
            RegistrationPhase::Open
        }
    }
}

/// A player registered for a single tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Tournament the player is registered for
    pub tournament_id: TournamentId,
    /// Player name (trimmed, 2-100 characters)
    pub name: String,
    /// Email address, stored lowercased
    pub email: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn tournament(max_players: i32, start_at: DateTime<Utc>) -> Tournament {
        Tournament {
            id: Uuid::new_v4(),
            name: "Test Cup".to_string(),
            max_players,
            start_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_phase_open_with_seats_and_future_start() {
        let now = Utc::now();
        let t = tournament(8, now + Duration::hours(1));
        assert_eq!(t.phase_at(0, now), RegistrationPhase::Open);
        assert_eq!(t.phase_at(7, now), RegistrationPhase::Open);
    }

    #[test]
    fn test_phase_full_at_capacity() {
        let now = Utc::now();
        let t = tournament(8, now + Duration::hours(1));
        assert_eq!(t.phase_at(8, now), RegistrationPhase::Full);
        assert_eq!(t.phase_at(9, now), RegistrationPhase::Full);
    }

    #[test]
    fn test_phase_closed_once_started() {
        let now = Utc::now();
        let t = tournament(8, now - Duration::seconds(1));
        assert_eq!(t.phase_at(0, now), RegistrationPhase::Closed);
    }

    #[test]
    fn test_phase_closed_at_exact_start_instant() {
        let now = Utc::now();
        let t = tournament(8, now);
        assert_eq!(t.phase_at(0, now), RegistrationPhase::Closed);
    }

    #[test]
    fn test_closed_takes_precedence_over_full() {
        let now = Utc::now();
        let t = tournament(2, now - Duration::hours(1));
        assert_eq!(t.phase_at(2, now), RegistrationPhase::Closed);
    }
}
