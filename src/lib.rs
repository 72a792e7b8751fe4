use thiserror::Error;

pub mod config;
pub mod constants;
pub mod db;
pub mod logging;
pub mod models;
pub mod pairings;
pub mod schema;
pub mod store;
pub mod tournament;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use models::standings::Standing;
pub use pairings::Pairing;
pub use store::TournamentStore;

/// Reasons a match report gets turned away. Nothing is written when one of these comes back.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RuleViolation {
    #[error("Player {player_id} cannot play a match against themselves.")]
    SelfPlay { player_id: i32 },
    #[error("Player {player_id} is not registered for tournament {tournament_id}.")]
    PlayerNotInTournament { player_id: i32, tournament_id: i32 },
    #[error("Players {player_a} and {player_b} have already played each other.")]
    Rematch { player_a: i32, player_b: i32 },
}

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("Tournament rule violation: {0}")]
    TournamentRuleViolation(#[from] RuleViolation),

    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Error connecting to database: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("Error running migrations: {0}")]
    MigrationError(String),
}

impl TournamentError {
    pub fn rule_violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::TournamentRuleViolation(v) => Some(v),
            _ => None,
        }
    }
}
