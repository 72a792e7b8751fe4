use crate::config::CONFIG;
use crate::db::{establish, run_migrations};
use crate::models::assigned_byes::AssignedBye;
use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::standings::Standing;
use crate::pairings::Pairing;
use crate::{tournament, TournamentError};
use diesel::SqliteConnection;

/// Players, matches, byes and pairings for any number of tournaments, kept in one SQLite
/// database.
///
/// Every method takes the tournament it applies to; [crate::constants::DEFAULT_TOURNAMENT_ID]
/// is the one to use if you only run a single tournament. Nothing is cached between calls.
pub struct TournamentStore {
    conn: SqliteConnection,
}

impl TournamentStore {
    /// opens (creating if necessary) the database at `database_url` and brings its schema up to
    /// date
    pub fn open(database_url: &str) -> Result<Self, TournamentError> {
        let mut conn = establish(database_url)?;
        run_migrations(&mut conn).map_err(|e| TournamentError::MigrationError(e.to_string()))?;
        log::debug!("Opened tournament database at {database_url}");
        Ok(Self { conn })
    }

    /// a private database that disappears when the store is dropped
    pub fn open_in_memory() -> Result<Self, TournamentError> {
        Self::open(":memory:")
    }

    /// uses `DATABASE_URL` (from the environment or `.env`)
    pub fn from_env() -> Result<Self, TournamentError> {
        Self::open(&CONFIG.database_url)
    }

    pub fn delete_matches(&mut self, tournament_id: i32) -> Result<usize, TournamentError> {
        tournament::delete_matches(tournament_id, &mut self.conn)
    }

    pub fn delete_players(&mut self, tournament_id: i32) -> Result<usize, TournamentError> {
        tournament::delete_players(tournament_id, &mut self.conn)
    }

    pub fn remove_player(
        &mut self,
        player_id: i32,
        tournament_id: i32,
    ) -> Result<bool, TournamentError> {
        tournament::remove_player(player_id, tournament_id, &mut self.conn)
    }

    pub fn count_players(&mut self, tournament_id: i32) -> Result<i64, TournamentError> {
        tournament::count_players(tournament_id, &mut self.conn)
    }

    pub fn register_player<S: Into<String>>(
        &mut self,
        name: S,
        tournament_id: i32,
    ) -> Result<Player, TournamentError> {
        tournament::register_player(name, tournament_id, &mut self.conn)
    }

    pub fn player(&mut self, player_id: i32) -> Result<Option<Player>, TournamentError> {
        Ok(Player::get_by_id(player_id, &mut self.conn)?)
    }

    pub fn player_standings(&mut self, tournament_id: i32) -> Result<Vec<Standing>, TournamentError> {
        tournament::player_standings(tournament_id, &mut self.conn)
    }

    pub fn report_match(
        &mut self,
        winner_id: i32,
        loser_id: i32,
        tournament_id: i32,
        draw: bool,
    ) -> Result<(), TournamentError> {
        tournament::report_match(winner_id, loser_id, tournament_id, draw, &mut self.conn)
    }

    pub fn matches(&mut self, tournament_id: i32) -> Result<Vec<Match>, TournamentError> {
        tournament::matches(tournament_id, &mut self.conn)
    }

    pub fn bye(&mut self, tournament_id: i32) -> Result<Option<AssignedBye>, TournamentError> {
        tournament::current_bye(tournament_id, &mut self.conn)
    }

    pub fn swiss_pairings(&mut self, tournament_id: i32) -> Result<Vec<Pairing>, TournamentError> {
        tournament::swiss_pairings(tournament_id, &mut self.conn)
    }

    pub fn swiss_pairings_avoiding_rematches(
        &mut self,
        tournament_id: i32,
    ) -> Result<Vec<Pairing>, TournamentError> {
        tournament::swiss_pairings_avoiding_rematches(tournament_id, &mut self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::TournamentStore;
    use crate::constants::DEFAULT_TOURNAMENT_ID;

    #[test]
    fn test_player_lookup() -> anyhow::Result<()> {
        let mut store = TournamentStore::open_in_memory()?;
        let p = store.register_player("Twilight Sparkle", DEFAULT_TOURNAMENT_ID)?;
        assert_eq!(Some(p.clone()), store.player(p.id)?);
        assert_eq!(None, store.player(p.id + 1)?);
        Ok(())
    }

    #[test]
    fn test_open_file_database_persists() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!(
            "swiss_tournament_test_{}.sqlite3",
            std::process::id()
        ));
        let url = path.to_string_lossy().to_string();
        {
            let mut store = TournamentStore::open(&url)?;
            store.register_player("Fluttershy", 1)?;
        }
        let mut store = TournamentStore::open(&url)?;
        assert_eq!(1, store.count_players(1)?);
        drop(store);
        std::fs::remove_file(&path).ok();
        Ok(())
    }
}
