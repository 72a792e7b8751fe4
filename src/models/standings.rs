use crate::schema::player_standings;
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Serialize;

/// One row of the `player_standings` view. A held bye counts as one win and one match.
#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub id: i32,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}

impl Standing {
    /// every player in the tournament, most wins first; equal records stay in registration order
    pub fn for_tournament(
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Self>, diesel::result::Error> {
        player_standings::table
            .filter(player_standings::tournament_id.eq(tournament_id))
            .select((
                player_standings::id,
                player_standings::name,
                player_standings::wins,
                player_standings::matches,
            ))
            .order((player_standings::wins.desc(), player_standings::id.asc()))
            .load(conn)
    }

    pub fn losses(&self) -> i64 {
        self.matches - self.wins
    }
}

impl From<Standing> for (i32, String, i64, i64) {
    fn from(s: Standing) -> Self {
        (s.id, s.name, s.wins, s.matches)
    }
}
