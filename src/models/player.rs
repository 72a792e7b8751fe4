use crate::schema::players;
use crate::{delete_fn, delete_for_tournament_fn, save_fn};
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Serialize;

#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub tournament_id: i32,
}

impl Player {
    pub fn get_by_id(
        id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Self>, diesel::result::Error> {
        players::table.find(id).first(conn).optional()
    }

    /// the subset of `ids` that are registered for `tournament_id`
    pub fn get_in_tournament(
        ids: &[i32],
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Self>, diesel::result::Error> {
        players::table
            .filter(players::id.eq_any(ids))
            .filter(players::tournament_id.eq(tournament_id))
            .load(conn)
    }

    pub fn count_for_tournament(
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<i64, diesel::result::Error> {
        players::table
            .filter(players::tournament_id.eq(tournament_id))
            .count()
            .get_result(conn)
    }

    /// lowest id wins ties for anything that needs a deterministic pick (e.g. the bye)
    pub fn lowest_id_for_tournament(
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Option<i32>, diesel::result::Error> {
        players::table
            .filter(players::tournament_id.eq(tournament_id))
            .select(players::id)
            .order(players::id.asc())
            .first(conn)
            .optional()
    }

    // their matches and bye go with them
    delete_fn!(players::table);

    delete_for_tournament_fn!(players);
}

#[derive(Insertable, Debug)]
#[diesel(table_name=players)]
pub struct NewPlayer {
    pub name: String,
    pub tournament_id: i32,
}

impl NewPlayer {
    pub fn new<S: Into<String>>(name: S, tournament_id: i32) -> Self {
        Self {
            name: name.into(),
            tournament_id,
        }
    }
    save_fn!(players::table, Player);
}
