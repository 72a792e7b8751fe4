use crate::schema::matches;
use crate::{delete_for_tournament_fn, save_fn};
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Serialize;

#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub tournament_id: i32,
}

impl Match {
    /// every recorded match in the tournament, oldest first
    pub fn for_tournament(
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Self>, diesel::result::Error> {
        matches::table
            .filter(matches::tournament_id.eq(tournament_id))
            .order(matches::id.asc())
            .load(conn)
    }

    /// true if these two have already played each other in this tournament, in either order
    pub fn exists_between(
        player_a: i32,
        player_b: i32,
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<bool, diesel::result::Error> {
        let n: i64 = matches::table
            .filter(matches::tournament_id.eq(tournament_id))
            .filter(
                matches::winner_id
                    .eq(player_a)
                    .and(matches::loser_id.eq(player_b))
                    .or(matches::winner_id.eq(player_b).and(matches::loser_id.eq(player_a))),
            )
            .count()
            .get_result(conn)?;
        Ok(n > 0)
    }

    /// both participants, winner first
    pub fn player_ids(&self) -> (i32, i32) {
        (self.winner_id, self.loser_id)
    }

    delete_for_tournament_fn!(matches);
}

#[derive(Insertable, Debug)]
#[diesel(table_name=matches)]
pub struct NewMatch {
    pub winner_id: i32,
    pub loser_id: i32,
    pub tournament_id: i32,
}

impl NewMatch {
    pub fn new(winner_id: i32, loser_id: i32, tournament_id: i32) -> Self {
        Self {
            winner_id,
            loser_id,
            tournament_id,
        }
    }
    save_fn!(matches::table, Match);
}
