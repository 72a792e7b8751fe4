use crate::schema::assigned_byes;
use crate::{delete_for_tournament_fn, save_fn};
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Serialize;

/// A free win (and match) credited to one player while the tournament has an odd headcount.
/// There's at most one per tournament.
#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedBye {
    pub tournament_id: i32,
    pub player_id: i32,
}

impl AssignedBye {
    pub fn get_for_tournament(
        tournament_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Self>, diesel::result::Error> {
        assigned_byes::table.find(tournament_id).first(conn).optional()
    }

    delete_for_tournament_fn!(assigned_byes);
}

#[derive(Insertable, Debug)]
#[diesel(table_name=assigned_byes)]
pub struct NewAssignedBye {
    pub tournament_id: i32,
    pub player_id: i32,
}

impl NewAssignedBye {
    pub fn new(tournament_id: i32, player_id: i32) -> Self {
        Self {
            tournament_id,
            player_id,
        }
    }
    save_fn!(assigned_byes::table, AssignedBye);
}

#[cfg(test)]
mod tests {
    use super::{AssignedBye, NewAssignedBye};
    use crate::models::player::NewPlayer;
    use crate::test_utils::setup_db;

    #[test]
    fn test_one_bye_per_tournament() -> anyhow::Result<()> {
        let mut db = setup_db()?;
        let a = NewPlayer::new("a", 1).save(&mut db)?;
        let b = NewPlayer::new("b", 1).save(&mut db)?;
        NewAssignedBye::new(1, a.id).save(&mut db)?;
        assert!(NewAssignedBye::new(1, b.id).save(&mut db).is_err());
        assert_eq!(
            Some(AssignedBye {
                tournament_id: 1,
                player_id: a.id
            }),
            AssignedBye::get_for_tournament(1, &mut db)?
        );
        Ok(())
    }

    #[test]
    fn test_bye_removed_with_player() -> anyhow::Result<()> {
        let mut db = setup_db()?;
        let a = NewPlayer::new("a", 1).save(&mut db)?;
        NewAssignedBye::new(1, a.id).save(&mut db)?;
        a.delete(&mut db)?;
        assert_eq!(None, AssignedBye::get_for_tournament(1, &mut db)?);
        Ok(())
    }
}
