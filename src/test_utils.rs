use diesel::SqliteConnection;

use crate::db::{establish, run_migrations};

pub fn setup_db() -> Result<SqliteConnection, anyhow::Error> {
    let mut db = establish(":memory:")?;
    run_migrations(&mut db).map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::setup_db;
    use crate::models::assigned_byes::NewAssignedBye;
    use crate::models::matches::NewMatch;
    use crate::models::player::NewPlayer;
    use crate::schema::{assigned_byes, matches, player_standings};
    use diesel::prelude::*;

    #[test]
    fn test_fresh_database_has_empty_view() -> anyhow::Result<()> {
        let mut db = setup_db()?;
        let rows = player_standings::table
            .count()
            .get_result::<i64>(&mut db)?;
        assert_eq!(0, rows);
        Ok(())
    }

    #[test]
    fn test_deleting_player_cascades() -> anyhow::Result<()> {
        let mut db = setup_db()?;
        let a = NewPlayer::new("a", 1).save(&mut db)?;
        let b = NewPlayer::new("b", 1).save(&mut db)?;
        NewMatch::new(a.id, b.id, 1).save(&mut db)?;
        NewAssignedBye::new(1, a.id).save(&mut db)?;

        a.delete(&mut db)?;
        assert_eq!(0, matches::table.count().get_result::<i64>(&mut db)?);
        assert_eq!(0, assigned_byes::table.count().get_result::<i64>(&mut db)?);
        let rows = player_standings::table
            .select((player_standings::id, player_standings::wins, player_standings::matches))
            .load::<(i32, i64, i64)>(&mut db)?;
        assert_eq!(vec![(b.id, 0, 0)], rows);
        Ok(())
    }

    #[test]
    fn test_foreign_keys_enforced() -> anyhow::Result<()> {
        let mut db = setup_db()?;
        let a = NewPlayer::new("a", 1).save(&mut db)?;
        assert!(NewMatch::new(a.id, a.id + 100, 1).save(&mut db).is_err());
        assert!(NewAssignedBye::new(1, a.id + 100).save(&mut db).is_err());
        Ok(())
    }
}
