pub mod assigned_byes;
pub mod matches;
pub mod player;
pub mod standings;

// TODO: should this be a derive macro?
/// creates a function named `save()` that takes a &SqliteConnection
#[macro_export]
macro_rules! save_fn {
    ($table:expr, $output:ty) => {
        pub fn save(&self, cxn: &mut diesel::SqliteConnection) -> diesel::QueryResult<$output> {
            use diesel::RunQueryDsl;
            diesel::insert_into($table).values(self).get_result(cxn)
        }
    };
}

#[macro_export]
macro_rules! delete_fn {
    ($table:expr) => {
        pub fn delete(self, conn: &mut diesel::SqliteConnection) -> diesel::QueryResult<usize> {
            diesel::delete($table.find(self.id)).execute(conn)
        }
    };
}

/// creates a function named `delete_for_tournament()` that removes every row of `$table` scoped
/// to one tournament
#[macro_export]
macro_rules! delete_for_tournament_fn {
    ($table:ident) => {
        pub fn delete_for_tournament(
            tournament_id: i32,
            conn: &mut diesel::SqliteConnection,
        ) -> diesel::QueryResult<usize> {
            use diesel::prelude::*;
            diesel::delete($table::table.filter($table::tournament_id.eq(tournament_id)))
                .execute(conn)
        }
    };
}
