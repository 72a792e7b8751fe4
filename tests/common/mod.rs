use swiss_tournament::TournamentStore;

pub fn start_store() -> Result<TournamentStore, anyhow::Error> {
    Ok(TournamentStore::open_in_memory()?)
}

/// registers `names` in order and returns their ids
pub fn register_all(
    store: &mut TournamentStore,
    names: &[&str],
    tournament_id: i32,
) -> Result<Vec<i32>, anyhow::Error> {
    let mut ids = vec![];
    for name in names {
        ids.push(store.register_player(*name, tournament_id)?.id);
    }
    Ok(ids)
}
