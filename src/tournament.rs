//! Tournament operations over a single connection.
//!
//! Every function that writes runs inside its own transaction, so a failure part way through
//! (a rule violation, or the database falling over) leaves nothing behind.

use crate::models::assigned_byes::{AssignedBye, NewAssignedBye};
use crate::models::matches::{Match, NewMatch};
use crate::models::player::{NewPlayer, Player};
use crate::models::standings::Standing;
use crate::pairings::{adjacent_pairings, pair_key, pairings_avoiding_rematches, Pairing};
use crate::{RuleViolation, TournamentError};
use diesel::{Connection, SqliteConnection};
use log::{debug, info, warn};
use std::collections::HashSet;

pub fn delete_matches(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<usize, TournamentError> {
    let deleted = Match::delete_for_tournament(tournament_id, conn)?;
    info!("Deleted {deleted} match(es) from tournament {tournament_id}");
    Ok(deleted)
}

/// removes every player in the tournament, along with their matches and the bye
pub fn delete_players(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<usize, TournamentError> {
    conn.transaction(|c| {
        let deleted = Player::delete_for_tournament(tournament_id, c)?;
        reconcile_bye(tournament_id, c)?;
        info!("Deleted {deleted} player(s) from tournament {tournament_id}");
        Ok(deleted)
    })
}

/// withdraws one player. their matches go with them, which changes their opponents' records.
/// returns false if there was no such player in this tournament
pub fn remove_player(
    player_id: i32,
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<bool, TournamentError> {
    conn.transaction(|c| {
        let player = match Player::get_by_id(player_id, c)? {
            Some(p) if p.tournament_id == tournament_id => p,
            _ => {
                return Ok(false);
            }
        };
        info!(
            "Removing player {} ({}) from tournament {tournament_id}",
            player.name, player.id
        );
        player.delete(c)?;
        reconcile_bye(tournament_id, c)?;
        Ok(true)
    })
}

pub fn count_players(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<i64, TournamentError> {
    Ok(Player::count_for_tournament(tournament_id, conn)?)
}

/// adds a player (names need not be unique) and re-evaluates the bye
pub fn register_player<S: Into<String>>(
    name: S,
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Player, TournamentError> {
    let new_player = NewPlayer::new(name, tournament_id);
    conn.transaction(|c| {
        let player = new_player.save(c)?;
        reconcile_bye(tournament_id, c)?;
        info!(
            "Registered player {} ({}) for tournament {tournament_id}",
            player.name, player.id
        );
        Ok(player)
    })
}

pub fn player_standings(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Vec<Standing>, TournamentError> {
    let standings = Standing::for_tournament(tournament_id, conn)?;
    debug!("Standings for tournament {tournament_id}: {standings:?}");
    Ok(standings)
}

/// Makes the bye match the current headcount: with an odd number of players the lowest id
/// holds it, otherwise nobody does. Any previous bye row is replaced.
///
/// Callers that change membership should run this in the same transaction as the change.
pub fn reconcile_bye(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Option<AssignedBye>, diesel::result::Error> {
    let previous = AssignedBye::get_for_tournament(tournament_id, conn)?;
    AssignedBye::delete_for_tournament(tournament_id, conn)?;

    let bye = if Player::count_for_tournament(tournament_id, conn)? % 2 == 0 {
        None
    } else {
        match Player::lowest_id_for_tournament(tournament_id, conn)? {
            Some(player_id) => Some(NewAssignedBye::new(tournament_id, player_id).save(conn)?),
            None => None,
        }
    };

    let before = previous.map(|b| b.player_id);
    let after = bye.as_ref().map(|b| b.player_id);
    if before != after {
        info!("Bye for tournament {tournament_id} changed from {before:?} to {after:?}");
    }
    Ok(bye)
}

pub fn current_bye(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Option<AssignedBye>, TournamentError> {
    Ok(AssignedBye::get_for_tournament(tournament_id, conn)?)
}

fn validate_match(
    winner_id: i32,
    loser_id: i32,
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<(), TournamentError> {
    if winner_id == loser_id {
        return Err(RuleViolation::SelfPlay {
            player_id: winner_id,
        }
        .into());
    }
    let registered = Player::get_in_tournament(&[winner_id, loser_id], tournament_id, conn)?;
    for player_id in [winner_id, loser_id] {
        if !registered.iter().any(|p| p.id == player_id) {
            return Err(RuleViolation::PlayerNotInTournament {
                player_id,
                tournament_id,
            }
            .into());
        }
    }
    if Match::exists_between(winner_id, loser_id, tournament_id, conn)? {
        return Err(RuleViolation::Rematch {
            player_a: winner_id,
            player_b: loser_id,
        }
        .into());
    }
    Ok(())
}

/// Records the result of one match.
///
/// Both players must be registered for `tournament_id`, must be different players, and must not
/// have met before in this tournament. A draw is a no-op: nothing is checked or recorded.
pub fn report_match(
    winner_id: i32,
    loser_id: i32,
    tournament_id: i32,
    draw: bool,
    conn: &mut SqliteConnection,
) -> Result<(), TournamentError> {
    if draw {
        info!("Draw between {winner_id} and {loser_id} in tournament {tournament_id}, nothing recorded");
        return Ok(());
    }
    conn.transaction::<_, TournamentError, _>(|c| {
        validate_match(winner_id, loser_id, tournament_id, c)?;
        let m = NewMatch::new(winner_id, loser_id, tournament_id).save(c)?;
        info!(
            "Recorded match {}: {winner_id} beat {loser_id} in tournament {tournament_id}",
            m.id
        );
        Ok(())
    })
    .map_err(|e| {
        if let Some(v) = e.rule_violation() {
            warn!("Rejected match report in tournament {tournament_id}: {v}");
        }
        e
    })
}

pub fn matches(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Vec<Match>, TournamentError> {
    Ok(Match::for_tournament(tournament_id, conn)?)
}

/// Next round's pairings: walks the standings two at a time. With an odd field the lowest ranked
/// player is left out. Players who have already met can be paired again; see
/// [swiss_pairings_avoiding_rematches] for the alternative.
pub fn swiss_pairings(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Vec<Pairing>, TournamentError> {
    let standings = Standing::for_tournament(tournament_id, conn)?;
    let pairings = adjacent_pairings(&standings);
    debug!("Pairings for tournament {tournament_id}: {pairings:?}");
    Ok(pairings)
}

pub fn swiss_pairings_avoiding_rematches(
    tournament_id: i32,
    conn: &mut SqliteConnection,
) -> Result<Vec<Pairing>, TournamentError> {
    let standings = Standing::for_tournament(tournament_id, conn)?;
    let played = Match::for_tournament(tournament_id, conn)?
        .iter()
        .map(|m| {
            let (a, b) = m.player_ids();
            pair_key(a, b)
        })
        .collect::<HashSet<_>>();
    let pairings = pairings_avoiding_rematches(&standings, &played);
    debug!("Rematch-free pairings for tournament {tournament_id}: {pairings:?}");
    Ok(pairings)
}
