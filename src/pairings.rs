use crate::models::standings::Standing;
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;

/// Two players meeting in the next round. Player 1 is the higher ranked of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub player_1_id: i32,
    pub player_1_name: String,
    pub player_2_id: i32,
    pub player_2_name: String,
}

impl Pairing {
    fn new(p1: &Standing, p2: &Standing) -> Self {
        Self {
            player_1_id: p1.id,
            player_1_name: p1.name.clone(),
            player_2_id: p2.id,
            player_2_name: p2.name.clone(),
        }
    }

    pub fn player_ids(&self) -> (i32, i32) {
        (self.player_1_id, self.player_2_id)
    }
}

impl From<Pairing> for (i32, String, i32, String) {
    fn from(p: Pairing) -> Self {
        (p.player_1_id, p.player_1_name, p.player_2_id, p.player_2_name)
    }
}

/// order-independent key for "these two have met"
pub(crate) fn pair_key(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// pairs 1st with 2nd, 3rd with 4th, and so on. `standings` must already be ranked.
/// with an odd count the last player sits out.
/// this does *not* look at who has already played whom
pub fn adjacent_pairings(standings: &[Standing]) -> Vec<Pairing> {
    standings
        .iter()
        .tuples()
        .map(|(p1, p2)| Pairing::new(p1, p2))
        .collect()
}

/// upper bound on candidate pairs tried before [pairings_avoiding_rematches] gives up
const MAX_SEARCH_STEPS: usize = 100_000;

/// like [adjacent_pairings], but each player is matched with the closest-ranked opponent they
/// haven't played yet, backtracking when a greedy choice strands someone. If no rematch-free
/// pairing exists (or none turns up within [MAX_SEARCH_STEPS]), falls back to
/// [adjacent_pairings].
///
/// `played` holds [pair_key]s of every match already recorded
pub fn pairings_avoiding_rematches(
    standings: &[Standing],
    played: &HashSet<(i32, i32)>,
) -> Vec<Pairing> {
    let pairable = standings.len() - standings.len() % 2;
    let mut search = PairingSearch::new(standings, played, pairable);
    let mut pairs = Vec::with_capacity(pairable / 2);
    if search.run(&mut pairs) {
        return pairs
            .into_iter()
            .map(|(i1, i2)| Pairing::new(&standings[i1], &standings[i2]))
            .collect();
    }
    if search.gave_up() {
        warn!("Gave up looking for a rematch-free pairing after {MAX_SEARCH_STEPS} attempts; falling back to adjacent pairings");
    } else {
        warn!("No rematch-free pairing exists; falling back to adjacent pairings");
    }
    adjacent_pairings(standings)
}

/// depth-first search over standings indices. the highest ranked unpaired player always picks
/// next, so a set of paired players fully describes a search state; states that can't be
/// completed are remembered in `failed`
struct PairingSearch<'a> {
    standings: &'a [Standing],
    played: &'a HashSet<(i32, i32)>,
    paired: Vec<bool>,
    failed: HashSet<Vec<bool>>,
    steps: usize,
}

impl<'a> PairingSearch<'a> {
    fn new(standings: &'a [Standing], played: &'a HashSet<(i32, i32)>, pairable: usize) -> Self {
        Self {
            standings,
            played,
            paired: vec![false; pairable],
            failed: Default::default(),
            steps: 0,
        }
    }

    fn gave_up(&self) -> bool {
        self.steps >= MAX_SEARCH_STEPS
    }

    fn have_played(&self, i1: usize, i2: usize) -> bool {
        self.played
            .contains(&pair_key(self.standings[i1].id, self.standings[i2].id))
    }

    /// pushes pairs onto `pairs` and returns true if everyone left could be paired
    fn run(&mut self, pairs: &mut Vec<(usize, usize)>) -> bool {
        let first = match self.paired.iter().position(|p| !p) {
            Some(i) => i,
            None => {
                return true;
            }
        };
        if self.failed.contains(&self.paired) {
            return false;
        }
        self.paired[first] = true;
        for candidate in first + 1..self.paired.len() {
            if self.paired[candidate] || self.have_played(first, candidate) {
                continue;
            }
            if self.gave_up() {
                break;
            }
            self.steps += 1;
            self.paired[candidate] = true;
            pairs.push((first, candidate));
            if self.run(pairs) {
                return true;
            }
            pairs.pop();
            self.paired[candidate] = false;
            debug!(
                "Pairing {} with {} leaves the rest unpairable, trying the next opponent",
                self.standings[first].id, self.standings[candidate].id
            );
        }
        self.paired[first] = false;
        if !self.gave_up() {
            self.failed.insert(self.paired.clone());
        }
        false
    }
}
