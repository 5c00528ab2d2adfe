use mancala::Board;
use rand::seq::SliceRandom;
use rand::Rng;
use self_play::MoveSource;

use super::{MoveTable, StateKey, ValueStore};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// The observed move with the highest average differential.
    Ranked { pit: usize, average: f64 },
    /// Nothing was observed for this state; chosen uniformly.
    Random { pit: usize },
}

impl Decision {
    pub fn pit(&self) -> usize {
        match self {
            Decision::Ranked { pit, .. } | Decision::Random { pit } => *pit,
        }
    }
}

/// Chooses moves from a value table. Averages are from A's point of view, so the policy is meant
/// to drive player A.
pub struct ValueLookupPolicy<'a, S: ?Sized, R> {
    store: &'a S,
    rng: R,
}

impl<'a, S: ValueStore + ?Sized, R: Rng> ValueLookupPolicy<'a, S, R> {
    pub fn new(store: &'a S, rng: R) -> Self {
        Self { store, rng }
    }

    pub fn decide(&mut self, board: &Board) -> Option<Decision> {
        let (player, candidates) = board.valid_moves();
        if candidates.is_empty() {
            return None;
        }

        let key = StateKey::new(player, *board.stones());
        let ranked = self
            .store
            .get(&key)
            .and_then(|table| best_observed(&candidates, table));

        match ranked {
            Some((pit, average)) => Some(Decision::Ranked { pit, average }),
            None => candidates
                .choose(&mut self.rng)
                .map(|&pit| Decision::Random { pit }),
        }
    }
}

impl<'a, S: ValueStore + ?Sized, R: Rng> MoveSource for ValueLookupPolicy<'a, S, R> {
    fn next_move(&mut self, board: &Board) -> Option<usize> {
        self.decide(board).map(|decision| decision.pit())
    }
}

/// The first candidate with the strictly highest average. Candidates with no observations are
/// skipped.
fn best_observed(candidates: &[usize], table: &MoveTable) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for &pit in candidates {
        let average = match table.get(&pit).and_then(|stats| stats.average()) {
            Some(average) => average,
            None => continue,
        };

        if best.map_or(true, |(_, top)| average > top) {
            best = Some((pit, average));
        }
    }

    best
}
