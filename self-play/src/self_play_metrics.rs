use mancala::{Player, Score};
use serde::{Deserialize, Serialize};

/// Summary of one finished self-play game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayMetrics {
    score: Score,
    winner: Option<Player>,
    num_moves: usize,
}

impl SelfPlayMetrics {
    pub fn new(score: Score, winner: Option<Player>, num_moves: usize) -> Self {
        Self {
            score,
            winner,
            num_moves,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }
}
