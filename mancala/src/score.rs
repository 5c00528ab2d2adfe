use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::Player;

/// Stones in each player's store, `(A, B)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score(pub u32, pub u32);

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::A => self.0,
            Player::B => self.1,
        }
    }

    /// Signed difference from A's point of view.
    pub fn differential(&self) -> i64 {
        i64::from(self.0) - i64::from(self.1)
    }

    pub fn leader(&self) -> Option<Player> {
        match self.0.cmp(&self.1) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Score({}, {})", self.0, self.1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(*player),
            GameResult::Draw => None,
        }
    }
}
