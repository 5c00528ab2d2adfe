use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

use crate::{PITS_PER_SIDE, STORE_A, STORE_B};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn store(self) -> usize {
        match self {
            Player::A => STORE_A,
            Player::B => STORE_B,
        }
    }

    /// The six playing pits on this player's side, excluding the store.
    pub fn pits(self) -> Range<usize> {
        let first = self.store() - PITS_PER_SIDE;
        first..self.store()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected player A or B, got {0:?}")]
pub struct ParsePlayerError(pub String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Player::A),
            "B" => Ok(Player::B),
            _ => Err(ParsePlayerError(s.to_string())),
        }
    }
}
