use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use mancala::{Board, Player, Stones, NUM_PITS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies a decision point: the player to move and the board as they see it.
/// Rendered as `A:4,4,4,4,4,4,0,4,4,4,4,4,4,0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StateKey {
    player: Player,
    stones: Stones,
}

impl StateKey {
    pub fn new(player: Player, stones: Stones) -> Self {
        Self { player, stones }
    }

    pub fn from_board(board: &Board) -> Self {
        Self::new(board.next_player(), *board.stones())
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn stones(&self) -> &Stones {
        &self.stones
    }
}

impl Display for StateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.player)?;

        for (i, count) in self.stones.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", count)?;
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("state key {0:?} is missing the player separator")]
    MissingSeparator(String),
    #[error("state key {key:?} has an invalid player")]
    InvalidPlayer { key: String },
    #[error("state key {key:?} has {found} pit counts, expected {}", NUM_PITS)]
    WrongPitCount { key: String, found: usize },
    #[error("state key {key:?} has an invalid pit count {value:?}")]
    InvalidCount { key: String, value: String },
}

impl FromStr for StateKey {
    type Err = KeyParseError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let (player, counts) = key
            .split_once(':')
            .ok_or_else(|| KeyParseError::MissingSeparator(key.to_string()))?;

        let player = player
            .parse::<Player>()
            .map_err(|_| KeyParseError::InvalidPlayer {
                key: key.to_string(),
            })?;

        let counts = counts.split(',').collect::<Vec<_>>();
        if counts.len() != NUM_PITS {
            return Err(KeyParseError::WrongPitCount {
                key: key.to_string(),
                found: counts.len(),
            });
        }

        let mut stones = [0; NUM_PITS];
        for (slot, value) in stones.iter_mut().zip(counts) {
            // u32::from_str accepts a leading '+', which never appears in a rendered key.
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(KeyParseError::InvalidCount {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }

            *slot = value.parse().map_err(|_| KeyParseError::InvalidCount {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        }

        Ok(Self { player, stones })
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for StateKey {
    type Error = KeyParseError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}
