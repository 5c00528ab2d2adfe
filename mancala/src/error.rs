use thiserror::Error;

use crate::Player;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MancalaError {
    #[error("it is player {expected}'s turn, not player {actual}'s")]
    WrongTurn { expected: Player, actual: Player },
    #[error("player {player} cannot sow from pit {pit}")]
    InvalidMove { player: Player, pit: usize },
    #[error("invalid board configuration: {0}")]
    InvalidConfiguration(String),
}
