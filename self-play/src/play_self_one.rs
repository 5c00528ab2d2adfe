use anyhow::Result;
use log::debug;
use mancala::Board;
use thiserror::Error;

use super::{GameLogger, MoveSource, NullLogger, SelfPlayMetrics};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelfPlayError {
    #[error("move source ran out of moves after {move_number} moves before the game ended")]
    MoveSourceExhausted { move_number: usize },
}

/// A single game session: one board, one logger.
pub struct Play<L> {
    board: Board,
    logger: L,
}

impl Default for Play<NullLogger> {
    fn default() -> Self {
        Self::new()
    }
}

impl Play<NullLogger> {
    pub fn new() -> Self {
        Self::with_logger(NullLogger)
    }
}

impl<L: GameLogger> Play<L> {
    pub fn with_logger(logger: L) -> Self {
        Self {
            board: Board::new(),
            logger,
        }
    }

    /// Starts the game from `stones` instead of the opening position.
    pub fn with_stones(mut self, stones: &[u32]) -> Result<Self> {
        self.board.reload(stones)?;
        Ok(self)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn into_logger(self) -> L {
        self.logger
    }

    /// Plays until the board reports the end of the game. Each move is logged with the board as
    /// it was before the sow; rule violations by the move source are returned as errors.
    pub fn play<M: MoveSource + ?Sized>(&mut self, moves: &mut M) -> Result<SelfPlayMetrics> {
        let mut move_number = 0;

        while !self.board.is_end() {
            let player = self.board.next_player();
            let pit = moves
                .next_move(&self.board)
                .ok_or(SelfPlayError::MoveSourceExhausted { move_number })?;

            self.logger.on_sow(self.board.stones(), player, pit)?;
            self.board.sow(player, pit)?;
            move_number += 1;
        }

        let score = self.board.score();
        let winner = self.board.winner();

        debug!(
            "Game over after {} moves, {}, winner: {:?}{}",
            move_number, score, winner, self.board
        );

        self.logger.on_end(score, winner)?;

        Ok(SelfPlayMetrics::new(score, winner, move_number))
    }
}
