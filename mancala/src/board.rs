use std::fmt::{self, Display, Formatter};

use crate::{
    GameResult, MancalaError, Player, Score, Stones, INITIAL_STONES, NUM_PITS, STORE_A, STORE_B,
};

/// Where the last stone of a sow landed and whether the mover keeps the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SowOutcome {
    pub last_pit: usize,
    pub free_move: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    stones: Stones,
    next_player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            stones: INITIAL_STONES,
            next_player: Player::A,
        }
    }

    /// Overwrites every pit and hands the move back to player A.
    pub fn reload(&mut self, stones: &[u32]) -> Result<(), MancalaError> {
        let stones: Stones = stones.try_into().map_err(|_| {
            MancalaError::InvalidConfiguration(format!(
                "expected {} pit counts, got {}",
                NUM_PITS,
                stones.len()
            ))
        })?;

        // Sowing conserves the total, so bounding it keeps every pit and sum within u32.
        let total = stones.iter().map(|&s| u64::from(s)).sum::<u64>();
        if total > u64::from(u32::MAX) {
            return Err(MancalaError::InvalidConfiguration(format!(
                "{} stones exceed the maximum of {}",
                total,
                u32::MAX
            )));
        }

        self.stones = stones;
        self.next_player = Player::A;

        Ok(())
    }

    pub fn reset(&mut self) {
        self.stones = INITIAL_STONES;
        self.next_player = Player::A;
    }

    pub fn stones(&self) -> &Stones {
        &self.stones
    }

    pub fn total_stones(&self) -> u32 {
        self.stones.iter().sum()
    }

    pub fn players(&self) -> [Player; 2] {
        Player::ALL
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn is_valid_move(&self, player: Player, pit: usize) -> bool {
        pit < NUM_PITS
            && !self.is_store(pit, None)
            && self.is_side(pit, player)
            && self.stones[pit] > 0
    }

    pub fn sow(&mut self, player: Player, pit: usize) -> Result<SowOutcome, MancalaError> {
        if player != self.next_player {
            return Err(MancalaError::WrongTurn {
                expected: self.next_player,
                actual: player,
            });
        }

        if !self.is_valid_move(player, pit) {
            return Err(MancalaError::InvalidMove { player, pit });
        }

        let mut grabbed = std::mem::take(&mut self.stones[pit]);
        let mut idx = pit;

        while grabbed > 0 {
            idx = (idx + 1) % NUM_PITS;

            if self.is_store(idx, Some(player.opponent())) {
                continue;
            }

            self.stones[idx] += 1;
            grabbed -= 1;
        }

        let free_move = self.is_store(idx, Some(player));
        if !free_move {
            self.switch_player();
        }

        Ok(SowOutcome {
            last_pit: idx,
            free_move,
        })
    }

    pub fn switch_player(&mut self) {
        self.next_player = self.next_player.opponent();
    }

    /// Whether `pit` is a store, optionally restricted to the store owned by `player`.
    pub fn is_store(&self, pit: usize, player: Option<Player>) -> bool {
        match (self.whose_store(pit), player) {
            (Some(owner), Some(player)) => owner == player,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn whose_store(&self, pit: usize) -> Option<Player> {
        match pit {
            STORE_A => Some(Player::A),
            STORE_B => Some(Player::B),
            _ => None,
        }
    }

    /// A player's side spans their six pits and their store.
    pub fn is_side(&self, pit: usize, player: Player) -> bool {
        player.pits().contains(&pit) || pit == player.store()
    }

    pub fn score(&self) -> Score {
        Score(self.stones[STORE_A], self.stones[STORE_B])
    }

    pub fn is_end(&self) -> bool {
        Player::ALL
            .iter()
            .any(|player| self.stones[player.pits()].iter().all(|&s| s == 0))
    }

    pub fn result(&self) -> Option<GameResult> {
        if !self.is_end() {
            return None;
        }

        Some(match self.score().leader() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    /// The winner of a finished game. `None` while the game is running or on a tie.
    pub fn winner(&self) -> Option<Player> {
        self.result().and_then(|result| result.winner())
    }

    pub fn valid_moves(&self) -> (Player, Vec<usize>) {
        let player = self.next_player;
        let moves = player
            .pits()
            .filter(|&pit| self.is_valid_move(player, pit))
            .collect();

        (player, moves)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;

        write!(f, "        ")?;
        for pit in Player::B.pits().rev() {
            write!(f, "{:>4}", self.stones[pit])?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "    {:>4}{}{:>4}",
            self.stones[STORE_B],
            " ".repeat(24),
            self.stones[STORE_A]
        )?;

        write!(f, "        ")?;
        for pit in Player::A.pits() {
            write!(f, "{:>4}", self.stones[pit])?;
        }
        writeln!(f)?;

        writeln!(f, "    Next: {}", self.next_player)
    }
}
