use std::collections::VecDeque;

use mancala::{Board, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Supplies the pit to sow for the player to move. Returning `None` means the source has run
/// dry; the driver treats that as fatal for the current game.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board) -> Option<usize>;
}

impl<M: MoveSource + ?Sized> MoveSource for &mut M {
    fn next_move(&mut self, board: &Board) -> Option<usize> {
        (**self).next_move(board)
    }
}

impl<M: MoveSource + ?Sized> MoveSource for Box<M> {
    fn next_move(&mut self, board: &Board) -> Option<usize> {
        (**self).next_move(board)
    }
}

/// A fixed list of pits played in order, regardless of the board.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<usize>,
}

impl ScriptedMoves {
    pub fn new<I: IntoIterator<Item = usize>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _board: &Board) -> Option<usize> {
        self.moves.pop_front()
    }
}

/// Picks uniformly among the legal pits of the player to move. Never runs dry while a game is
/// in progress.
#[derive(Clone, Debug)]
pub struct RandomMoves<R> {
    rng: R,
}

impl<R: Rng> RandomMoves<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self, board: &Board) -> Option<usize> {
        let (_, candidates) = board.valid_moves();
        candidates.choose(&mut self.rng).copied()
    }
}

/// Routes each request to the source driving the player to move.
#[derive(Clone, Debug)]
pub struct PlayerMoves<MA, MB> {
    a: MA,
    b: MB,
}

impl<MA, MB> PlayerMoves<MA, MB> {
    pub fn new(a: MA, b: MB) -> Self {
        Self { a, b }
    }
}

impl<MA: MoveSource, MB: MoveSource> MoveSource for PlayerMoves<MA, MB> {
    fn next_move(&mut self, board: &Board) -> Option<usize> {
        match board.next_player() {
            Player::A => self.a.next_move(board),
            Player::B => self.b.next_move(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_moves_run_dry() {
        let board = Board::new();
        let mut moves = ScriptedMoves::new(vec![4, 7]);

        assert_eq!(moves.next_move(&board), Some(4));
        assert_eq!(moves.next_move(&board), Some(7));
        assert_eq!(moves.next_move(&board), None);
        assert_eq!(moves.remaining(), 0);
    }

    #[test]
    fn test_random_moves_are_always_legal() {
        let mut board = Board::new();
        board
            .reload(&[0, 3, 0, 0, 2, 0, 0, 1, 1, 1, 1, 1, 1, 0])
            .unwrap();
        let mut moves = RandomMoves::new(StdRng::seed_from_u64(3));

        for _ in 0..50 {
            let pit = moves.next_move(&board).unwrap();
            assert!(pit == 1 || pit == 4);
        }
    }

    #[test]
    fn test_random_moves_cover_every_candidate() {
        let board = Board::new();
        let mut moves = RandomMoves::new(StdRng::seed_from_u64(9));
        let mut seen = [false; 6];

        for _ in 0..500 {
            seen[moves.next_move(&board).unwrap()] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_random_moves_without_candidates() {
        let mut board = Board::new();
        board.reload(&[0; 14]).unwrap();
        let mut moves = RandomMoves::new(StdRng::seed_from_u64(1));

        assert_eq!(moves.next_move(&board), None);
    }

    #[test]
    fn test_player_moves_dispatch_on_player_to_move() {
        let mut board = Board::new();
        let mut moves = PlayerMoves::new(ScriptedMoves::new(vec![0]), ScriptedMoves::new(vec![9]));

        assert_eq!(moves.next_move(&board), Some(0));
        board.switch_player();
        assert_eq!(moves.next_move(&board), Some(9));
        assert_eq!(moves.next_move(&board), None);
    }
}
