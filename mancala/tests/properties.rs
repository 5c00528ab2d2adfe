use mancala::{Board, MancalaError, Player, NUM_PITS};
use proptest::prelude::*;

fn playable_sequence(board: &mut Board, choices: &[usize]) -> Vec<usize> {
    let mut played = vec![];

    for choice in choices {
        if board.is_end() {
            break;
        }

        let (player, moves) = board.valid_moves();
        if moves.is_empty() {
            break;
        }

        let pit = moves[choice % moves.len()];
        board.sow(player, pit).unwrap();
        played.push(pit);
    }

    played
}

/// Walks forward from `pit` the way a sow does and reports where stone `count` lands.
fn expected_last_pit(player: Player, pit: usize, count: u32) -> usize {
    let mut idx = pit;
    let mut remaining = count;

    while remaining > 0 {
        idx = (idx + 1) % NUM_PITS;
        if idx != player.opponent().store() {
            remaining -= 1;
        }
    }

    idx
}

proptest! {
    #[test]
    fn test_stones_are_conserved(
        stones in prop::array::uniform14(0u32..10),
        choices in prop::collection::vec(0usize..6, 0..200)
    ) {
        let mut board = Board::new();
        board.reload(&stones).unwrap();
        let total = board.total_stones();

        let mut played = 0;
        for choice in choices {
            if board.is_end() {
                break;
            }

            let (player, moves) = board.valid_moves();
            let pit = moves[choice % moves.len()];
            board.sow(player, pit).unwrap();
            played += 1;

            prop_assert_eq!(board.total_stones(), total, "after {} sows", played);
        }
    }

    #[test]
    fn test_wrong_turn_never_modifies_board(
        choices in prop::collection::vec(0usize..6, 0..40),
        pit in 0usize..NUM_PITS
    ) {
        let mut board = Board::new();
        playable_sequence(&mut board, &choices);

        let before = board.clone();
        let not_to_move = board.next_player().opponent();
        let err = board.sow(not_to_move, pit).unwrap_err();

        let is_wrong_turn = matches!(err, MancalaError::WrongTurn { .. });
        prop_assert!(is_wrong_turn);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn test_free_move_iff_last_stone_in_own_store(
        choices in prop::collection::vec(0usize..6, 0..60)
    ) {
        let mut board = Board::new();

        for choice in choices {
            if board.is_end() {
                break;
            }

            let (player, moves) = board.valid_moves();
            let pit = moves[choice % moves.len()];
            let count = board.stones()[pit];

            let outcome = board.sow(player, pit).unwrap();
            let last_pit = expected_last_pit(player, pit, count);

            prop_assert_eq!(outcome.last_pit, last_pit);
            prop_assert_eq!(outcome.free_move, last_pit == player.store());
            let expected_next = if outcome.free_move { player } else { player.opponent() };
            prop_assert_eq!(board.next_player(), expected_next);
        }
    }

    #[test]
    fn test_end_iff_a_side_is_empty(stones in prop::array::uniform14(0u32..3)) {
        let mut board = Board::new();
        board.reload(&stones).unwrap();

        let a_empty = stones[0..6].iter().all(|&s| s == 0);
        let b_empty = stones[7..13].iter().all(|&s| s == 0);

        prop_assert_eq!(board.is_end(), a_empty || b_empty);

        if board.is_end() {
            let expected = match stones[6].cmp(&stones[13]) {
                std::cmp::Ordering::Greater => Some(Player::A),
                std::cmp::Ordering::Less => Some(Player::B),
                std::cmp::Ordering::Equal => None,
            };
            prop_assert_eq!(board.winner(), expected);
        } else {
            prop_assert_eq!(board.winner(), None);
        }
    }
}

#[test]
fn test_worked_examples() {
    let mut board = Board::new();

    board.reload(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    board.sow(Player::A, 0).unwrap();
    assert_eq!(board.stones(), &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    board.reload(&[0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    board.sow(Player::A, 4).unwrap();
    assert_eq!(board.stones(), &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0]);
    assert_eq!(board.next_player(), Player::B);

    board.reload(&[0, 0, 0, 0, 0, 0, 10, 1, 1, 1, 1, 1, 1, 20]).unwrap();
    assert!(board.is_end());
    assert_eq!(board.winner(), Some(Player::B));
}
