use std::borrow::Borrow;

use anyhow::Result;
use log::{debug, warn};
use mancala::{Player, Score, Stones};
use self_play::{GameEvent, GameLogger};
use serde::Serialize;

use super::{StateKey, ValueStore};

/// Totals gathered while folding event logs into a value table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub wins: [u64; 2],
    pub moves: u64,
    pub games: u64,
    pub discarded: u64,
}

impl BuildSummary {
    pub fn wins(&self, player: Player) -> u64 {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> u64 {
        self.games - self.wins.iter().sum::<u64>()
    }

    pub fn merge(&mut self, other: &BuildSummary) {
        self.wins[0] += other.wins[0];
        self.wins[1] += other.wins[1];
        self.moves += other.moves;
        self.games += other.games;
        self.discarded += other.discarded;
    }
}

/// Folds a stream of events into a value store. Sows are held until their game's `End`, then
/// every held `(player, state, pit)` is credited with the final score differential from A's side.
pub struct TableBuilder<'a, S: ValueStore + ?Sized> {
    store: &'a mut S,
    pending: Vec<(StateKey, usize)>,
    summary: BuildSummary,
}

impl<'a, S: ValueStore + ?Sized> TableBuilder<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            pending: Vec::new(),
            summary: BuildSummary::default(),
        }
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Sow {
                stones,
                player,
                pit,
            } => self.push_sow(stones, *player, *pit),
            GameEvent::End { score, winner } => self.end_game(*score, *winner),
        }
    }

    /// Commits the store once and reports what was folded in. Sows with no closing `End` are
    /// dropped.
    pub fn finish(mut self) -> Result<BuildSummary> {
        if !self.pending.is_empty() {
            warn!(
                "Discarding {} sows that were not followed by an end event",
                self.pending.len()
            );
            self.summary.discarded += self.pending.len() as u64;
            self.pending.clear();
        }

        self.store.commit()?;

        debug!("Built table: {:?}", self.summary);

        Ok(self.summary)
    }

    fn push_sow(&mut self, stones: &Stones, player: Player, pit: usize) {
        self.pending.push((StateKey::new(player, *stones), pit));
    }

    fn end_game(&mut self, score: Score, winner: Option<Player>) {
        if let Some(winner) = winner {
            self.summary.wins[winner.index()] += 1;
        }

        self.summary.moves += self.pending.len() as u64;

        let differential = score.differential();
        for (key, pit) in self.pending.drain(..) {
            let mut entry = self.store.get(&key).cloned().unwrap_or_default();
            entry.entry(pit).or_default().record(differential);
            self.store.put(key, entry);
        }

        self.summary.games += 1;
    }
}

impl<'a, S: ValueStore + ?Sized> GameLogger for TableBuilder<'a, S> {
    fn on_sow(&mut self, stones: &Stones, player: Player, pit: usize) -> Result<()> {
        self.push_sow(stones, player, pit);
        Ok(())
    }

    fn on_end(&mut self, score: Score, winner: Option<Player>) -> Result<()> {
        self.end_game(score, winner);
        Ok(())
    }
}

/// Applies every event to `store` and commits once.
pub fn build_table<S, I>(store: &mut S, events: I) -> Result<BuildSummary>
where
    S: ValueStore + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<GameEvent>,
{
    let mut builder = TableBuilder::new(store);

    for event in events {
        builder.apply(event.borrow());
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, MoveStats};
    use mancala::INITIAL_STONES;

    fn short_game() -> Vec<GameEvent> {
        vec![
            GameEvent::Sow {
                stones: [0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0],
                player: Player::A,
                pit: 4,
            },
            GameEvent::Sow {
                stones: [0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0],
                player: Player::B,
                pit: 7,
            },
            GameEvent::Sow {
                stones: [0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0],
                player: Player::A,
                pit: 5,
            },
            GameEvent::End {
                score: Score(1, 0),
                winner: Some(Player::A),
            },
        ]
    }

    #[test]
    fn test_credits_every_sow_with_differential() {
        let mut store = MemoryStore::new();

        let summary = build_table(&mut store, &short_game()).unwrap();

        assert_eq!(
            summary,
            BuildSummary {
                wins: [1, 0],
                moves: 3,
                games: 1,
                discarded: 0
            }
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.commits(), 1);

        let key = StateKey::new(Player::B, [0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(store.get(&key).unwrap().get(&7), Some(&MoveStats::new(1, 1)));
    }

    #[test]
    fn test_losing_game_records_negative_differential() {
        let mut store = MemoryStore::new();
        let events = vec![
            GameEvent::Sow {
                stones: INITIAL_STONES,
                player: Player::A,
                pit: 2,
            },
            GameEvent::End {
                score: Score(10, 38),
                winner: Some(Player::B),
            },
        ];

        let summary = build_table(&mut store, events).unwrap();

        assert_eq!(summary.wins(Player::B), 1);
        let key = StateKey::new(Player::A, INITIAL_STONES);
        assert_eq!(store.get(&key).unwrap()[&2], MoveStats::new(-28, 1));
    }

    #[test]
    fn test_same_state_accumulates_across_games() {
        let mut store = MemoryStore::new();
        let game = |score: Score| {
            vec![
                GameEvent::Sow {
                    stones: INITIAL_STONES,
                    player: Player::A,
                    pit: 0,
                },
                GameEvent::End {
                    score,
                    winner: score.leader(),
                },
            ]
        };

        let events = [game(Score(30, 18)), game(Score(20, 28)), game(Score(24, 24))].concat();
        let summary = build_table(&mut store, &events).unwrap();

        assert_eq!(summary.games, 3);
        assert_eq!(summary.draws(), 1);
        let key = StateKey::new(Player::A, INITIAL_STONES);
        assert_eq!(store.get(&key).unwrap()[&0], MoveStats::new(4, 3));
    }

    #[test]
    fn test_trailing_sows_are_discarded() {
        let mut store = MemoryStore::new();
        let mut events = short_game();
        events.push(GameEvent::Sow {
            stones: INITIAL_STONES,
            player: Player::A,
            pit: 1,
        });

        let summary = build_table(&mut store, &events).unwrap();

        assert_eq!(summary.discarded, 1);
        assert_eq!(summary.moves, 3);
        assert_eq!(summary.games, 1);
        assert!(!store.contains(&StateKey::new(Player::A, INITIAL_STONES)));
    }

    #[test]
    fn test_builder_is_a_logger() {
        let mut store = MemoryStore::new();
        let mut builder = TableBuilder::new(&mut store);

        for event in short_game() {
            event.replay(&mut builder).unwrap();
        }
        let summary = builder.finish().unwrap();

        assert_eq!(summary.games, 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_input_still_commits() {
        let mut store = MemoryStore::new();

        let summary = build_table(&mut store, Vec::<GameEvent>::new()).unwrap();

        assert_eq!(summary, BuildSummary::default());
        assert_eq!(store.commits(), 1);
    }

    #[test]
    fn test_merge_summaries() {
        let mut total = BuildSummary::default();
        total.merge(&BuildSummary {
            wins: [3, 5],
            moves: 200,
            games: 10,
            discarded: 0,
        });
        total.merge(&BuildSummary {
            wins: [6, 2],
            moves: 180,
            games: 10,
            discarded: 4,
        });

        assert_eq!(total.wins, [9, 7]);
        assert_eq!(total.draws(), 4);
        assert_eq!(total.moves, 380);
        assert_eq!(total.discarded, 4);
    }
}
