use std::fmt::{self, Display, Formatter};
use std::time::Instant;

use anyhow::Result;
use common::{create_rng, div_or_zero, fork_rng};
use log::info;
use mancala::Player;
use self_play::{play_cycles, NullLogger, PlayerMoves, RandomMoves, SelfPlayMetrics};
use serde::{Deserialize, Serialize};
use value_table::{ValueLookupPolicy, ValueStore};

use super::ArenaOptions;

/// Outcome of a match from player A's side: the value-lookup policy against uniform random.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl MatchResult {
    pub fn add_game(&mut self, winner: Option<Player>) {
        self.games += 1;
        match winner {
            Some(Player::A) => self.wins += 1,
            Some(Player::B) => self.losses += 1,
            None => self.draws += 1,
        }
    }

    pub fn win_ratio(&self) -> f64 {
        div_or_zero(self.wins as f64, self.games as f64)
    }
}

impl<'a> FromIterator<&'a SelfPlayMetrics> for MatchResult {
    fn from_iter<I: IntoIterator<Item = &'a SelfPlayMetrics>>(iter: I) -> Self {
        let mut result = MatchResult::default();
        for metrics in iter {
            result.add_game(metrics.winner());
        }
        result
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wins, {} losses, {} draws after {} matches.  Winning ratio is {}",
            self.wins,
            self.losses,
            self.draws,
            self.games,
            self.win_ratio()
        )
    }
}

/// Plays `num_games` games with player A driven by the value table and player B choosing
/// uniformly at random.
pub fn play_match<S: ValueStore + ?Sized>(
    num_games: usize,
    store: &S,
    options: &ArenaOptions,
) -> Result<MatchResult> {
    let mut rng = create_rng(options.seed);
    let starting_time = Instant::now();

    info!(
        "Starting match of {} games against a table of {} records",
        num_games,
        store.len()
    );

    let games = play_cycles(num_games, &mut NullLogger, |_| {
        PlayerMoves::new(
            ValueLookupPolicy::new(store, fork_rng(&mut rng)),
            RandomMoves::new(fork_rng(&mut rng)),
        )
    })?;

    let result = games.iter().collect::<MatchResult>();

    info!(
        "Match finished in {:.3} sec: {}",
        starting_time.elapsed().as_secs_f64(),
        result
    );

    Ok(result)
}
