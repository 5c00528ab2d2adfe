use anyhow::Result;
use log::debug;
use mancala::Board;

use super::{GameLogger, MoveSource, Play, SelfPlayMetrics};

/// Plays `num_games` games one after another, each on a fresh board with a fresh move source
/// built by `move_source_factory`. Every event is routed through the shared `logger`.
pub fn play_cycles<L, M, F>(
    num_games: usize,
    logger: &mut L,
    mut move_source_factory: F,
) -> Result<Vec<SelfPlayMetrics>>
where
    L: GameLogger + ?Sized,
    M: MoveSource,
    F: FnMut(&Board) -> M,
{
    let mut results = Vec::with_capacity(num_games);

    for game_num in 0..num_games {
        let mut play = Play::with_logger(&mut *logger);
        let mut moves = move_source_factory(play.board());

        let metrics = play.play(&mut moves)?;

        debug!(
            "Game: {}, Number of Moves: {}, Score: {}, Winner: {:?}",
            game_num + 1,
            metrics.num_moves(),
            metrics.score(),
            metrics.winner()
        );

        results.push(metrics);
    }

    Ok(results)
}
