use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Result};
use common::{create_rng, fork_rng, Config, ConfigLoader};
use log::info;
use self_play::{play_cycles, MemoryLogger, RandomMoves, SelfPlayPersistance};
use serde::{Deserialize, Serialize};

use super::{build_table, BuildSummary, ValueStore};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOptions {
    pub games_per_batch: usize,
    pub seed: Option<u64>,
    pub games_dir: Option<String>,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            games_per_batch: 10,
            seed: None,
            games_dir: None,
        }
    }
}

impl Config for RecordOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            games_per_batch: config
                .get("games_per_batch")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.games_per_batch),
            seed: config.get("seed").and_then(|v| v.as_u64()),
            games_dir: config.get("games_dir").and_then(|v| v.as_string()),
        })
    }
}

/// Runs `cycles` batches of random self-play. Each batch is optionally written to `persistance`
/// and then folded into `store` with a single commit.
pub fn record<S: ValueStore + ?Sized>(
    cycles: usize,
    store: &mut S,
    mut persistance: Option<&mut SelfPlayPersistance>,
    options: &RecordOptions,
) -> Result<BuildSummary> {
    let mut rng = create_rng(options.seed);
    let mut total = BuildSummary::default();
    let start = Instant::now();

    for cycle in 0..cycles {
        let last = Instant::now();

        let mut logger = MemoryLogger::new();
        play_cycles(options.games_per_batch, &mut logger, |_| {
            RandomMoves::new(fork_rng(&mut rng))
        })?;
        let events = logger.into_events();

        if let Some(persistance) = persistance.as_deref_mut() {
            let path = persistance.write_batch(&events)?;
            info!("Saved batch to {:?}", path);
        }

        let summary = build_table(store, &events)?;
        total.merge(&summary);

        info!(
            "Cycle {}: elapsed {:.3} sec, interval {:.3} sec",
            cycle + 1,
            start.elapsed().as_secs_f64(),
            last.elapsed().as_secs_f64()
        );
    }

    info!(
        "Recorded {} games, {} moves, {} records in table",
        total.games,
        total.moves,
        store.len()
    );

    Ok(total)
}

/// Rebuilds or extends `store` from every batch log in `games_dir`, one commit per batch.
pub fn replay<S: ValueStore + ?Sized>(games_dir: &Path, store: &mut S) -> Result<BuildSummary> {
    if !games_dir.is_dir() {
        return Err(anyhow!("{:?} is not a valid directory", games_dir));
    }

    let persistance = SelfPlayPersistance::new(games_dir.to_path_buf())?;
    let mut total = BuildSummary::default();

    for batch in persistance.batches()? {
        let events = SelfPlayPersistance::read_batch(&batch)?;
        let summary = build_table(store, &events)?;

        info!("Replayed {:?}: {} games", batch, summary.games);

        total.merge(&summary);
    }

    info!(
        "Replayed {} games, {} records in table",
        total.games,
        store.len()
    );

    Ok(total)
}
