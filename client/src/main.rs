mod cli;

use anyhow::{anyhow, Result};
use arena::{play_match, ArenaOptions, MatchPersistance};
use clap::Parser;
use cli::{Cli, Commands};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use self_play::SelfPlayPersistance;
use std::path::Path;
use value_table::{record, replay, FileStore, RecordOptions, TableStats, ValueStore};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Record(record_args) => {
            let config_path = record_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new_or_default(config_path, "record".to_string())?;

            let mut record_options: RecordOptions = config.load()?;
            if record_args.games_dir.is_some() {
                record_options.games_dir = record_args.games_dir;
            }

            let mut self_play_persistance = record_options
                .games_dir
                .as_ref()
                .map(|dir| dir.relative_to_cwd())
                .transpose()?
                .map(SelfPlayPersistance::new)
                .transpose()?;

            let mut store = FileStore::open(record_args.db.relative_to_cwd()?)?;

            let summary = record(
                record_args.cycles,
                &mut store,
                self_play_persistance.as_mut(),
                &record_options,
            )?;

            info!(
                "Wins A: {}, Wins B: {}, Draws: {}",
                summary.wins[0],
                summary.wins[1],
                summary.draws()
            );
        }
        Commands::Match(match_args) => {
            let config_path = match_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new_or_default(config_path, "match".to_string())?;

            let arena_options: ArenaOptions = config.load()?;

            let store = FileStore::open(match_args.db.relative_to_cwd()?)?;
            if store.is_empty() {
                warn!("The value table is empty, player A will play randomly");
            }

            let match_result = play_match(match_args.cycles, &store, &arena_options)?;

            println!("{}", match_result);

            if let Some(results_file) = &arena_options.results_file {
                let mut persistance = MatchPersistance::new(&results_file.relative_to_cwd()?)?;
                persistance.write_match(&match_result)?;
            }
        }
        Commands::Stat(stat_args) => {
            let store = FileStore::open(stat_args.db.relative_to_cwd()?)?;

            print!("{}", TableStats::collect(&store));
        }
        Commands::Replay(replay_args) => {
            let games_dir = replay_args.games_dir.relative_to_cwd()?;
            assert_dir_exists(&games_dir)?;

            let mut store = FileStore::open(replay_args.db.relative_to_cwd()?)?;

            let summary = replay(&games_dir, &mut store)?;

            info!(
                "Replayed {} games with {} moves, {} discarded",
                summary.games, summary.moves, summary.discarded
            );
        }
    }

    Ok(())
}

fn assert_dir_exists<P: AsRef<Path>>(dir: P) -> Result<()> {
    if dir.as_ref().is_dir() {
        Ok(())
    } else {
        Err(anyhow!("{:?} is not a valid directory", dir.as_ref()))
    }
}
