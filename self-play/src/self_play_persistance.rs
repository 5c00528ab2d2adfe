use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::{read_events, FileLogger, GameEvent};

const BATCH_FILE_PREFIX: &str = "batch_";
const BATCH_FILE_SUFFIX: &str = ".jsonl.gz";

/// Stores each self-play batch as a gzipped JSON-lines event log in `game_directory`.
pub struct SelfPlayPersistance {
    game_directory: PathBuf,
}

impl SelfPlayPersistance {
    pub fn new(game_directory: PathBuf) -> Result<Self> {
        fs::create_dir_all(&game_directory)
            .with_context(|| format!("Failed to create games directory {:?}", game_directory))?;

        Ok(Self { game_directory })
    }

    pub fn write_batch(&mut self, events: &[GameEvent]) -> Result<PathBuf> {
        let file_path = self.generate_file_path_for_batch();
        let file = File::create(&file_path)
            .with_context(|| format!("Failed to create batch file {:?}", file_path))?;
        let compressor = GzEncoder::new(file, Compression::default());
        let mut logger = FileLogger::new(compressor);

        for event in events {
            event.replay(&mut logger)?;
        }

        logger.into_inner().finish()?;

        Ok(file_path)
    }

    /// Batch files in the games directory, sorted by path.
    pub fn batches(&self) -> Result<Vec<PathBuf>> {
        let mut res = fs::read_dir(&self.game_directory)
            .with_context(|| format!("Failed to read games directory {:?}", self.game_directory))?
            .flatten()
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|e| e.path())
            .filter(|p| is_batch_file(p))
            .collect::<Vec<_>>();

        res.sort();

        Ok(res)
    }

    pub fn read_batch(path: &Path) -> Result<Vec<GameEvent>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open batch file {:?}", path))?;
        let content = BufReader::new(GzDecoder::new(file));

        let events = read_events(content)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse batch file {:?}", path))?;

        Ok(events)
    }

    fn generate_file_path_for_batch(&self) -> PathBuf {
        self.game_directory.join(format!(
            "{}{}{}",
            BATCH_FILE_PREFIX,
            Uuid::new_v4().simple(),
            BATCH_FILE_SUFFIX
        ))
    }
}

fn is_batch_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with(BATCH_FILE_PREFIX) && n.ends_with(BATCH_FILE_SUFFIX))
        .unwrap_or(false)
}
