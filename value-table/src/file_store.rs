use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};
use tempfile::NamedTempFile;

use super::{MoveTable, StateKey, ValueStore};

/// A value table kept in memory and saved as a gzipped JSON document.
///
/// `commit` writes the whole table to a temporary file next to the target and renames it into
/// place, so readers see either the previous or the new table. Only one process may commit to a
/// given path; concurrent writers overwrite each other's batches.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: BTreeMap<StateKey, MoveTable>,
}

impl FileStore {
    /// Opens the table at `path`. A missing file is an empty table; it is created on first commit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let table = if path.exists() {
            let file =
                File::open(&path).with_context(|| format!("Failed to open value table {:?}", path))?;
            let reader = BufReader::new(GzDecoder::new(file));

            serde_json::from_reader(reader)
                .with_context(|| format!("Failed to read value table {:?}", path))?
        } else {
            info!("No value table at {:?}, starting empty", path);
            BTreeMap::new()
        };

        info!("Opened value table {:?} with {} records", path, table.len());

        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_to_temp_file(&self, dir: &Path) -> Result<NamedTempFile> {
        let file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;

        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, &self.table)?;

        let mut writer = encoder.finish()?;
        writer.flush()?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.as_file().sync_all()?;

        Ok(file)
    }
}

impl ValueStore for FileStore {
    fn get(&self, key: &StateKey) -> Option<&MoveTable> {
        self.table.get(key)
    }

    fn put(&mut self, key: StateKey, table: MoveTable) {
        self.table.insert(key, table);
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&StateKey, &MoveTable)> + '_> {
        Box::new(self.table.iter())
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn commit(&mut self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {:?}", dir))?;

        let file = self.write_to_temp_file(&dir)?;
        file.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace value table {:?}", self.path))?;

        debug!("Committed {} records to {:?}", self.table.len(), self.path);

        Ok(())
    }
}
