use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub trait FsExt {
    // Converts the provided relative path to be based from the path of the currently working directory.
    // If the path is absolute, then it returns the absolute path.
    fn relative_to_cwd(&self) -> Result<PathBuf>
    where
        Self: AsRef<Path>,
    {
        let cwd_dir = std::env::current_dir()?;

        Ok(cwd_dir.join(self))
    }

    // Creates the parent directory of the path if it does not yet exist.
    fn ensure_parent_dir(&self) -> Result<()>
    where
        Self: AsRef<Path>,
    {
        match self.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent)),
            _ => Ok(()),
        }
    }
}

impl FsExt for String {}

impl FsExt for &str {}

impl FsExt for PathBuf {}

impl FsExt for &Path {}
