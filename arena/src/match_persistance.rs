use anyhow::{Context, Result};
use common::FsExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::MatchResult;

/// Appends one JSON line per finished match.
pub struct MatchPersistance {
    match_file: File,
}

impl MatchPersistance {
    pub fn new(match_file_path: &Path) -> Result<Self> {
        match_file_path.ensure_parent_dir()?;

        let match_file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(match_file_path)
            .with_context(|| format!("Failed to open results file {:?}", match_file_path))?;

        Ok(Self { match_file })
    }

    pub fn write_match(&mut self, match_result: &MatchResult) -> Result<()> {
        let serialized = serde_json::to_string(match_result)?;

        writeln!(self.match_file, "{}", serialized)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_one_line_per_match() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("match_results.json");
        let result = MatchResult {
            games: 10,
            wins: 6,
            losses: 3,
            draws: 1,
        };

        MatchPersistance::new(&path)
            .unwrap()
            .write_match(&result)
            .unwrap();
        MatchPersistance::new(&path)
            .unwrap()
            .write_match(&result)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            serde_json::from_str::<MatchResult>(lines[1]).unwrap(),
            result
        );
        assert_eq!(
            lines[0],
            r#"{"games":10,"wins":6,"losses":3,"draws":1}"#
        );
    }
}
