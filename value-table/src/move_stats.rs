use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Running total of final score differentials observed after playing a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStats {
    pub sum: i64,
    pub count: u64,
}

impl MoveStats {
    pub fn new(sum: i64, count: u64) -> Self {
        Self { sum, count }
    }

    pub fn record(&mut self, differential: i64) {
        self.sum += differential;
        self.count += 1;
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

/// Per-pit statistics for one state key.
pub type MoveTable = BTreeMap<usize, MoveStats>;
