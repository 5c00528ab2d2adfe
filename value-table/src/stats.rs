use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use super::ValueStore;

/// How well covered the table is: the number of state keys and, for every observation count, how
/// many `(key, pit)` entries have been seen that many times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    pub records: usize,
    pub distribution: BTreeMap<u64, usize>,
}

impl TableStats {
    pub fn collect<S: ValueStore + ?Sized>(store: &S) -> Self {
        let mut distribution = BTreeMap::new();

        for (_, table) in store.entries() {
            for stats in table.values() {
                *distribution.entry(stats.count).or_insert(0) += 1;
            }
        }

        Self {
            records: store.len(),
            distribution,
        }
    }

    /// `(count, entries)` pairs, least frequent first; ties by count.
    pub fn by_frequency(&self) -> Vec<(u64, usize)> {
        let mut res = self
            .distribution
            .iter()
            .map(|(&count, &entries)| (count, entries))
            .collect::<Vec<_>>();

        res.sort_by_key(|&(count, entries)| (entries, count));

        res
    }
}

impl Display for TableStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} records", self.records)?;
        writeln!(f, "distribution of moves ever played")?;

        for (count, entries) in self.by_frequency() {
            writeln!(f, "  {} {}", entries, count)?;
        }

        Ok(())
    }
}
