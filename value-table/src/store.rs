use std::collections::BTreeMap;

use anyhow::Result;

use super::{MoveTable, StateKey};

/// Key-value storage for the value table. Writes may be buffered until `commit`.
pub trait ValueStore {
    fn get(&self, key: &StateKey) -> Option<&MoveTable>;

    fn put(&mut self, key: StateKey, table: MoveTable);

    fn entries(&self) -> Box<dyn Iterator<Item = (&StateKey, &MoveTable)> + '_>;

    fn len(&self) -> usize;

    fn commit(&mut self) -> Result<()>;

    fn contains(&self, key: &StateKey) -> bool {
        self.get(key).is_some()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &StateKey> + '_> {
        Box::new(self.entries().map(|(key, _)| key))
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ValueStore + ?Sized> ValueStore for &mut S {
    fn get(&self, key: &StateKey) -> Option<&MoveTable> {
        (**self).get(key)
    }

    fn put(&mut self, key: StateKey, table: MoveTable) {
        (**self).put(key, table)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&StateKey, &MoveTable)> + '_> {
        (**self).entries()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn commit(&mut self) -> Result<()> {
        (**self).commit()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    table: BTreeMap<StateKey, MoveTable>,
    commits: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl ValueStore for MemoryStore {
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
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveStats;
    use mancala::{Player, INITIAL_STONES};

    #[test]
    fn test_memory_store_put_then_get() {
        let mut store = MemoryStore::new();
        let key = StateKey::new(Player::A, INITIAL_STONES);
        let mut table = MoveTable::new();
        table.insert(3, MoveStats::new(5, 1));

        assert!(store.is_empty());
        assert!(!store.contains(&key));

        store.put(key.clone(), table.clone());

        assert!(store.contains(&key));
        assert_eq!(store.get(&key), Some(&table));
        assert_eq!(store.len(), 1);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec![&key]);
    }

    #[test]
    fn test_memory_store_counts_commits() {
        let mut store = MemoryStore::new();
        store.commit().unwrap();
        (&mut store).commit().unwrap();

        assert_eq!(store.commits(), 2);
    }
}
