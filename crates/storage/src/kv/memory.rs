#![forbid(unsafe_code)]

use super::{MapError, MapLimits, OrderedKvMap};
use std::collections::BTreeMap;

/// In-process map. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryMap {
    entries: BTreeMap<String, Vec<u8>>,
    limits: MapLimits,
}

impl MemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: MapLimits) -> Self {
        Self {
            entries: BTreeMap::new(),
            limits,
        }
    }
}

impl OrderedKvMap for MemoryMap {
    fn limits(&self) -> MapLimits {
        self.limits
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, MapError> {
        Ok(self.entries.get(key).cloned())
    }

    fn insert(&mut self, key: &str, value: Vec<u8>) -> Result<Option<Vec<u8>>, MapError> {
        self.limits.check_entry(key, &value)?;
        Ok(self.entries.insert(key.to_string(), value))
    }

    fn remove(&mut self, key: &str) -> Result<Option<Vec<u8>>, MapError> {
        Ok(self.entries.remove(key))
    }

    fn contains_key(&self, key: &str) -> Result<bool, MapError> {
        Ok(self.entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, MapError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        Ok(self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn entries_range(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        Ok(self
            .entries
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn len(&self) -> Result<u64, MapError> {
        Ok(self.entries.len() as u64)
    }
}
