#![forbid(unsafe_code)]

mod memory;
mod sqlite;

pub use memory::MemoryMap;
pub use sqlite::SqliteMap;

pub const DEFAULT_MAX_KEY_BYTES: usize = 100;
pub const DEFAULT_MAX_VALUE_BYTES: usize = 8 * 1024;

/// Per-entry size limits enforced on every write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapLimits {
    pub max_key_bytes: usize,
    pub max_value_bytes: usize,
}

impl Default for MapLimits {
    fn default() -> Self {
        Self {
            max_key_bytes: DEFAULT_MAX_KEY_BYTES,
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
        }
    }
}

impl MapLimits {
    pub fn check_key(&self, key: &str) -> Result<(), MapError> {
        if key.len() > self.max_key_bytes {
            return Err(MapError::KeyTooLarge {
                len: key.len(),
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }

    pub fn check_entry(&self, key: &str, value: &[u8]) -> Result<(), MapError> {
        self.check_key(key)?;
        if value.len() > self.max_value_bytes {
            return Err(MapError::ValueTooLarge {
                len: value.len(),
                max: self.max_value_bytes,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("key is {len} bytes (max {max})")]
    KeyTooLarge { len: usize, max: usize },
    #[error("value is {len} bytes (max {max})")]
    ValueTooLarge { len: usize, max: usize },
}

/// Durable map with unique string keys, iterated in ascending byte order.
pub trait OrderedKvMap: Send {
    fn limits(&self) -> MapLimits;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, MapError>;

    /// Inserts or overwrites; returns the previous value.
    fn insert(&mut self, key: &str, value: Vec<u8>) -> Result<Option<Vec<u8>>, MapError>;

    /// Removes the entry; returns the value it held.
    fn remove(&mut self, key: &str) -> Result<Option<Vec<u8>>, MapError>;

    fn contains_key(&self, key: &str) -> Result<bool, MapError> {
        Ok(self.get(key)?.is_some())
    }

    fn keys(&self) -> Result<Vec<String>, MapError>;

    fn values(&self) -> Result<Vec<Vec<u8>>, MapError> {
        Ok(self.entries()?.into_iter().map(|(_, value)| value).collect())
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, MapError>;

    /// At most `limit` entries, skipping the first `offset` in key order.
    fn entries_range(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        Ok(self
            .entries()?
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn len(&self) -> Result<u64, MapError>;

    fn is_empty(&self) -> Result<bool, MapError> {
        Ok(self.len()? == 0)
    }
}

impl<T: OrderedKvMap + ?Sized> OrderedKvMap for Box<T> {
    fn limits(&self) -> MapLimits {
        (**self).limits()
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, MapError> {
        (**self).get(key)
    }

    fn insert(&mut self, key: &str, value: Vec<u8>) -> Result<Option<Vec<u8>>, MapError> {
        (**self).insert(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<Option<Vec<u8>>, MapError> {
        (**self).remove(key)
    }

    fn contains_key(&self, key: &str) -> Result<bool, MapError> {
        (**self).contains_key(key)
    }

    fn keys(&self) -> Result<Vec<String>, MapError> {
        (**self).keys()
    }

    fn values(&self) -> Result<Vec<Vec<u8>>, MapError> {
        (**self).values()
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        (**self).entries()
    }

    fn entries_range(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(String, Vec<u8>)>, MapError> {
        (**self).entries_range(offset, limit)
    }

    fn len(&self) -> Result<u64, MapError> {
        (**self).len()
    }
}

#[cfg(test)]
mod tests;
