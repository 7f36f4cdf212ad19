#![forbid(unsafe_code)]

mod error;
mod notices;
mod requests;
mod shared;

pub use error::StoreError;
pub use requests::*;
pub use shared::SharedNoticeStore;

use crate::clock::{Clock, SystemClock};
use crate::codec::{DecodeError, decode, encode};
use crate::ids::{IdSource, RandomIdSource};
use crate::kv::OrderedKvMap;
use nb_core::Notice;

const MAX_ID_ATTEMPTS: usize = 8;

/// Lifecycle operations over the single notice map.
///
/// Keys are notice ids, values are [`encode`]d notices. Every operation either
/// completes with one map write (or none) or returns an error and leaves the
/// map untouched.
pub struct NoticeStore<M> {
    map: M,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl<M: OrderedKvMap> NoticeStore<M> {
    pub fn new(map: M) -> Self {
        Self::with_parts(map, SystemClock::new(), RandomIdSource)
    }

    pub fn with_parts(
        map: M,
        clock: impl Clock + 'static,
        ids: impl IdSource + 'static,
    ) -> Self {
        Self {
            map,
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn into_map(self) -> M {
        self.map
    }

    /// Number of stored notices, active or not.
    pub fn len(&self) -> Result<u64, StoreError> {
        Ok(self.map.len()?)
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.map.is_empty()?)
    }

    fn now(&self) -> u64 {
        self.clock.now_ns()
    }

    fn load(&self, key: &str) -> Result<Option<Notice>, StoreError> {
        match self.map.get(key)? {
            Some(bytes) => decode_entry(key, &bytes).map(Some),
            None => Ok(None),
        }
    }

    fn load_existing(&self, key: &str) -> Result<Notice, StoreError> {
        self.load(key)?.ok_or_else(|| StoreError::NotFound {
            id: key.to_string(),
        })
    }

    fn write(&mut self, notice: &Notice) -> Result<(), StoreError> {
        self.map.insert(notice.id().as_str(), encode(notice))?;
        Ok(())
    }

    fn decode_all(&self, entries: Vec<(String, Vec<u8>)>) -> Result<Vec<Notice>, StoreError> {
        entries
            .into_iter()
            .map(|(key, bytes)| decode_entry(&key, &bytes))
            .collect()
    }

    fn generate_id(&mut self, now: u64) -> Result<String, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id(now);
            if !self.map.contains_key(&candidate)? {
                return Ok(candidate);
            }
            tracing::warn!(id = %candidate, "generated notice id already taken; retrying");
        }
        Err(StoreError::IdGeneration {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

fn decode_entry(key: &str, bytes: &[u8]) -> Result<Notice, StoreError> {
    let decoded = decode(bytes).and_then(|notice| {
        if notice.id().as_str() == key {
            Ok(notice)
        } else {
            Err(DecodeError::IdMismatch {
                key: key.to_string(),
                id: notice.id().to_string(),
            })
        }
    });
    decoded.map_err(|source| {
        tracing::warn!(key, error = %source, "stored notice failed to decode");
        StoreError::Decode {
            key: key.to_string(),
            source,
        }
    })
}
