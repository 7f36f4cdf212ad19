#![forbid(unsafe_code)]

use super::super::*;

impl<M: OrderedKvMap> NoticeStore<M> {
    pub fn get(&self, id: &str) -> Result<Notice, StoreError> {
        tracing::debug!(id = %id.trim(), "get notice");
        self.load_existing(id.trim())
    }
}
