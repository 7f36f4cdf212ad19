#![forbid(unsafe_code)]

use super::super::*;

impl<M: OrderedKvMap> NoticeStore<M> {
    /// Soft delete: flags the notice inactive and stamps `updatedAt`.
    ///
    /// The record stays retrievable. An already inactive notice counts as
    /// missing, so repeating a delete yields [`StoreError::NotFound`].
    pub fn delete(&mut self, id: &str) -> Result<Notice, StoreError> {
        let key = id.trim();
        let current = self.load_existing(key)?;
        if !current.is_active() {
            return Err(StoreError::NotFound {
                id: key.to_string(),
            });
        }
        let deleted = current.deactivate(self.now());
        self.write(&deleted)?;

        tracing::info!(id = %deleted.id(), "notice deactivated");
        Ok(deleted)
    }

    /// Hard delete: removes the entry and frees the id for reuse.
    ///
    /// Works on records that no longer decode, so corrupt entries can be
    /// cleared.
    pub fn purge(&mut self, id: &str) -> Result<(), StoreError> {
        let key = id.trim();
        if self.map.remove(key)?.is_none() {
            return Err(StoreError::NotFound {
                id: key.to_string(),
            });
        }

        tracing::info!(id = %key, "notice purged");
        Ok(())
    }
}
