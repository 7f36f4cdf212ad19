#![forbid(unsafe_code)]

use super::super::*;

impl<M: OrderedKvMap> NoticeStore<M> {
    /// Merges the supplied fields into the stored notice and stamps `updatedAt`.
    ///
    /// The merged record is validated as a whole before it replaces the old
    /// value; `id` and `createdAt` never change.
    pub fn update(&mut self, request: UpdateNoticeRequest) -> Result<Notice, StoreError> {
        let key = request.id.trim();
        let current = self.load_existing(key)?;
        let updated = current
            .apply(&request.patch(), self.now())
            .inspect_err(|err| {
                tracing::warn!(
                    id = %key,
                    field = err.field(),
                    error = %err,
                    "update rejected: invalid input"
                );
            })?;
        self.write(&updated)?;

        tracing::info!(id = %updated.id(), active = updated.is_active(), "notice updated");
        Ok(updated)
    }
}
