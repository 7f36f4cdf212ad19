#![forbid(unsafe_code)]

use super::super::*;
use nb_core::validate;

impl<M: OrderedKvMap> NoticeStore<M> {
    /// Inserts a new notice under its (trimmed) id.
    ///
    /// An omitted id is generated; a supplied one that is already a key fails
    /// with [`StoreError::AlreadyExists`] before any field is validated.
    pub fn create(&mut self, request: CreateNoticeRequest) -> Result<Notice, StoreError> {
        let now = self.now();
        let id = match request.id {
            Some(id) => {
                if self.map.contains_key(id.trim())? {
                    tracing::warn!(id = %id.trim(), "create rejected: id already exists");
                    return Err(StoreError::AlreadyExists {
                        id: id.trim().to_string(),
                    });
                }
                id
            }
            None => self.generate_id(now)?,
        };

        let fields = validate(&id, &request.title, &request.description).inspect_err(|err| {
            tracing::warn!(field = err.field(), error = %err, "create rejected: invalid input");
        })?;
        let notice = Notice::create(fields, request.is_active.unwrap_or(true), now);
        self.write(&notice)?;

        tracing::info!(id = %notice.id(), "notice created");
        Ok(notice)
    }
}
