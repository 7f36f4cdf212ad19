#![forbid(unsafe_code)]

use super::super::*;
use nb_core::PageWindow;

impl<M: OrderedKvMap> NoticeStore<M> {
    /// Every stored notice in key order.
    pub fn list_all(&self) -> Result<Vec<Notice>, StoreError> {
        let entries = self.map.entries()?;
        tracing::debug!(count = entries.len(), "list all notices");
        self.decode_all(entries)
    }

    /// A key-ordered window of at most `limit` notices starting at `offset`.
    ///
    /// `total` always counts the whole store; an offset past the end yields an
    /// empty page.
    pub fn list_page(&self, limit: i64, offset: i64) -> Result<NoticePage, StoreError> {
        let window = PageWindow::new(limit, offset)?;
        let total = self.map.len()?;
        let entries = if window.limit() == 0 {
            Vec::new()
        } else {
            self.map.entries_range(window.offset(), window.limit())?
        };
        tracing::debug!(limit, offset, total, returned = entries.len(), "list notice page");

        Ok(NoticePage {
            items: self.decode_all(entries)?,
            total,
        })
    }
}
