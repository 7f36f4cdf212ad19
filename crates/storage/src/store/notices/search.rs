#![forbid(unsafe_code)]

use super::super::*;
use nb_core::SearchQuery;

impl<M: OrderedKvMap> NoticeStore<M> {
    /// Notices whose title or description contains `query`, ignoring case,
    /// in key order.
    pub fn search(&self, query: &str) -> Result<Vec<Notice>, StoreError> {
        let query = SearchQuery::parse(query)?;
        let mut out = Vec::new();
        for notice in self.decode_all(self.map.entries()?)? {
            if notice.matches(&query) {
                out.push(notice);
            }
        }
        tracing::debug!(query = query.needle(), hits = out.len(), "search notices");
        Ok(out)
    }
}
