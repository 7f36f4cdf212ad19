#![forbid(unsafe_code)]

use super::NoticeStore;
use crate::kv::OrderedKvMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A [`NoticeStore`] behind one coarse lock, for hosts that call in from
/// several threads. Every operation runs to completion under the lock.
pub struct SharedNoticeStore<M> {
    inner: Arc<Mutex<NoticeStore<M>>>,
}

impl<M> Clone for SharedNoticeStore<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: OrderedKvMap> SharedNoticeStore<M> {
    pub fn new(store: NoticeStore<M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut NoticeStore<M>) -> R) -> R {
        // Operations never leave a half-applied write behind, so the state
        // behind a poisoned lock is still consistent.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
