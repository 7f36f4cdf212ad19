#![forbid(unsafe_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Nanosecond timestamps for `createdAt` / `updatedAt`.
pub trait Clock: Send {
    fn now_ns(&self) -> u64;
}

/// Wall clock that never goes backwards within one process.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        let wall = wall_clock_ns();
        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        previous.max(wall)
    }
}

fn wall_clock_ns() -> u64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    if nanos <= 0 {
        0
    } else {
        u64::try_from(nanos).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock; clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ns: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ns)),
        }
    }

    pub fn set(&self, now_ns: u64) {
        self.now.store(now_ns, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ns: u64) -> u64 {
        // `fetch_add` wraps on overflow; report the value it stored.
        self.now
            .fetch_add(delta_ns, Ordering::SeqCst)
            .wrapping_add(delta_ns)
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let mut previous = clock.now_ns();
        assert!(previous > 0);
        for _ in 0..1000 {
            let next = clock.now_ns();
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn manual_clock_is_shared_between_clones() {
        let clock = ManualClock::new(10);
        let other = clock.clone();
        assert_eq!(other.advance(5), 15);
        assert_eq!(clock.now_ns(), 15);
        clock.set(3);
        assert_eq!(other.now_ns(), 3);
    }

    #[test]
    fn manual_clock_advance_wraps_like_the_stored_value() {
        let clock = ManualClock::new(u64::MAX - 1);
        assert_eq!(clock.advance(3), 1);
        assert_eq!(clock.now_ns(), 1);
    }
}
