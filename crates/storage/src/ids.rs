#![forbid(unsafe_code)]

use uuid::Uuid;

/// Source of ids for notices created without a caller-supplied id.
pub trait IdSource: Send {
    fn next_id(&mut self, now_ns: u64) -> String;
}

/// `<now_ns as 16 hex digits>-<v4 uuid as 32 hex digits>`.
///
/// The clock prefix keeps generated ids in creation order under the map's
/// key ordering; the uuid makes collisions negligible.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&mut self, now_ns: u64) -> String {
        format!("{now_ns:016x}-{}", Uuid::new_v4().simple())
    }
}

/// Deterministic `<prefix><counter>` ids, zero-padded to four digits.
#[derive(Clone, Debug)]
pub struct SequenceIdSource {
    prefix: String,
    next: u64,
}

impl SequenceIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&mut self, _now_ns: u64) -> String {
        let id = format!("{}{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nb_core::NoticeId;

    #[test]
    fn random_ids_are_valid_and_sortable() {
        let mut source = RandomIdSource;
        let early = source.next_id(1);
        let late = source.next_id(2);
        assert_eq!(early.len(), 49);
        assert!(NoticeId::try_new(&early).is_ok());
        assert!(early < late);
        assert_ne!(source.next_id(1), source.next_id(1));
    }

    #[test]
    fn sequence_ids_count_up() {
        let mut source = SequenceIdSource::new("n");
        assert_eq!(source.next_id(0), "n0000");
        assert_eq!(source.next_id(0), "n0001");
    }
}
