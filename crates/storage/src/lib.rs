#![forbid(unsafe_code)]

mod clock;
mod codec;
mod ids;
mod kv;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{DecodeError, MAX_TIMESTAMP_DIGITS, decode, encode, max_encoded_len};
pub use ids::{IdSource, RandomIdSource, SequenceIdSource};
pub use kv::{
    DEFAULT_MAX_KEY_BYTES, DEFAULT_MAX_VALUE_BYTES, MapError, MapLimits, MemoryMap, OrderedKvMap,
    SqliteMap,
};
pub use store::*;
