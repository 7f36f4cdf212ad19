#![forbid(unsafe_code)]

//! Domain rules for notices: the validated value object, its field limits and
//! the pure predicates (search, pagination window) that the store evaluates.

mod ids;
mod notice;
mod page;
mod search;
mod validation;

pub use ids::*;
pub use notice::*;
pub use page::*;
pub use search::*;
pub use validation::*;
