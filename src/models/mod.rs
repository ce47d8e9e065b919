//! Core data models
//!
//! The unit of persisted history is the [`CheckRecord`]: one completed
//! checker invocation, with its aggregate [`Summary`] and the ordered
//! list of [`Issue`]s the checker emitted.

mod checker;
mod record;
mod severity;

pub use checker::Checker;
pub use record::{CheckRecord, Issue, Summary};
pub use severity::Severity;
