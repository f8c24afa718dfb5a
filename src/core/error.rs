//! Errors raised by charter edits

use thiserror::Error;

use super::charter::Direction;

/// Reasons an edit can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{list} index {index} out of range (len {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("cannot move focus area {index} {direction} (len {len})")]
    MoveOutOfRange {
        index: usize,
        direction: Direction,
        len: usize,
    },

    #[error("charter is read-only")]
    ReadOnly,

    #[error("unknown measure verb: {0:?}")]
    UnknownVerb(String),

    #[error("unknown decision right: {0:?}")]
    UnknownRight(String),
}
