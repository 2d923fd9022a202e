use thiserror::Error;

/// A broken precondition, returned by the fallible `try_*` operations.
///
/// Each variant mirrors a condition that the non-fallible counterpart checks
/// with [`kioku_assert!`](crate::kioku_assert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("size must be positive")]
    ZeroSize,

    #[error("invalid range {start}..{end} for a view of length {len}: expected start < end < len")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("cannot reallocate from {current} to {requested} elements: new size must be larger")]
    NonGrowingReallocation { current: usize, requested: usize },

    #[error("{len} elements do not fit in a capacity of {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
}

pub type Result<T, E = PreconditionError> = core::result::Result<T, E>;
