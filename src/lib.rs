//! Kioku - bounds-aware containers with search and sort on top.
//!
//! # Overview
//!
//! The collection is built from a few layers:
//!
//! - **Containers**: [`StaticArray`] (inline, fixed capacity, clamped
//!   indexing), [`StaticBuffer`], [`GrowableBuffer`] (heap, grows only on
//!   request), and the [`Stack`]/[`Queue`] built on it.
//! - **Views**: [`View`], [`ViewMut`] and [`Cursor`] borrow any container's
//!   storage and can be narrowed to a sub-range.
//! - **Algorithms**: [`search`] and [`sort`] work on anything implementing
//!   [`Sequence`] / [`SequenceMut`].
//!
//! # Quick Start
//!
//! ```
//! use kioku::{StaticArray, create_const_view, search, sort};
//!
//! let mut array = StaticArray::<i32, 10>::from_array([-1, 0, -2, 4, 12, -11, 0, -2, 25, -3]);
//! sort::merge(&mut array);
//! assert_eq!(array.as_slice(), &[-11, -3, -2, -2, -1, 0, 0, 4, 12, 25]);
//!
//! let view = create_const_view(&array).range(2, 6);
//! let smallest = search::min(&view).unwrap();
//! assert_eq!((smallest.idx, smallest.val), (0, -2));
//! ```
//!
//! # Misuse
//!
//! Recoverable misuse (an index past a fixed capacity, pushing into a full
//! container) is logged through `tracing` on the `kioku::diag` target and
//! worked around. Caller bugs (a zero-sized buffer, an invalid range, a
//! shrinking reallocation) panic with the failed expression and location;
//! the `try_*` forms return [`PreconditionError`] instead.
//!
//! ```
//! use kioku::{GrowableBuffer, PreconditionError};
//!
//! let mut buffer = GrowableBuffer::<u8>::new(4);
//! assert_eq!(
//!     buffer.try_reallocate(4),
//!     Err(PreconditionError::NonGrowingReallocation { current: 4, requested: 4 })
//! );
//! ```

// Re-export containers and views from kioku_dstruct
pub use kioku_dstruct::{
    Cursor, GrowableBuffer, Queue, Sequence, SequenceMut, Stack, StaticArray, StaticBuffer, View,
    ViewMut, create_const_view, create_cursor, create_view,
};

// Re-export algorithms
pub use kioku_algo::{QueryMode, QueryResult, SortKind, search, sort};

// Re-export the error model
pub use kioku_check::{Diagnostic, PreconditionError, kioku_assert};
