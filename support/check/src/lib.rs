//! Misuse reporting shared by the kioku crates.
//!
//! Misuse comes in two severities, and they are kept apart on purpose:
//!
//! - **Soft**: a recoverable mistake such as reading past a fixed capacity or
//!   pushing into a full container. The operation falls back to something safe
//!   (a clamped index, a no-op) and a [`Diagnostic`] is emitted through
//!   [`report`]. Execution continues.
//! - **Hard**: a caller bug such as a zero-sized buffer or an inverted range.
//!   [`kioku_assert!`] reports the failing expression and its location, then
//!   panics. Fallible twins of those operations return [`PreconditionError`]
//!   instead.
//!
//! ```
//! use kioku_check::{Diagnostic, kioku_assert, report};
//!
//! fn clamp(idx: usize, cap: usize) -> usize {
//!     kioku_assert!(cap > 0);
//!     if idx >= cap {
//!         report(Diagnostic::OutOfBounds { container: "Demo", op: "at", idx });
//!         return cap - 1;
//!     }
//!     idx
//! }
//!
//! assert_eq!(clamp(7, 3), 2);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod diagnostic;
mod error;
mod fatal;

#[cfg(feature = "capture")]
pub mod capture;

pub use diagnostic::{Diagnostic, report};
pub use error::{PreconditionError, Result};
pub use fatal::precondition_failed;

/// Checks a precondition, failing loudly when it does not hold.
///
/// The stringified expression and the caller's location are logged at ERROR
/// level, then the thread panics. Use inside `#[track_caller]` functions to
/// attribute the failure to the code that broke the contract.
#[macro_export]
macro_rules! kioku_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::precondition_failed(::core::stringify!($cond));
        }
    };
}
