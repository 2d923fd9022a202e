//! Bounds-aware containers and non-owning views.
//!
//! # Containers
//!
//! | Type | Storage | Size |
//! |------|---------|------|
//! | [`StaticArray<T, N>`] | inline `[T; N]` | logical length `<= N`, clamped access |
//! | [`StaticBuffer<T, N>`] | inline `[T; N]` | always `N` |
//! | [`GrowableBuffer<T>`] | boxed slice | grows only through [`GrowableBuffer::reallocate`] |
//! | [`Stack<T>`], [`Queue<T>`] | [`GrowableBuffer<T>`] | doubles when full |
//!
//! # Views
//!
//! [`View`] and [`ViewMut`] borrow the contiguous storage of any [`Sequence`]
//! and can be narrowed with `range`. [`Cursor`] adds a fill count on top of a
//! [`ViewMut`] so a fixed window can be used like a bounded vector.
//!
//! ```
//! use kioku_dstruct::{StaticArray, create_const_view};
//!
//! let array = StaticArray::<i32, 8>::from_array([3, 1, 4, 1, 5]);
//! let view = create_const_view(&array);
//! let middle = view.range(1, 4);
//! assert_eq!(middle.as_slice(), &[1, 4, 1]);
//! ```
//!
//! # Misuse
//!
//! Recoverable misuse (clamped indices, pushing into a full container, popping
//! an empty one) is reported through [`kioku_check::report`] and execution
//! continues. Broken preconditions (zero sizes, invalid ranges, shrinking
//! reallocations) panic through [`kioku_check::kioku_assert!`]; the `try_*`
//! variants return [`PreconditionError`] instead.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod buffer;
mod cursor;
mod queue;
mod stack;
mod static_array;
mod view;

pub use buffer::{GrowableBuffer, StaticBuffer};
pub use cursor::Cursor;
pub use kioku_check::PreconditionError;
pub use queue::Queue;
pub use stack::Stack;
pub use static_array::StaticArray;
pub use view::{View, ViewMut, create_const_view, create_cursor, create_view};

use alloc::vec::Vec;

/// Read access to contiguous elements.
///
/// This is the capability the search algorithms and the read-only views are
/// written against. For containers with a logical length (such as
/// [`StaticArray`] or [`Cursor`]) the slice covers the occupied prefix only.
pub trait Sequence {
    type Item;

    fn as_slice(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `None` past the end; never clamped.
    fn get(&self, idx: usize) -> Option<&Self::Item> {
        self.as_slice().get(idx)
    }

    fn iter(&self) -> core::slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }
}

/// In-place mutation of contiguous elements, used by the sorts.
pub trait SequenceMut: Sequence {
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    fn get_mut(&mut self, idx: usize) -> Option<&mut Self::Item> {
        self.as_mut_slice().get_mut(idx)
    }

    /// # Panics
    ///
    /// When either index is past the end.
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SequenceMut for [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SequenceMut for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}
