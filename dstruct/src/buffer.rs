//! Contiguous buffers whose size is also their length.

use alloc::boxed::Box;
use core::ops::{Index, IndexMut};
use core::slice;

use kioku_check::{PreconditionError, Result, kioku_assert};

use crate::{Sequence, SequenceMut};

/// Heap buffer with a runtime size that only grows on request.
///
/// Unlike [`StaticArray`](crate::StaticArray) there is no logical length:
/// every slot is live, and indexing past the end panics like a slice rather
/// than being clamped. The buffer is deliberately not `Clone`; copy the
/// contents into a new buffer with [`from_sequence`](Self::from_sequence).
pub struct GrowableBuffer<T> {
    data: Box<[T]>,
}

static_assertions::assert_eq_size!(GrowableBuffer<u64>, [usize; 2]);
static_assertions::assert_not_impl_any!(GrowableBuffer<u64>: Clone);

impl<T: Default> GrowableBuffer<T> {
    /// Allocates `size` default-initialized elements.
    ///
    /// # Panics
    ///
    /// When `size` is zero.
    #[track_caller]
    pub fn new(size: usize) -> Self {
        kioku_assert!(size > 0);
        Self::alloc(size)
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PreconditionError::ZeroSize);
        }
        Ok(Self::alloc(size))
    }

    fn alloc(size: usize) -> Self {
        Self {
            data: core::iter::repeat_with(T::default).take(size).collect(),
        }
    }

    /// Grows to `new_size`, keeping every element at its index and
    /// default-initializing the new tail.
    ///
    /// # Panics
    ///
    /// When `new_size` is not strictly larger than the current size.
    #[track_caller]
    pub fn reallocate(&mut self, new_size: usize) {
        kioku_assert!(new_size > self.len());
        self.grow_to(new_size);
    }

    /// Fallible form of [`reallocate`](Self::reallocate); the buffer is left
    /// untouched on error.
    pub fn try_reallocate(&mut self, new_size: usize) -> Result<()> {
        if new_size <= self.len() {
            return Err(PreconditionError::NonGrowingReallocation {
                current: self.len(),
                requested: new_size,
            });
        }
        self.grow_to(new_size);
        Ok(())
    }

    fn grow_to(&mut self, new_size: usize) {
        let mut grown = core::mem::take(&mut self.data).into_vec();
        grown.resize_with(new_size, T::default);
        self.data = grown.into_boxed_slice();
    }
}

impl<T: Clone> GrowableBuffer<T> {
    /// Copies the contents of a non-empty sequence.
    ///
    /// # Panics
    ///
    /// When `source` is empty.
    #[track_caller]
    pub fn from_sequence<S>(source: &S) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let src = source.as_slice();
        kioku_assert!(!src.is_empty());
        Self { data: src.into() }
    }
}

impl<T> GrowableBuffer<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Only true after [`reset`](Self::reset).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Releases the storage; the size becomes zero.
    pub fn reset(&mut self) {
        self.data = Box::default();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for GrowableBuffer<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Sequence for GrowableBuffer<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> SequenceMut for GrowableBuffer<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// Inline buffer of exactly `N > 0` elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticBuffer<T, const N: usize> {
    data: [T; N],
}

impl<T: Default, const N: usize> StaticBuffer<T, N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "StaticBuffer must have a positive size") };
        Self {
            data: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> StaticBuffer<T, N> {
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Default, const N: usize> Default for StaticBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for StaticBuffer<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticBuffer<T, N> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<T, const N: usize> Sequence for StaticBuffer<T, N> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> SequenceMut for StaticBuffer<T, N> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
