//! Fixed-capacity array with a logical length and clamped indexing.
//!
//! All memory lives inline and is initialized up front; nothing is allocated
//! during the lifetime of the array. Slots past the logical length hold either
//! `T::default()` or the fill value the array was created with.
//!
//! Indexing never panics: an index at or past `N` is redirected to the last
//! slot and a diagnostic is emitted.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use kioku_check::{Diagnostic, PreconditionError, Result, kioku_assert, report};

use crate::{Sequence, SequenceMut};

const NAME: &str = "StaticArray";

pub struct StaticArray<T, const N: usize> {
    data: [T; N],
    len: usize,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(StaticArray<u64, 4>, [usize; 5]);

impl<T: Default, const N: usize> StaticArray<T, N> {
    /// An empty array whose slots all hold `T::default()`.
    pub fn new() -> Self {
        const { assert!(N > 0, "StaticArray capacity must be positive") };
        Self {
            data: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    /// Builds an array holding `elems`; the remaining slots are defaulted.
    ///
    /// `M <= N` is checked at compile time.
    pub fn from_array<const M: usize>(elems: [T; M]) -> Self {
        const { assert!(M <= N, "source array does not fit in the capacity") };
        let mut out = Self::new();
        for (slot, elem) in out.data.iter_mut().zip(elems) {
            *slot = elem;
        }
        out.len = M;
        out
    }
}

impl<T: Clone, const N: usize> StaticArray<T, N> {
    /// An empty array with every backing slot set to `fill`.
    ///
    /// The size is still zero; the fill only pre-seeds the unused tail.
    pub fn create_fill(fill: T) -> Self {
        const { assert!(N > 0, "StaticArray capacity must be positive") };
        Self {
            data: core::array::from_fn(|_| fill.clone()),
            len: 0,
        }
    }

    fn fill_rest(&mut self, fill: T) {
        self.data[self.len..].fill(fill);
    }
}

impl<T: Clone + Default + PartialEq, const N: usize> StaticArray<T, N> {
    /// Widens a smaller array into this capacity.
    ///
    /// The `other.len()` elements are copied; when `fill` differs from
    /// `T::default()` it is written into every slot past them. `M < N` is
    /// checked at compile time, use [`Clone`] for equal capacities.
    pub fn create_from<const M: usize>(other: &StaticArray<T, M>, fill: T) -> Self {
        const { assert!(M < N, "create_from must widen; clone equal capacities instead") };
        let mut out = Self::new();
        out.data[..other.len].clone_from_slice(other.as_slice());
        out.len = other.len;
        if fill != T::default() {
            out.fill_rest(fill);
        }
        out
    }

    /// Deep copy that back-fills the unused tail with `fill` when it differs
    /// from `T::default()`.
    pub fn clone_with_fill(&self, fill: T) -> Self {
        let mut out = self.clone();
        if fill != T::default() {
            out.fill_rest(fill);
        }
        out
    }

    /// Copies a non-empty sequence of at most `N` elements and writes `fill`
    /// into the remaining slots.
    ///
    /// # Panics
    ///
    /// When `source` is empty or longer than `N`.
    #[track_caller]
    pub fn from_sequence<S>(source: &S, fill: T) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let src = source.as_slice();
        kioku_assert!(!src.is_empty());
        kioku_assert!(src.len() <= N);
        Self::copy_from(src, fill)
    }

    /// Fallible form of [`from_sequence`](Self::from_sequence).
    pub fn try_from_sequence<S>(source: &S, fill: T) -> Result<Self>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let src = source.as_slice();
        if src.is_empty() {
            return Err(PreconditionError::ZeroSize);
        }
        if src.len() > N {
            return Err(PreconditionError::CapacityExceeded {
                len: src.len(),
                capacity: N,
            });
        }
        Ok(Self::copy_from(src, fill))
    }

    fn copy_from(src: &[T], fill: T) -> Self {
        let mut out = Self::new();
        out.data[..src.len()].clone_from_slice(src);
        out.len = src.len();
        out.fill_rest(fill);
        out
    }
}

impl<T, const N: usize> StaticArray<T, N> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn clamp(idx: usize) -> usize {
        if idx < N {
            return idx;
        }
        report(Diagnostic::OutOfBounds {
            container: NAME,
            op: "at",
            idx,
        });
        N - 1
    }

    /// Reads any backing slot; indices `>= N` are clamped to `N - 1`.
    ///
    /// Slots between the logical length and `N` are readable and hold their
    /// fill value.
    pub fn at(&self, idx: usize) -> &T {
        &self.data[Self::clamp(idx)]
    }

    /// Mutable form of [`at`](Self::at), with the same clamping.
    pub fn at_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[Self::clamp(idx)]
    }

    /// Appends `value`, or reports and drops it when the array is full.
    pub fn push_back(&mut self, value: T)
    where
        T: fmt::Debug,
    {
        if self.len < N {
            self.data[self.len] = value;
            self.len += 1;
        } else {
            report(Diagnostic::CapacityFull {
                container: NAME,
                op: "push_back",
                value: &value,
            });
        }
    }

    /// Removes the last element, leaving `T::default()` in its slot.
    ///
    /// Popping an empty array reports and returns `None`.
    pub fn pop_back(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.len == 0 {
            report(Diagnostic::Empty {
                container: NAME,
                op: "pop_back",
            });
            return None;
        }
        self.len -= 1;
        Some(core::mem::take(&mut self.data[self.len]))
    }

    /// The occupied prefix.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// All `N` backing slots, including the unused tail.
    pub fn backing(&self) -> &[T; N] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default, const N: usize> Default for StaticArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize, const M: usize> From<[T; M]> for StaticArray<T, N> {
    fn from(elems: [T; M]) -> Self {
        Self::from_array(elems)
    }
}

impl<T: Clone, const N: usize> Clone for StaticArray<T, N> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticArray")
            .field("elements", &self.as_slice())
            .field("capacity", &N)
            .finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for StaticArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        Ok(())
    }
}

/// Logical equality: only the occupied prefixes are compared.
impl<T: PartialEq, const N: usize, const M: usize> PartialEq<StaticArray<T, M>>
    for StaticArray<T, N>
{
    fn eq(&self, other: &StaticArray<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for StaticArray<T, N> {}

impl<T, const N: usize> Index<usize> for StaticArray<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        self.at(idx)
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticArray<T, N> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        self.at_mut(idx)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> Sequence for StaticArray<T, N> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        StaticArray::as_slice(self)
    }
}

impl<T, const N: usize> SequenceMut for StaticArray<T, N> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        StaticArray::as_mut_slice(self)
    }
}
