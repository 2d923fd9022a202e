//! Non-owning windows over contiguous storage.
//!
//! A view is a borrowed slice with a narrower, intention-revealing API: the
//! borrow checker ties it to the container it was created from, so a view can
//! never outlive its storage. [`View`] is read-only and `Copy`; [`ViewMut`]
//! writes through to the container.
//!
//! # Range narrowing
//!
//! `range(start, end)` accepts only `start < end < len`. The upper bound is
//! strict, so a narrowed view can never end at the last element of its
//! parent; `range(0, len)` is rejected just like `range(2, 2)`. Both are
//! treated as caller bugs and panic; use `try_range` to get a
//! [`PreconditionError`] instead.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use kioku_check::{PreconditionError, Result, kioku_assert};

use crate::{Cursor, Sequence, SequenceMut};

static_assertions::assert_eq_size!(View<'static, u64>, [usize; 2]);
static_assertions::assert_eq_size!(ViewMut<'static, u64>, [usize; 2]);

/// Read-only view over any [`Sequence`].
pub fn create_const_view<S>(source: &S) -> View<'_, S::Item>
where
    S: Sequence + ?Sized,
{
    View::new(source)
}

/// Read-write view over any [`SequenceMut`].
pub fn create_view<S>(source: &mut S) -> ViewMut<'_, S::Item>
where
    S: SequenceMut + ?Sized,
{
    ViewMut::new(source)
}

/// Empty [`Cursor`] spanning all of `source`.
pub fn create_cursor<S>(source: &mut S) -> Cursor<'_, S::Item>
where
    S: SequenceMut + ?Sized,
{
    Cursor::new(ViewMut::new(source))
}

#[track_caller]
fn assert_range(start: usize, end: usize, len: usize) {
    kioku_assert!(end > start);
    kioku_assert!(end < len);
}

fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if end > start && end < len {
        Ok(())
    } else {
        Err(PreconditionError::InvalidRange { start, end, len })
    }
}

pub struct View<'a, T> {
    data: &'a [T],
}

impl<'a, T> View<'a, T> {
    pub fn new<S>(source: &'a S) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
    {
        Self {
            data: source.as_slice(),
        }
    }

    pub const fn from_slice(data: &'a [T]) -> Self {
        Self { data }
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element at `idx`; out-of-range indices panic.
    pub fn at(&self, idx: usize) -> &'a T {
        &self.data[idx]
    }

    /// A narrower view over `start..end` of the same storage.
    ///
    /// # Panics
    ///
    /// Unless `start < end < self.len()`; see the [module docs](self).
    #[track_caller]
    pub fn range(&self, start: usize, end: usize) -> View<'a, T> {
        assert_range(start, end, self.len());
        View {
            data: &self.data[start..end],
        }
    }

    /// Fallible form of [`range`](Self::range).
    pub fn try_range(&self, start: usize, end: usize) -> Result<View<'a, T>> {
        check_range(start, end, self.len())?;
        Ok(View {
            data: &self.data[start..end],
        })
    }

    pub const fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("View").field(&self.data).finish()
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Sequence for View<'_, T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.data
    }
}

pub struct ViewMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> ViewMut<'a, T> {
    pub fn new<S>(source: &'a mut S) -> Self
    where
        S: SequenceMut<Item = T> + ?Sized,
    {
        Self {
            data: source.as_mut_slice(),
        }
    }

    pub fn from_slice(data: &'a mut [T]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn at(&self, idx: usize) -> &T {
        &self.data[idx]
    }

    pub fn at_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }

    /// Read-only narrowing; same rules as [`View::range`].
    #[track_caller]
    pub fn range(&self, start: usize, end: usize) -> View<'_, T> {
        assert_range(start, end, self.len());
        View {
            data: &self.data[start..end],
        }
    }

    /// Writable narrowing; same rules as [`View::range`].
    #[track_caller]
    pub fn range_mut(&mut self, start: usize, end: usize) -> ViewMut<'_, T> {
        assert_range(start, end, self.len());
        ViewMut {
            data: &mut self.data[start..end],
        }
    }

    pub fn try_range_mut(&mut self, start: usize, end: usize) -> Result<ViewMut<'_, T>> {
        check_range(start, end, self.len())?;
        Ok(ViewMut {
            data: &mut self.data[start..end],
        })
    }

    pub fn as_view(&self) -> View<'_, T> {
        View { data: &*self.data }
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewMut").field(&self.data).finish()
    }
}

impl<T> Index<usize> for ViewMut<'_, T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for ViewMut<'_, T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<'a, T> IntoIterator for ViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'b, T> IntoIterator for &'b mut ViewMut<'_, T> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T> Sequence for ViewMut<'_, T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T> SequenceMut for ViewMut<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GrowableBuffer, StaticBuffer};

    use pretty_assertions::assert_eq;

    fn alternating() -> StaticBuffer<i32, 10> {
        let mut b = StaticBuffer::new();
        for (i, slot) in b.as_mut_slice().iter_mut().enumerate() {
            let v = i as i32 + 1;
            *slot = if i % 2 == 0 { v } else { -v };
        }
        b
    }

    #[test]
    fn views_report_source_size() {
        let mut sb = StaticBuffer::<i32, 10>::new();
        assert_eq!(create_const_view(&sb).len(), 10);
        assert_eq!(create_view(&mut sb).len(), 10);

        let mut db = GrowableBuffer::<i32>::new(5);
        assert_eq!(create_const_view(&db).len(), 5);
        assert_eq!(create_view(&mut db).len(), 5);
    }

    #[test]
    fn range_and_at() {
        let b = alternating();
        let view = create_const_view(&b);

        let sub = view.range(3, 6);
        assert_eq!(sub.len(), 3);
        assert_eq!(sub.as_slice(), &[-4, 5, -6]);

        let sub_sub = sub.range(0, 2);
        assert_eq!(sub_sub.as_slice(), &[-4, 5]);

        let single = sub_sub.range(0, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(*single.at(0), -4);
    }

    #[test]
    fn view_points_into_source() {
        let mut b = StaticBuffer::<i32, 3>::new();
        let expected: *const i32 = &b[0];
        let mut view = create_view(&mut b);
        let got: *const i32 = view.at_mut(0);
        assert_eq!(got, expected);
    }

    #[test]
    fn writes_go_through_to_source() {
        let mut b = StaticBuffer::<i32, 10>::new();
        let mut view = create_view(&mut b);
        for (slot, value) in view.iter_mut().zip(1..) {
            *slot = value;
        }
        view.range_mut(2, 4)[0] = 30;
        assert_eq!(b.as_slice(), &[1, 2, 30, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    #[should_panic(expected = "end > start")]
    fn empty_range_is_fatal() {
        let b = GrowableBuffer::<i32>::new(4);
        let _ = create_const_view(&b).range(0, 0);
    }

    #[test]
    #[should_panic(expected = "end < len")]
    fn range_ending_at_len_is_fatal() {
        let b = GrowableBuffer::<i32>::new(4);
        let _ = create_const_view(&b).range(1, 4);
    }

    #[test]
    fn try_range_reports_bounds() {
        let b = GrowableBuffer::<i32>::new(4);
        let view = create_const_view(&b);
        assert_eq!(
            view.try_range(2, 1).unwrap_err(),
            PreconditionError::InvalidRange {
                start: 2,
                end: 1,
                len: 4
            }
        );
        assert!(view.try_range(0, 4).is_err());
        assert_eq!(view.try_range(1, 3).unwrap().len(), 2);
    }

    #[test]
    fn try_range_mut_reports_bounds_and_writes_through() {
        let mut data = [1, 2, 3, 4];
        let mut view = create_view(&mut data);
        assert_eq!(
            view.try_range_mut(0, 4).unwrap_err(),
            PreconditionError::InvalidRange {
                start: 0,
                end: 4,
                len: 4
            }
        );
        assert_eq!(
            view.try_range_mut(2, 1).unwrap_err(),
            PreconditionError::InvalidRange {
                start: 2,
                end: 1,
                len: 4
            }
        );

        let mut middle = view.try_range_mut(1, 3).unwrap();
        assert_eq!(middle.len(), 2);
        middle[0] = 20;
        assert_eq!(data, [1, 20, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "end < len")]
    fn range_mut_ending_at_len_is_fatal() {
        let mut b = GrowableBuffer::<i32>::new(4);
        let mut view = create_view(&mut b);
        let _ = view.range_mut(1, 4);
    }

    #[test]
    #[should_panic(expected = "end > start")]
    fn read_only_range_of_view_mut_checks_order() {
        let mut b = GrowableBuffer::<i32>::new(4);
        let view = create_view(&mut b);
        let _ = view.range(2, 2);
    }

    #[test]
    fn views_from_raw_slices() {
        let data = [5, 6, 7];
        let view = View::from_slice(&data);
        assert_eq!(view.len(), 3);
        assert_eq!(*view.at(2), 7);

        let mut storage = [0u8; 3];
        let mut view = ViewMut::from_slice(&mut storage);
        *view.at_mut(1) = 9;
        let shared = view.as_view();
        assert_eq!(shared.as_slice(), &[0, 9, 0]);
        assert_eq!(shared.range(0, 2).as_slice(), &[0, 9]);
        assert_eq!(storage, [0, 9, 0]);
    }

    #[test]
    fn narrowed_view_starts_at_offset() {
        let data = [10, 20, 30, 40, 50, 60];
        let view = create_const_view(&data);
        let sub = view.range(2, 5);
        let collected: Vec<_> = sub.into_iter().copied().collect();
        assert_eq!(collected, vec![30, 40, 50]);
    }
}
