use core::fmt;
use core::slice;

use kioku_check::{Diagnostic, report};

use crate::{Sequence, SequenceMut, ViewMut};

const NAME: &str = "Cursor";

/// Vector-like push/pop on top of a [`ViewMut`].
///
/// The cursor starts empty and fills the window from the front. It never
/// grows past the view: pushing into a full cursor and popping an empty one
/// are reported and ignored.
///
/// ```
/// use kioku_dstruct::{GrowableBuffer, create_cursor};
///
/// let mut buffer = GrowableBuffer::<i32>::new(2);
/// let mut cursor = create_cursor(&mut buffer);
/// cursor.push_back(4);
/// cursor.push_back(2);
/// assert!(cursor.is_full());
/// assert_eq!(cursor.as_slice(), &[4, 2]);
/// ```
pub struct Cursor<'a, T> {
    view: ViewMut<'a, T>,
    fill: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(view: ViewMut<'a, T>) -> Self {
        Self { view, fill: 0 }
    }

    /// Number of pushed elements.
    pub fn len(&self) -> usize {
        self.fill
    }

    pub fn is_empty(&self) -> bool {
        self.fill == 0
    }

    /// Length of the underlying view.
    pub fn capacity(&self) -> usize {
        self.view.len()
    }

    pub fn is_full(&self) -> bool {
        self.fill == self.view.len()
    }

    pub fn push_back(&mut self, value: T)
    where
        T: fmt::Debug,
    {
        if self.fill < self.view.len() {
            self.view[self.fill] = value;
            self.fill += 1;
        } else {
            report(Diagnostic::CapacityFull {
                container: NAME,
                op: "push_back",
                value: &value,
            });
        }
    }

    /// Removes the last pushed element and leaves `T::default()` behind.
    pub fn pop_back(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.fill == 0 {
            report(Diagnostic::Empty {
                container: NAME,
                op: "pop_back",
            });
            return None;
        }
        self.fill -= 1;
        Some(core::mem::take(&mut self.view[self.fill]))
    }

    /// Any slot of the underlying view, pushed or not.
    pub fn at(&self, idx: usize) -> &T {
        self.view.at(idx)
    }

    pub fn at_mut(&mut self, idx: usize) -> &mut T {
        self.view.at_mut(idx)
    }

    /// The pushed prefix.
    pub fn as_slice(&self) -> &[T] {
        &self.view.as_slice()[..self.fill]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.view.as_mut_slice()[..self.fill]
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Gives the view back, dropping the fill count.
    pub fn into_view(self) -> ViewMut<'a, T> {
        self.view
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("filled", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Sequence for Cursor<'_, T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        Cursor::as_slice(self)
    }
}

impl<T> SequenceMut for Cursor<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        Cursor::as_mut_slice(self)
    }
}
