use kioku_check::{Diagnostic, report};

use crate::GrowableBuffer;

/// FIFO queue over a [`GrowableBuffer`].
///
/// Elements live in `front..back`. When the back reaches the end of the
/// buffer, consumed front slots are reclaimed by shifting if they make up at
/// least half of it; otherwise the buffer doubles.
pub struct Queue<T> {
    data: GrowableBuffer<T>,
    front: usize,
    back: usize,
}

impl<T: Default> Queue<T> {
    pub const INITIAL_CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self {
            data: GrowableBuffer::new(Self::INITIAL_CAPACITY),
            front: 0,
            back: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.back == self.data.len() {
            self.make_room();
        }
        self.data[self.back] = value;
        self.back += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            report(Diagnostic::Empty {
                container: "Queue",
                op: "pop",
            });
            return None;
        }
        let value = core::mem::take(&mut self.data[self.front]);
        self.front += 1;
        if self.front == self.back {
            self.front = 0;
            self.back = 0;
        }
        Some(value)
    }

    fn make_room(&mut self) {
        if self.front * 2 >= self.data.len() {
            self.data.as_mut_slice().rotate_left(self.front);
            self.back -= self.front;
            self.front = 0;
        } else {
            let grown = self.data.len() * 2;
            tracing::debug!(target: "kioku::dstruct", from = self.data.len(), to = grown, "growing queue");
            self.data.reallocate(grown);
        }
    }
}

impl<T> Queue<T> {
    pub fn peek(&self) -> Option<&T> {
        (!self.is_empty()).then(|| &self.data[self.front])
    }

    pub fn len(&self) -> usize {
        self.back - self.front
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl<T: Default> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(&self.data.as_slice()[self.front..self.back])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kioku_check::capture::capture_diagnostics;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_in_first_out() {
        let mut queue = Queue::new();
        for v in 1..=5 {
            queue.push(v);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some(&1));
        let popped: Vec<_> = core::iter::from_fn(|| queue.pop()).take(5).collect();
        assert_eq!(popped, vec![1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn reclaims_consumed_slots_before_growing() {
        let mut queue = Queue::<i32>::new();
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.pop(), Some(1));
        queue.push(3);
        assert_eq!(queue.capacity(), 2);
        assert_eq!(format!("{queue:?}"), "[2, 3]");

        queue.push(4);
        assert_eq!(queue.capacity(), 4);
        assert_eq!(format!("{queue:?}"), "[2, 3, 4]");
    }

    #[test]
    fn interleaved_push_pop_keeps_order() {
        let mut queue = Queue::<u32>::new();
        let mut expected = 0;
        for round in 0..50 {
            queue.push(round * 2);
            queue.push(round * 2 + 1);
            assert_eq!(queue.pop(), Some(expected));
            expected += 1;
        }
        while let Some(v) = queue.pop() {
            assert_eq!(v, expected);
            expected += 1;
        }
        assert_eq!(expected, 100);
    }

    #[test]
    fn pop_empty_is_reported() {
        let mut queue = Queue::<i32>::new();
        let (popped, logs) = capture_diagnostics(|| queue.pop());
        assert_eq!(popped, None);
        assert!(logs.contains("[Queue] pop(): Queue is empty"), "{logs}");
    }
}
