use kioku_check::{Diagnostic, report};

use crate::GrowableBuffer;

/// LIFO stack over a [`GrowableBuffer`] that doubles when full.
///
/// Popping an empty stack is reported and yields `None`.
pub struct Stack<T> {
    data: GrowableBuffer<T>,
    top: usize,
}

impl<T: Default> Stack<T> {
    pub const INITIAL_CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self {
            data: GrowableBuffer::new(Self::INITIAL_CAPACITY),
            top: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.top == self.data.len() {
            let grown = self.data.len() * 2;
            tracing::debug!(target: "kioku::dstruct", from = self.data.len(), to = grown, "growing stack");
            self.data.reallocate(grown);
        }
        self.data[self.top] = value;
        self.top += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.top == 0 {
            report(Diagnostic::Empty {
                container: "Stack",
                op: "pop",
            });
            return None;
        }
        self.top -= 1;
        Some(core::mem::take(&mut self.data[self.top]))
    }
}

impl<T> Stack<T> {
    pub fn peek(&self) -> Option<&T> {
        self.top.checked_sub(1).map(|idx| &self.data[idx])
    }

    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl<T: Default> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(&self.data.as_slice()[..self.top])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kioku_check::capture::capture_diagnostics;
    use pretty_assertions::assert_eq;

    #[test]
    fn last_in_first_out() {
        let mut stack = Stack::new();
        for v in 1..=5 {
            stack.push(v);
        }
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.peek(), Some(&5));
        let popped: Vec<_> = core::iter::from_fn(|| stack.pop()).take(5).collect();
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn grows_by_doubling() {
        let mut stack = Stack::<u32>::new();
        assert_eq!(stack.capacity(), 2);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.capacity(), 2);
        stack.push(3);
        assert_eq!(stack.capacity(), 4);
        for v in 4..=9 {
            stack.push(v);
        }
        assert_eq!(stack.capacity(), 16);
        assert_eq!(stack.len(), 9);
    }

    #[test]
    fn pop_empty_is_reported() {
        let mut stack = Stack::<i32>::new();
        let (popped, logs) = capture_diagnostics(|| stack.pop());
        assert_eq!(popped, None);
        assert!(logs.contains("[Stack] pop(): Stack is empty"), "{logs}");
        assert_eq!(stack.peek(), None);
    }
}
