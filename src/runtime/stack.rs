use crate::config::{DEFAULT_STACK_CAPACITY, MAX_VIEW_SIZE};
use crate::error::{Error, Result};
use crate::runtime::Snapshot;

/// Fixed-capacity LIFO stack of numbers
///
/// The capacity bound is part of the calculator's contract: pushing onto a
/// full stack fails with [`Error::StackOverflow`] and leaves the contents as
/// they were. Popping or peeking an empty stack returns `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedStack {
    /// Values, bottom first
    values: Vec<f64>,
    /// Maximum number of values
    capacity: usize,
}

impl BoundedStack {
    /// Creates an empty stack with the default capacity of 1024
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    /// Creates an empty stack holding at most `capacity` values
    ///
    /// Storage grows on demand; only the default capacity is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedStack {
            values: Vec::with_capacity(capacity.min(DEFAULT_STACK_CAPACITY)),
            capacity,
        }
    }

    /// Pushes a value as the new top
    pub fn push(&mut self, value: f64) -> Result<()> {
        if self.is_full() {
            return Err(Error::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        tracing::trace!(value, depth = self.values.len(), "push");
        Ok(())
    }

    /// Removes and returns the top value
    pub fn pop(&mut self) -> Option<f64> {
        let value = self.values.pop();
        tracing::trace!(?value, depth = self.values.len(), "pop");
        value
    }

    /// Returns the top value without removing it
    pub fn peek(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Removes the two top values as `(a, b)`, where `b` was the top
    ///
    /// Either both values are taken or, with fewer than two on the stack,
    /// none are.
    pub fn pop_pair(&mut self) -> Option<(f64, f64)> {
        if self.values.len() < 2 {
            return None;
        }
        let b = self.pop()?;
        let a = self.pop()?;
        Some((a, b))
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of values on the stack
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether another push would overflow
    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    /// Maximum number of values
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Values from bottom to top
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// View of the `view_size` most recent values, deepest first
    ///
    /// Slots beyond the current depth are filled with `0.0`. The view is
    /// never wider than [`MAX_VIEW_SIZE`].
    pub fn snapshot(&self, view_size: usize) -> Snapshot {
        let slots = (1..=view_size.min(MAX_VIEW_SIZE))
            .rev()
            .map(|pos| {
                if pos <= self.values.len() {
                    self.values[self.values.len() - pos]
                } else {
                    0.0
                }
            })
            .collect();

        Snapshot {
            slots,
            depth: self.values.len(),
        }
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::new()
    }
}
