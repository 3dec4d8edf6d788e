//! # Growable Buffer
//!
//! Append-only, 0-indexed sequence with an explicit amortized growth policy.
//! Used for the instruction stream, the line table runs, and the constant pool.
//!
//! The logical capacity follows [`Config::next_capacity`] (0, 8, 16, 32, ...)
//! regardless of any slack the allocator hands back. Slots in
//! `[len, capacity)` are never readable.

use crate::config::{Config, ConfigError};
use std::ops::Index;
use std::slice;

#[derive(Clone, Debug)]
pub struct GrowableBuffer<T> {
    items: Vec<T>,
    capacity: usize,
    config: Config,
}

impl<T> GrowableBuffer<T> {
    /// Create an empty buffer (no storage allocated)
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            config: Config::DEFAULT,
        }
    }

    /// Create an empty buffer with a custom growth policy
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            items: Vec::new(),
            capacity: 0,
            config,
        })
    }

    /// Append `value`, growing first if the buffer is full.
    ///
    /// Returns the index the value was written at. Indices stay valid for
    /// the lifetime of the buffer (until [`free`](Self::free)).
    pub fn push(&mut self, value: T) -> usize {
        if self.items.len() == self.capacity {
            self.grow();
        }
        let index = self.items.len();
        self.items.push(value);
        index
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = self.config.next_capacity(old_capacity);
        // Allocation failure aborts inside Vec
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
        tracing::trace!(old_capacity, new_capacity, "buffer grown");
    }

    /// Release storage and return to the freshly created state.
    /// Freeing an empty buffer is a no-op.
    pub fn free(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity under the growth policy
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for GrowableBuffer<T> {
    // Equal contents; capacity and policy are not observable state
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
