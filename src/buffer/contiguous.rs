//! Contiguous ring buffer
//!
//! Storage is allocated once at construction and never shifts: only the
//! `start`/`end` cursors and the live count move, so every operation is O(1).

use super::{Ring, Variant};
use crate::errors::{BufferError, RingError};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// Fixed-capacity ring buffer over a slot array.
///
/// Live elements occupy `len` slots starting at `start`, wrapping modulo the
/// capacity. `end` is the next slot to write; when the buffer is full it
/// coincides with `start`. Slots outside the live window hold `None`.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    storage: Box<[Option<T>]>,
    start: usize, // oldest live element
    end: usize,   // next write position
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` elements.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            storage: (0..capacity.get()).map(|_| None).collect(),
            start: 0,
            end: 0,
            len: 0,
        }
    }

    /// Like [`RingBuffer::new`], rejecting a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, RingError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(RingError::InvalidCapacity(capacity))
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn wrap(&self, index: usize) -> usize {
        index % self.capacity()
    }

    /// Append `value` as the newest element.
    ///
    /// If the buffer is already full the oldest element is evicted and
    /// returned; `start` advances along with `end`.
    pub fn add(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            let old = self.storage[self.start].take();
            self.start = self.wrap(self.start + 1);
            trace!(capacity = self.capacity(), "buffer full, evicted oldest element");
            old
        } else {
            self.len += 1;
            None
        };
        self.storage[self.end] = Some(value);
        self.end = self.wrap(self.end + 1);
        evicted
    }

    /// Discard the oldest element.
    pub fn remove(&mut self) -> Result<(), BufferError> {
        self.pop().map(drop)
    }

    /// Remove and return the oldest element.
    pub fn pop(&mut self) -> Result<T, BufferError> {
        if self.len == 0 {
            debug!("pop on empty buffer");
            return Err(BufferError::EmptyBuffer);
        }
        let value = self.storage[self.start]
            .take()
            .ok_or(BufferError::EmptyBuffer)?;
        self.start = self.wrap(self.start + 1);
        self.len -= 1;
        Ok(value)
    }

    /// Borrow the oldest element.
    pub fn peek(&self) -> Result<&T, BufferError> {
        self.get(0)
    }

    /// Borrow the element `offset` positions after the oldest one.
    ///
    /// An empty buffer reports [`BufferError::EmptyBuffer`] regardless of the
    /// offset; otherwise a negative offset or one at or past `len` reports
    /// [`BufferError::OutOfRange`].
    pub fn get(&self, offset: isize) -> Result<&T, BufferError> {
        if self.len == 0 {
            debug!(offset, "get on empty buffer");
            return Err(BufferError::EmptyBuffer);
        }
        let index = usize::try_from(offset)
            .ok()
            .filter(|&i| i < self.len)
            .ok_or(BufferError::OutOfRange {
                offset,
                len: self.len,
            })?;
        // Live slots are always occupied.
        self.storage[self.wrap(self.start + index)]
            .as_ref()
            .ok_or(BufferError::EmptyBuffer)
    }

    /// Drop every live element and reset the cursors.
    pub fn clear(&mut self) {
        self.storage.iter_mut().for_each(|slot| *slot = None);
        self.start = 0;
        self.end = 0;
        self.len = 0;
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}

impl<T> Ring<T> for RingBuffer<T> {
    fn add(&mut self, value: T) -> Option<T> {
        RingBuffer::add(self, value)
    }

    fn remove(&mut self) -> Result<(), BufferError> {
        RingBuffer::remove(self)
    }

    fn pop(&mut self) -> Result<T, BufferError> {
        RingBuffer::pop(self)
    }

    fn peek(&self) -> Result<&T, BufferError> {
        RingBuffer::peek(self)
    }

    fn try_get(&self, offset: isize) -> Option<Result<&T, BufferError>> {
        Some(RingBuffer::get(self, offset))
    }

    fn clear(&mut self) {
        RingBuffer::clear(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }

    fn variant(&self) -> Variant {
        Variant::Contiguous
    }
}
