//! Linked ring buffer
//!
//! Nodes are heap allocations reached through raw `NonNull` links. The
//! buffer owns every node in the chain starting at `head` and frees them
//! itself in `unlink_head` and `Drop`; `tail` aliases the last node for O(1)
//! append. There are no back pointers: elements only ever leave from the
//! head.

use super::{Ring, Variant};
use crate::errors::{BufferError, RingError};
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::ptr::NonNull;
use tracing::{debug, trace};

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// Fixed-capacity ring buffer over a singly linked chain.
///
/// Offers add, remove, pop and peek-oldest. There is no indexed access since
/// reaching an arbitrary element would require walking the chain.
pub struct LinkedRingBuffer<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    capacity: NonZeroUsize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedRingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` elements.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            capacity,
            _owns: PhantomData,
        }
    }

    /// Like [`LinkedRingBuffer::new`], rejecting a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, RingError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(RingError::InvalidCapacity(capacity))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append `value` as the newest element.
    ///
    /// A full buffer first evicts its head; the evicted value is returned.
    pub fn add(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            trace!(capacity = self.capacity(), "buffer full, evicting head node");
            self.unlink_head()
        } else {
            None
        };

        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));
        match self.tail {
            // SAFETY: `tail` is the last node of the chain this buffer owns.
            // It is reset to `None` whenever the chain empties, so a `Some`
            // tail is a live allocation, and `&mut self` rules out any other
            // reference into the chain.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        evicted
    }

    /// Discard the oldest element.
    pub fn remove(&mut self) -> Result<(), BufferError> {
        self.pop().map(drop)
    }

    /// Remove and return the oldest element.
    ///
    /// Same effect as [`LinkedRingBuffer::peek`] followed by
    /// [`LinkedRingBuffer::remove`].
    pub fn pop(&mut self) -> Result<T, BufferError> {
        self.unlink_head().ok_or_else(|| {
            debug!("pop on empty buffer");
            BufferError::EmptyBuffer
        })
    }

    /// Borrow the oldest element.
    pub fn peek(&self) -> Result<&T, BufferError> {
        self.values().next().ok_or(BufferError::EmptyBuffer)
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        while self.unlink_head().is_some() {}
    }

    fn unlink_head(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` came from `Box::leak` in `add` and is owned by this
        // buffer alone. It is detached from the chain right here, so it is
        // reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        // SAFETY: every link reachable from `head` is a live node owned by
        // this buffer, and `&self` keeps them from being freed meanwhile.
        std::iter::successors(self.head.map(|n| unsafe { &*n.as_ptr() }), |node| {
            node.next.map(|n| unsafe { &*n.as_ptr() })
        })
        .map(|node| &node.value)
    }
}

impl<T> Drop for LinkedRingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedRingBuffer<T> {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedRingBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("values", &DebugValues(self))
            .finish()
    }
}

struct DebugValues<'a, T>(&'a LinkedRingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugValues<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}

impl<T> Ring<T> for LinkedRingBuffer<T> {
    fn add(&mut self, value: T) -> Option<T> {
        LinkedRingBuffer::add(self, value)
    }

    fn remove(&mut self) -> Result<(), BufferError> {
        LinkedRingBuffer::remove(self)
    }

    fn pop(&mut self) -> Result<T, BufferError> {
        LinkedRingBuffer::pop(self)
    }

    fn peek(&self) -> Result<&T, BufferError> {
        LinkedRingBuffer::peek(self)
    }

    fn clear(&mut self) {
        LinkedRingBuffer::clear(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        LinkedRingBuffer::capacity(self)
    }

    fn variant(&self) -> Variant {
        Variant::Linked
    }
}
