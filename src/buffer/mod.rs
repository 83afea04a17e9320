//! Fixed-capacity ring buffers
//!
//! Two storage strategies behind one contract:
//! - [`RingBuffer`]: contiguous slots with start/end cursors, O(1) indexed peek
//! - [`LinkedRingBuffer`]: singly linked chain with head/tail, no indexed access
//!
//! Both are bounded FIFO sequences that evict their oldest element when a
//! value is added while full.

pub mod contiguous;
pub mod linked;

use crate::errors::{BufferError, RingError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

pub use contiguous::RingBuffer;
pub use linked::LinkedRingBuffer;

/// Storage strategy of a ring buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fixed-length slot array with modular cursors
    #[default]
    Contiguous,
    /// Singly linked node chain
    Linked,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Contiguous => write!(f, "contiguous"),
            Variant::Linked => write!(f, "linked"),
        }
    }
}

impl FromStr for Variant {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contiguous" | "array" => Ok(Variant::Contiguous),
            "linked" | "node" => Ok(Variant::Linked),
            other => Err(RingError::Config(format!(
                "unknown buffer variant '{}' (expected 'contiguous' or 'linked')",
                other
            ))),
        }
    }
}

/// Common contract of both ring buffer variants.
///
/// `add` never fails: on a full buffer it evicts and returns the oldest value.
/// Reads and removals on an empty buffer fail with [`BufferError::EmptyBuffer`]
/// and leave the buffer untouched.
pub trait Ring<T> {
    /// Append `value` as the newest element, returning the evicted oldest
    /// element if the buffer was full.
    fn add(&mut self, value: T) -> Option<T>;

    /// Discard the oldest element.
    fn remove(&mut self) -> Result<(), BufferError>;

    /// Remove and return the oldest element.
    fn pop(&mut self) -> Result<T, BufferError>;

    /// Borrow the oldest element.
    fn peek(&self) -> Result<&T, BufferError>;

    /// Indexed peek relative to the oldest element.
    ///
    /// Returns `None` when the variant has no indexed access.
    fn try_get(&self, _offset: isize) -> Option<Result<&T, BufferError>> {
        None
    }

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn variant(&self) -> Variant;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Build an empty ring buffer of the requested variant.
pub fn build<T: 'static>(variant: Variant, capacity: NonZeroUsize) -> Box<dyn Ring<T>> {
    match variant {
        Variant::Contiguous => Box::new(RingBuffer::new(capacity)),
        Variant::Linked => Box::new(LinkedRingBuffer::new(capacity)),
    }
}
