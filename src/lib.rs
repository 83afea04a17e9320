//! ringfifo - fixed-capacity ring buffers
//!
//! Two bounded FIFO containers that overwrite their oldest element when full:
//!
//! - **Contiguous**: slot array with start/end cursors, O(1) indexed peek
//! - **Linked**: singly linked node chain, peek-oldest only
//!
//! # Quick Start
//!
//! ```
//! use ringfifo::{BufferError, RingBuffer};
//!
//! let mut rb = RingBuffer::with_capacity(4)?;
//! for i in 1..=5 {
//!     rb.add(i);
//! }
//! assert_eq!(rb.len(), 4);
//! assert_eq!(rb.get(0), Ok(&2));
//! assert_eq!(rb.get(3), Ok(&5));
//! assert_eq!(rb.get(4), Err(BufferError::OutOfRange { offset: 4, len: 4 }));
//! # Ok::<(), ringfifo::RingError>(())
//! ```

// ─── Core ──────────────────────────────────────────────────────────
pub mod buffer;
pub mod errors;

// ─── Harness ───────────────────────────────────────────────────────
pub mod cli;
pub mod demo;
pub mod script;

// ─── Infrastructure ────────────────────────────────────────────────
pub mod config;
pub mod observability;

pub use buffer::{build, LinkedRingBuffer, Ring, RingBuffer, Variant};
pub use errors::{BufferError, RingError};
