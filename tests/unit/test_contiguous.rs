//! Contiguous buffer tests
//!
//! Tests cover:
//! - FIFO order below and above capacity
//! - Empty-buffer and out-of-range signaling
//! - Cursor wrap-around

use ringfifo::{BufferError, RingBuffer, RingError};
use std::num::NonZeroUsize;

fn buffer(capacity: usize) -> RingBuffer<i32> {
    RingBuffer::new(NonZeroUsize::new(capacity).unwrap())
}

// ============================================================================
// Construction
// ============================================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_fresh_buffer_signals_empty() {
        let mut rb = buffer(1);
        assert_eq!(rb.peek(), Err(BufferError::EmptyBuffer));
        assert_eq!(rb.pop(), Err(BufferError::EmptyBuffer));
        assert_eq!(rb.remove(), Err(BufferError::EmptyBuffer));
    }

    #[test]
    fn test_zero_capacity_is_an_error() {
        assert!(matches!(
            RingBuffer::<i32>::with_capacity(0),
            Err(RingError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_default_capacity_is_one() {
        let mut rb = RingBuffer::default();
        rb.add(1);
        assert!(rb.is_full());
    }
}

// ============================================================================
// Overflow
// ============================================================================

mod overflow_tests {
    use super::*;

    #[test]
    fn test_capacity_four_scenario() {
        let mut rb = buffer(4);
        for i in 1..=5 {
            rb.add(i);
        }
        assert_eq!(rb.len(), 4);
        assert_eq!(rb.get(0), Ok(&2));
        assert_eq!(rb.get(3), Ok(&5));
        assert_eq!(rb.get(4), Err(BufferError::OutOfRange { offset: 4, len: 4 }));
    }

    #[test]
    fn test_capacity_one_scenario() {
        let mut rb = buffer(1);
        rb.add(7);
        assert_eq!(rb.peek(), Ok(&7));
        rb.add(9);
        assert_eq!(rb.peek(), Ok(&9));
    }

    #[test]
    fn test_k_extra_adds_evict_k_oldest() {
        let capacity = 5;
        let extra = 7;
        let mut rb = buffer(capacity);
        let evicted: Vec<i32> = (0..(capacity + extra) as i32)
            .filter_map(|i| rb.add(i))
            .collect();
        assert_eq!(evicted, (0..extra as i32).collect::<Vec<_>>());
        assert_eq!(rb.len(), capacity);
        let drained: Vec<i32> = std::iter::from_fn(|| rb.pop().ok()).collect();
        assert_eq!(drained, (extra as i32..(capacity + extra) as i32).collect::<Vec<_>>());
    }

    #[test]
    fn test_many_full_cycles_keep_newest_window() {
        let mut rb = buffer(3);
        for i in 0..1_000 {
            rb.add(i);
        }
        assert_eq!(rb.get(0), Ok(&997));
        assert_eq!(rb.get(1), Ok(&998));
        assert_eq!(rb.get(2), Ok(&999));
    }
}

// ============================================================================
// Error paths
// ============================================================================

mod error_path_tests {
    use super::*;

    #[test]
    fn test_empty_wins_over_out_of_range() {
        let rb = buffer(2);
        assert_eq!(rb.get(10), Err(BufferError::EmptyBuffer));
        assert_eq!(rb.get(-1), Err(BufferError::EmptyBuffer));
    }

    #[test]
    fn test_offset_equal_to_len_is_out_of_range() {
        let mut rb = buffer(4);
        rb.add(1);
        rb.add(2);
        assert_eq!(rb.get(2), Err(BufferError::OutOfRange { offset: 2, len: 2 }));
        assert_eq!(rb.get(-1), Err(BufferError::OutOfRange { offset: -1, len: 2 }));
    }

    #[test]
    fn test_failed_calls_leave_state_untouched() {
        let mut rb = buffer(2);
        rb.add(1);
        let _ = rb.get(5);
        let _ = rb.get(-3);
        assert_eq!(rb.len(), 1);
        assert_eq!(rb.pop(), Ok(1));
        assert_eq!(rb.pop(), Err(BufferError::EmptyBuffer));
        assert_eq!(rb.remove(), Err(BufferError::EmptyBuffer));
        rb.add(2);
        assert_eq!(rb.peek(), Ok(&2));
        assert_eq!(rb.len(), 1);
    }

    #[test]
    fn test_drain_then_refill() {
        let mut rb = buffer(3);
        for round in 0..4 {
            for i in 0..3 {
                rb.add(round * 10 + i);
            }
            for i in 0..3 {
                assert_eq!(rb.pop(), Ok(round * 10 + i));
            }
            assert!(rb.is_empty());
        }
    }
}
