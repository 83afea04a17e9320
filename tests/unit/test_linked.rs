//! Linked buffer tests
//!
//! Tests cover:
//! - FIFO order and eviction through the head
//! - Empty-buffer signaling
//! - Non-Copy payloads

use ringfifo::{BufferError, LinkedRingBuffer, RingError};
use std::num::NonZeroUsize;

fn buffer<T>(capacity: usize) -> LinkedRingBuffer<T> {
    LinkedRingBuffer::new(NonZeroUsize::new(capacity).unwrap())
}

mod basic_tests {
    use super::*;

    #[test]
    fn test_fresh_buffer_signals_empty() {
        let mut rb = buffer::<i32>(1);
        assert_eq!(rb.peek(), Err(BufferError::EmptyBuffer));
        assert_eq!(rb.remove(), Err(BufferError::EmptyBuffer));
        assert_eq!(rb.pop(), Err(BufferError::EmptyBuffer));
    }

    #[test]
    fn test_zero_capacity_is_an_error() {
        assert!(matches!(
            LinkedRingBuffer::<i32>::with_capacity(0),
            Err(RingError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_capacity_one_scenario() {
        let mut rb = buffer(1);
        rb.add(7);
        assert_eq!(rb.peek(), Ok(&7));
        rb.add(9);
        assert_eq!(rb.peek(), Ok(&9));
        assert_eq!(rb.len(), 1);
    }

    #[test]
    fn test_peek_then_remove_equals_pop() {
        let mut a = buffer(3);
        let mut b = buffer(3);
        for i in 0..5 {
            a.add(i);
            b.add(i);
        }
        while let Ok(&head) = a.peek() {
            a.remove().unwrap();
            assert_eq!(b.pop(), Ok(head));
        }
        assert!(b.is_empty());
    }
}

mod overflow_tests {
    use super::*;

    #[test]
    fn test_capacity_four_drain_order() {
        let mut rb = buffer(4);
        for i in 1..=5 {
            rb.add(i);
        }
        assert_eq!(rb.len(), 4);
        assert_eq!(rb.peek(), Ok(&2));
        rb.remove().unwrap();
        assert_eq!(rb.pop(), Ok(3));
        assert_eq!(rb.pop(), Ok(4));
        assert_eq!(rb.pop(), Ok(5));
        assert_eq!(rb.pop(), Err(BufferError::EmptyBuffer));
    }

    #[test]
    fn test_add_returns_evicted_values() {
        let mut rb = buffer(2);
        assert_eq!(rb.add("a"), None);
        assert_eq!(rb.add("b"), None);
        assert_eq!(rb.add("c"), Some("a"));
        assert_eq!(rb.add("d"), Some("b"));
    }

    #[test]
    fn test_owned_string_payloads() {
        let mut rb = buffer(2);
        for word in ["alpha", "beta", "gamma"] {
            rb.add(word.to_string());
        }
        assert_eq!(rb.pop().as_deref(), Ok("beta"));
        assert_eq!(rb.pop().as_deref(), Ok("gamma"));
    }
}
