#![no_main]

use libfuzzer_sys::fuzz_target;
use ringfifo::{build, Variant};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

// First byte picks variant and capacity, the rest are operations.
fuzz_target!(|data: &[u8]| {
    let Some((&header, ops)) = data.split_first() else {
        return;
    };
    let variant = if header & 0x80 == 0 {
        Variant::Contiguous
    } else {
        Variant::Linked
    };
    let capacity = NonZeroUsize::new(usize::from(header & 0x0f) + 1).unwrap();
    let mut ring = build::<u8>(variant, capacity);
    let mut model = VecDeque::new();

    for &byte in ops {
        match byte % 4 {
            0 | 1 => {
                let evicted = if model.len() == capacity.get() {
                    model.pop_front()
                } else {
                    None
                };
                model.push_back(byte);
                assert_eq!(ring.add(byte), evicted);
            }
            2 => assert_eq!(ring.pop().ok(), model.pop_front()),
            _ => {
                let offset = isize::from(byte as i8) % 20;
                if let Some(result) = ring.try_get(offset) {
                    let expected = usize::try_from(offset).ok().and_then(|i| model.get(i));
                    assert_eq!(result.ok(), expected);
                }
            }
        }
        assert_eq!(ring.len(), model.len());
    }
});
