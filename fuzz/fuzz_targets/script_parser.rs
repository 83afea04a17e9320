#![no_main]

use libfuzzer_sys::fuzz_target;
use ringfifo::script::{execute, parse_ops};
use ringfifo::{build, Variant};
use std::num::NonZeroUsize;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if let Ok(ops) = parse_ops(&tokens) {
        let mut ring = build::<i64>(Variant::Contiguous, NonZeroUsize::new(4).unwrap());
        let steps = execute(ring.as_mut(), &ops);
        assert_eq!(steps.len(), ops.len());
    }
});
