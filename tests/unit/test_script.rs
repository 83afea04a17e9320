//! Script runner tests across both variants

use ringfifo::script::{execute, parse_ops, Outcome};
use ringfifo::{build, BufferError, Variant};
use std::num::NonZeroUsize;

fn run(variant: Variant, capacity: usize, tokens: &[&str]) -> Vec<Outcome> {
    let mut ring = build::<i64>(variant, NonZeroUsize::new(capacity).unwrap());
    let ops = parse_ops(tokens).unwrap();
    execute(ring.as_mut(), &ops)
        .into_iter()
        .map(|step| step.outcome)
        .collect()
}

#[test]
fn test_round_trip_on_both_variants() {
    for variant in [Variant::Contiguous, Variant::Linked] {
        let outcomes = run(variant, 1, &["add:42", "pop", "pop"]);
        assert_eq!(outcomes[1], Outcome::Value { value: 42 });
        assert_eq!(outcomes[2].error(), Some(BufferError::EmptyBuffer));
    }
}

#[test]
fn test_clear_then_len() {
    for variant in [Variant::Contiguous, Variant::Linked] {
        let outcomes = run(variant, 3, &["add:1", "add:2", "clear", "len", "peek"]);
        assert_eq!(outcomes[3], Outcome::Length { len: 0 });
        assert_eq!(outcomes[4].error(), Some(BufferError::EmptyBuffer));
    }
}

#[test]
fn test_indexed_get_differs_by_variant() {
    let contiguous = run(Variant::Contiguous, 2, &["add:1", "add:2", "get:1"]);
    assert_eq!(contiguous[2], Outcome::Value { value: 2 });

    let linked = run(Variant::Linked, 2, &["add:1", "add:2", "get:1"]);
    assert_eq!(linked[2], Outcome::Unsupported);
}
