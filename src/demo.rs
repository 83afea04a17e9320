//! Demonstration scenarios
//!
//! Two fixed scripts that exercise the boundary behavior of a buffer: a
//! capacity-1 buffer that is read while empty and then overwritten, and a
//! capacity-4 buffer that is filled, overflowed and drained. Each scenario
//! returns the lines to print.

use crate::buffer::{build, Ring, Variant};
use crate::errors::BufferError;
use crate::observability::telemetry::scenario_span;
use std::num::NonZeroUsize;
use tracing::info;

pub const SCENARIO_ONE_CAPACITY: NonZeroUsize = NonZeroUsize::MIN;
pub const SCENARIO_TWO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => panic!("scenario capacity must be non-zero"),
};

const EMPTY: &str = "buffer is empty";
const NO_INDEXING: &str = "indexed access not supported";

fn show(result: Result<&i64, BufferError>, on_err: &str) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(_) => on_err.to_string(),
    }
}

fn show_indexed(ring: &dyn Ring<i64>, offset: isize, on_err: &str) -> String {
    match ring.try_get(offset) {
        Some(result) => show(result, on_err),
        None => NO_INDEXING.to_string(),
    }
}

fn pop_line(ring: &mut dyn Ring<i64>) -> String {
    match ring.pop() {
        Ok(value) => value.to_string(),
        Err(_) => EMPTY.to_string(),
    }
}

/// Read and drain an empty buffer, then add twice past its capacity.
pub fn scenario_one(ring: &mut dyn Ring<i64>) -> Vec<String> {
    let span = scenario_span("one", &ring.variant().to_string(), ring.capacity());
    let _enter = span.enter();

    let mut lines = vec![show(ring.peek(), EMPTY)];
    lines.push(pop_line(ring));
    ring.add(2);
    lines.push(show(ring.peek(), EMPTY));
    lines.push(show_indexed(ring, 1, "no second element yet"));
    ring.add(3);
    lines.push(pop_line(ring));
    lines
}

/// Fill, probe out-of-range offsets, overflow by one, then drain past empty.
pub fn scenario_two(ring: &mut dyn Ring<i64>) -> Vec<String> {
    let span = scenario_span("two", &ring.variant().to_string(), ring.capacity());
    let _enter = span.enter();

    let mut lines = Vec::new();
    for value in 1..=3 {
        ring.add(value);
    }
    lines.push(show(ring.peek(), EMPTY));
    lines.push(show_indexed(ring, 3, "fewer than 4 elements"));
    ring.add(4);
    lines.push(show_indexed(ring, 3, "fewer than 4 elements"));
    lines.push(show_indexed(ring, 4, "fewer than 5 elements"));
    if let Some(evicted) = ring.add(5) {
        info!(evicted, "overflow evicted oldest element");
    }
    lines.push(show(ring.peek(), EMPTY));
    ring.remove().ok();
    for _ in 0..4 {
        lines.push(pop_line(ring));
    }
    lines
}

/// Run both scenarios on fresh buffers of the given variant.
pub fn run_scenarios(variant: Variant) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", variant)];

    let mut ring = build::<i64>(variant, SCENARIO_ONE_CAPACITY);
    lines.extend(scenario_one(ring.as_mut()));
    lines.push(String::new());

    let mut ring = build::<i64>(variant, SCENARIO_TWO_CAPACITY);
    lines.extend(scenario_two(ring.as_mut()));
    lines.push(String::new());

    lines
}
