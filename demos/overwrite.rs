//! Example: keep the last few readings from a stream
//!
//! Run with: cargo run --example overwrite

use ringfifo::{BufferError, LinkedRingBuffer, RingBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut recent = RingBuffer::with_capacity(3)?;
    for reading in [12.5, 13.0, 12.8, 14.1, 15.0] {
        if let Some(dropped) = recent.add(reading) {
            println!("dropped {dropped}");
        }
    }

    for offset in 0..recent.len() as isize {
        println!("reading[{offset}] = {}", recent.get(offset)?);
    }
    match recent.get(3) {
        Err(BufferError::OutOfRange { offset, len }) => {
            println!("offset {offset} is past the {len} readings kept")
        }
        other => println!("unexpected: {other:?}"),
    }

    let mut log = LinkedRingBuffer::with_capacity(2)?;
    log.add("boot");
    log.add("ready");
    log.add("serving");
    while let Ok(line) = log.pop() {
        println!("log: {line}");
    }

    Ok(())
}
