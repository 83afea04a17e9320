//! Unit tests for ringfifo modules
//!
//! These tests drive the public API of each buffer variant.

mod test_config;
mod test_contiguous;
mod test_linked;
mod test_script;
