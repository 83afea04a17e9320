//! Observability
//!
//! Structured logging for buffer operations and the command-line harness.

pub mod telemetry;
