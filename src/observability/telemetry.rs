//! Telemetry
//!
//! Provides structured logging for buffer operations.
//! Features:
//! - One-time global subscriber installation (compact or JSON lines)
//! - Filter directives via `RINGFIFO_LOG`, config, or `--verbose`
//!   (`RINGFIFO_LOG` is folded into the config by the loader)
//! - Scenario and script-step spans for the harness

use crate::config::LogFormat;
use tracing::{debug, info_span, Span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "RINGFIFO_LOG";

/// Escape control characters in untrusted text before it is logged or
/// echoed back, e.g. raw script tokens from the command line.
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x1b' => out.push_str("\\e"),
            '\x00' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// Initialize tracing for `--verbose` runs
pub fn init_tracing_verbose(format: LogFormat) {
    init_tracing_with_filter("debug", format)
}

/// Initialize with custom filter string
pub fn init_tracing_with_filter(filter: &str, format: LogFormat) {
    // Skip if already initialized
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(filter_layer);

        let _ = match format {
            LogFormat::Compact => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };
    });
}

/// Span wrapping one demonstration scenario
pub fn scenario_span(scenario: &str, variant: &str, capacity: usize) -> Span {
    info_span!(
        "demo.scenario",
        scenario = scenario,
        variant = variant,
        capacity = capacity
    )
}

/// Span wrapping one script run
pub fn script_span(variant: &str, capacity: usize, steps: usize) -> Span {
    info_span!(
        "script.run",
        variant = variant,
        capacity = capacity,
        steps = steps
    )
}

/// Record the outcome of a single script step
pub fn record_step(index: usize, op: &str, outcome: &str) {
    debug!(
        step = index,
        op = op,
        outcome = outcome,
        "Script step applied"
    );
}

/// Initialize tracing for tests with a simple subscriber
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
