use serde::Serialize;
use thiserror::Error;

/// Failure kinds signaled by buffer operations.
///
/// Every failing call leaves the buffer exactly as it was, so callers can
/// treat these as contract violations and carry on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BufferError {
    #[error("buffer is empty")]
    EmptyBuffer,

    #[error("offset {offset} out of range for buffer of length {len}")]
    OutOfRange { offset: isize, len: usize },
}

/// The crate-level error type.
#[derive(Error, Debug)]
pub enum RingError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("Invalid capacity {0}: capacity must be a positive integer")]
    InvalidCapacity(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, RingError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_BUFFER_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(ring_err) = e.downcast_ref::<RingError>() {
        return match ring_err {
            RingError::Config(_) | RingError::InvalidCapacity(_) => EXIT_CONFIG_ERROR,
            RingError::Buffer(_) => EXIT_BUFFER_ERROR,
            _ => EXIT_ERROR,
        };
    }

    // Direct enum unwraps fallback
    if e.downcast_ref::<BufferError>().is_some() {
        return EXIT_BUFFER_ERROR;
    }

    // Errors raised while loading config are wrapped with context
    if e.chain()
        .any(|cause| cause.downcast_ref::<toml::de::Error>().is_some())
    {
        return EXIT_CONFIG_ERROR;
    }

    EXIT_ERROR
}
