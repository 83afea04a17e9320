//! Operation scripts
//!
//! A script is a sequence of tokens such as `add:3 add:4 pop get:1` applied in
//! order to one buffer. Failing operations are recorded and the script keeps
//! going, since a failed call never changes the buffer.

use crate::buffer::Ring;
use crate::errors::{self, BufferError, RingError};
use crate::observability::telemetry::{record_step, sanitize_for_log, script_span};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One buffer operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    Remove,
    Pop,
    Peek,
    Get(isize),
    Len,
    Clear,
}

impl FromStr for Op {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        // Echoed back in error messages, so escape terminal control bytes.
        let token = sanitize_for_log(raw);
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (raw, None),
        };
        let name = name.trim().to_lowercase();
        let bad_arg = |arg: &str| {
            RingError::Script(format!(
                "invalid argument '{}' in '{}'",
                sanitize_for_log(arg),
                token
            ))
        };

        match (name.as_str(), arg) {
            ("add", Some(arg)) => arg.parse().map(Op::Add).map_err(|_| bad_arg(arg)),
            ("get", Some(arg)) => arg.parse().map(Op::Get).map_err(|_| bad_arg(arg)),
            ("get", None) | ("peek", None) => Ok(Op::Peek),
            ("remove", None) => Ok(Op::Remove),
            ("pop", None) => Ok(Op::Pop),
            ("len", None) => Ok(Op::Len),
            ("clear", None) => Ok(Op::Clear),
            ("add", None) => Err(RingError::Script(format!(
                "'{}' needs a value, e.g. add:5",
                token
            ))),
            ("remove" | "pop" | "peek" | "len" | "clear", Some(_)) => Err(RingError::Script(
                format!("'{}' takes no argument", token),
            )),
            _ => Err(RingError::Script(format!("unknown operation '{}'", token))),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add(v) => write!(f, "add:{}", v),
            Op::Remove => write!(f, "remove"),
            Op::Pop => write!(f, "pop"),
            Op::Peek => write!(f, "peek"),
            Op::Get(offset) => write!(f, "get:{}", offset),
            Op::Len => write!(f, "len"),
            Op::Clear => write!(f, "clear"),
        }
    }
}

/// Parse every token, failing on the first bad one.
pub fn parse_ops<S: AsRef<str>>(tokens: &[S]) -> errors::Result<Vec<Op>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Result of applying one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Added {
        evicted: Option<i64>,
    },
    Value {
        value: i64,
    },
    Length {
        len: usize,
    },
    Error {
        #[serde(flatten)]
        error: BufferError,
    },
    Unsupported,
}

impl From<BufferError> for Outcome {
    fn from(error: BufferError) -> Self {
        Outcome::Error { error }
    }
}

impl Outcome {
    /// The buffer error, if this step failed.
    pub fn error(&self) -> Option<BufferError> {
        match self {
            Outcome::Error { error } => Some(*error),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "ok"),
            Outcome::Added { evicted: None } => write!(f, "ok"),
            Outcome::Added {
                evicted: Some(old),
            } => write!(f, "ok (evicted {})", old),
            Outcome::Value { value } => write!(f, "{}", value),
            Outcome::Length { len } => write!(f, "len {}", len),
            Outcome::Error { error } => write!(f, "error: {}", error),
            Outcome::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// One executed script step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    pub op: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.op, self.outcome)
    }
}

/// Apply a single operation.
pub fn apply(ring: &mut dyn Ring<i64>, op: Op) -> Outcome {
    let result = match op {
        Op::Add(value) => Ok(Outcome::Added {
            evicted: ring.add(value),
        }),
        Op::Remove => ring.remove().map(|()| Outcome::Done),
        Op::Pop => ring.pop().map(|value| Outcome::Value { value }),
        Op::Peek => ring.peek().map(|&value| Outcome::Value { value }),
        Op::Get(offset) => match ring.try_get(offset) {
            Some(result) => result.map(|&value| Outcome::Value { value }),
            None => return Outcome::Unsupported,
        },
        Op::Len => Ok(Outcome::Length { len: ring.len() }),
        Op::Clear => {
            ring.clear();
            Ok(Outcome::Done)
        }
    };
    result.unwrap_or_else(Outcome::from)
}

/// Apply every operation in order and report each outcome.
pub fn execute(ring: &mut dyn Ring<i64>, ops: &[Op]) -> Vec<Step> {
    let span = script_span(&ring.variant().to_string(), ring.capacity(), ops.len());
    let _enter = span.enter();

    ops.iter()
        .enumerate()
        .map(|(index, &op)| {
            let outcome = apply(ring, op);
            let op = op.to_string();
            record_step(index, &op, &outcome.to_string());
            Step { index, op, outcome }
        })
        .collect()
}
