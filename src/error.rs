// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Configuration errors detected when slider parameters are constructed.
///
/// These are rejected before any drag event is processed; a slider that
/// was built successfully can never divide by zero while mapping values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The bounds cannot form a usable range (lower >= upper, or a
    /// non-finite bound).
    DegenerateRange { lower: f32, upper: f32 },

    /// The quantization step is not a positive, finite number.
    InvalidIncrement { step: f32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateRange { lower, upper } => {
                write!(
                    f,
                    "degenerate range: lower {} must be below upper {}",
                    lower, upper
                )
            }
            Error::InvalidIncrement { step } => {
                write!(
                    f,
                    "invalid increment: step {} must be positive and finite",
                    step
                )
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
