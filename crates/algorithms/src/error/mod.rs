//! Error handling for cryptographic primitives

use core::fmt;

/// The error type for cryptographic primitives
///
/// These errors describe what went wrong inside the arithmetic. The key
/// agreement layer decides which public error each one becomes, because a
/// malformed scalar means something different from a malformed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An entropy source could not deliver the requested bytes
    Entropy {
        /// Source that failed
        source: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Short human-readable reason, suitable for a higher-level error
    pub fn reason(&self) -> &'static str {
        match self {
            Error::Parameter { reason, .. } => reason,
            Error::Length { .. } => "wrong encoding length",
            Error::Entropy { .. } => "entropy unavailable",
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Entropy { source } => {
                write!(f, "Entropy source {} failed", source)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
