//! Stable status codes
//!
//! The numeric values are part of the foreign-function contract and must
//! never change.

use crate::Result;
use core::fmt;

/// Outcome of an ECDH operation as a stable integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Operation completed
    Success = 0,
    /// Entropy could not be supplied
    RandomFailure = -1,
    /// Peer public key rejected
    InvalidPublicKey = -2,
    /// Private key rejected
    InvalidPrivateKey = -3,
    /// Output storage missing or too small
    MemoryFailure = -4,
}

impl Status {
    /// The integer code
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Parse an integer code; unknown values yield `None`
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            -1 => Some(Self::RandomFailure),
            -2 => Some(Self::InvalidPublicKey),
            -3 => Some(Self::InvalidPrivateKey),
            -4 => Some(Self::MemoryFailure),
            _ => None,
        }
    }

    /// True for [`Status::Success`]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl<T> From<Result<T>> for Status {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => e.status(),
        }
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::RandomFailure => "random source failure",
            Self::InvalidPublicKey => "invalid public key",
            Self::InvalidPrivateKey => "invalid private key",
            Self::MemoryFailure => "memory failure",
        };
        write!(f, "{} ({})", name, self.code())
    }
}
