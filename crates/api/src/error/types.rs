//! Error type definitions for key-agreement operations

use crate::types::Status;
use thiserror::Error;

/// Primary error type for ECDH operations
///
/// Every variant maps onto exactly one [`Status`] code. The `context` names
/// the operation that failed and `reason` the check that rejected its input;
/// neither ever carries key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Entropy could not be supplied
    #[error("{context}: random source failure")]
    RandomFailure { context: &'static str },

    /// Peer public key failed validation
    #[error("{context}: invalid public key ({reason})")]
    InvalidPublicKey {
        context: &'static str,
        reason: &'static str,
    },

    /// Private key failed validation
    #[error("{context}: invalid private key ({reason})")]
    InvalidPrivateKey {
        context: &'static str,
        reason: &'static str,
    },

    /// Output storage missing or too small
    #[error("{context}: memory failure ({reason})")]
    MemoryFailure {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for ECDH operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Stable status code for this error
    pub fn status(&self) -> Status {
        match self {
            Self::RandomFailure { .. } => Status::RandomFailure,
            Self::InvalidPublicKey { .. } => Status::InvalidPublicKey,
            Self::InvalidPrivateKey { .. } => Status::InvalidPrivateKey,
            Self::MemoryFailure { .. } => Status::MemoryFailure,
        }
    }

    /// Name of the operation that produced the error
    pub fn context(&self) -> &'static str {
        match self {
            Self::RandomFailure { context }
            | Self::InvalidPublicKey { context, .. }
            | Self::InvalidPrivateKey { context, .. }
            | Self::MemoryFailure { context, .. } => context,
        }
    }

    /// Replace the context, keeping the variant and reason
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::RandomFailure { .. } => Self::RandomFailure { context },
            Self::InvalidPublicKey { reason, .. } => Self::InvalidPublicKey { context, reason },
            Self::InvalidPrivateKey { reason, .. } => Self::InvalidPrivateKey { context, reason },
            Self::MemoryFailure { reason, .. } => Self::MemoryFailure { context, reason },
        }
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        err.status()
    }
}
