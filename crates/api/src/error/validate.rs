//! Validation helpers that fail with the matching [`Error`] variant

use super::{Error, Result};

/// Check a private-key condition
pub fn private_key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPrivateKey { context, reason });
    }
    Ok(())
}

/// Check a public-key condition
pub fn public_key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPublicKey { context, reason });
    }
    Ok(())
}

/// Check that a buffer has exactly the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MemoryFailure {
            context,
            reason: "buffer length mismatch",
        });
    }
    Ok(())
}

/// Check that an output buffer can hold at least `min` bytes
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::MemoryFailure {
            context,
            reason: "output buffer too small",
        });
    }
    Ok(())
}
