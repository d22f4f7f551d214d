// File: crates/api/src/traits/entropy.rs

//! Capability for obtaining cryptographically random bytes
//!
//! Key generation never reaches for a global RNG; it is handed an
//! `EntropySource`. The operating-system source, caller callbacks, seeded
//! test generators and one-shot seeds all implement this trait.

use crate::Result;

/// A provider of cryptographically random bytes.
///
/// # Contract
/// - `fill` must write every byte of `dest` or return an error.
/// - The requested size is exactly `dest.len()`; implementations must not
///   split, pad or retry the request on the caller's behalf.
/// - A failure is reported as [`crate::Error::RandomFailure`] and fails the
///   enclosing operation. There is no weaker fallback.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}
