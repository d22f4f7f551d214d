//! Entropy sources for key generation
//!
//! Every source implements [`EntropySource`]. Failures always surface as
//! [`ApiError::RandomFailure`]; nothing here retries or falls back to a
//! weaker generator.

use crate::error::{Error, Result};
use core::fmt;
use ecdh_p256_api::{EntropySource, Error as ApiError, Result as ApiResult};
use ecdh_p256_common::security::SecretBuffer;
use ecdh_p256_params::traditional::ecdh::ECDH_P256_KEYGEN_ENTROPY_SIZE;
use rand::{CryptoRng, RngCore};

/// Fill `dest` from the operating system's CSPRNG
///
/// Fails when the OS source is unavailable, and always fails when the crate
/// is built without the `os-rng` feature.
pub fn os_fill(dest: &mut [u8]) -> Result<()> {
    #[cfg(feature = "os-rng")]
    {
        getrandom::getrandom(dest).map_err(|err| {
            tracing::warn!(len = dest.len(), error = %err, "operating system RNG failed");
            Error::Entropy { source: "getrandom" }
        })
    }

    #[cfg(not(feature = "os-rng"))]
    {
        tracing::warn!(
            len = dest.len(),
            "operating system RNG requested but the os-rng feature is disabled"
        );
        Err(Error::Entropy {
            source: "os-rng disabled",
        })
    }
}

/// The operating system's CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    /// Create a handle to the OS source
    pub fn new() -> Self {
        OsEntropy
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> ApiResult<()> {
        os_fill(dest).map_err(|_| ApiError::RandomFailure {
            context: "OsEntropy::fill",
        })
    }
}

/// Adapts a caller-supplied closure into an entropy source
///
/// Each request is forwarded verbatim: the closure sees a buffer of exactly
/// the requested size, and whatever state it captured plays the role of a
/// callback context. Any error it returns is reported as a random failure.
pub struct EntropyCallback<F> {
    callback: F,
}

impl<F> EntropyCallback<F>
where
    F: FnMut(&mut [u8]) -> ApiResult<()>,
{
    /// Wrap `callback`
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EntropySource for EntropyCallback<F>
where
    F: FnMut(&mut [u8]) -> ApiResult<()>,
{
    fn fill(&mut self, dest: &mut [u8]) -> ApiResult<()> {
        (self.callback)(dest).map_err(|err| {
            tracing::debug!(len = dest.len(), error = %err, "entropy callback reported failure");
            ApiError::RandomFailure {
                context: "EntropyCallback::fill",
            }
        })
    }
}

impl<F> fmt::Debug for EntropyCallback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntropyCallback").finish_non_exhaustive()
    }
}

/// Adapts any `rand` CSPRNG, such as a seeded `ChaCha20Rng`
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngEntropy<R> {
    /// Wrap `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, dest: &mut [u8]) -> ApiResult<()> {
        self.rng.try_fill_bytes(dest).map_err(|err| {
            tracing::warn!(len = dest.len(), error = %err, "wrapped RNG failed");
            ApiError::RandomFailure {
                context: "RngEntropy::fill",
            }
        })
    }
}

impl<R> fmt::Debug for RngEntropy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngEntropy").finish_non_exhaustive()
    }
}

/// A one-shot 32-byte seed
///
/// The seed answers exactly one 32-byte request and is wiped as it is handed
/// out. Any later request, or a request of another size, fails.
#[derive(Debug)]
pub struct FixedEntropy {
    seed: Option<SecretBuffer<ECDH_P256_KEYGEN_ENTROPY_SIZE>>,
}

impl FixedEntropy {
    /// Take a copy of `seed`; it must be exactly 32 bytes
    pub fn new(seed: &[u8]) -> ApiResult<Self> {
        let seed = SecretBuffer::from_slice(seed).ok_or(ApiError::MemoryFailure {
            context: "FixedEntropy::new",
            reason: "entropy seed must be 32 bytes",
        })?;
        Ok(Self { seed: Some(seed) })
    }

    /// Has the seed already been consumed?
    pub fn is_spent(&self) -> bool {
        self.seed.is_none()
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> ApiResult<()> {
        if dest.len() != ECDH_P256_KEYGEN_ENTROPY_SIZE {
            tracing::debug!(len = dest.len(), "fixed entropy seed asked for the wrong size");
            return Err(ApiError::RandomFailure {
                context: "FixedEntropy::fill",
            });
        }

        // Dropping the taken buffer wipes the seed.
        match self.seed.take() {
            Some(seed) => {
                dest.copy_from_slice(seed.as_slice());
                Ok(())
            }
            None => {
                tracing::debug!("fixed entropy seed already consumed");
                Err(ApiError::RandomFailure {
                    context: "FixedEntropy::fill",
                })
            }
        }
    }
}
