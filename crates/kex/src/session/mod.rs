//! Per-party ECDH helper
//!
//! An [`EcdhSession`] owns one side of an exchange. It creates its keypair on
//! demand, hands out the public half as often as asked, and throws the keys
//! away once a shared secret has been derived so the next exchange starts
//! fresh.

use crate::ecdh::p256::{EcdhP256, PrivateKey, PublicKey, SharedSecret};
use ecdh_p256_algorithms::rng::{FixedEntropy, OsEntropy};
use ecdh_p256_api::error::ResultExt;
use ecdh_p256_api::{EntropySource, Error as ApiError, KeyAgreement, Result as ApiResult};
use std::fmt;

/// One party of an ECDH exchange
///
/// Entropy for the keypair is taken, in order of preference, from the
/// callback, the one-shot seed, then the operating system RNG.
pub struct EcdhSession {
    name: String,
    keypair: Option<(PrivateKey, PublicKey)>,
    seed: Option<FixedEntropy>,
    callback: Option<Box<dyn EntropySource + Send>>,
}

impl EcdhSession {
    /// Create a session with no keys yet
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(session = %name, "ECDH session created");
        Self {
            name,
            keypair: None,
            seed: None,
            callback: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Supply a 32-byte seed for the next keypair
    ///
    /// The seed is used once and wiped. A seed of any other length is
    /// refused with `MemoryFailure` and leaves the session unchanged.
    pub fn set_entropy(&mut self, seed: &[u8]) -> ApiResult<()> {
        let seed = FixedEntropy::new(seed).with_context("EcdhSession::set_entropy")?;
        self.seed = Some(seed);
        Ok(())
    }

    /// Route keypair entropy through `source` until cleared
    pub fn set_entropy_callback<S>(&mut self, source: S)
    where
        S: EntropySource + Send + 'static,
    {
        self.callback = Some(Box::new(source));
    }

    pub fn clear_entropy_callback(&mut self) {
        self.callback = None;
    }

    /// Public key of this party, generating the keypair if none is held
    pub fn create_keypair(&mut self) -> ApiResult<PublicKey> {
        if let Some((_, public_key)) = &self.keypair {
            return Ok(*public_key);
        }

        let result = if let Some(callback) = self.callback.as_mut() {
            EcdhP256::keypair(callback.as_mut())
        } else if let Some(mut seed) = self.seed.take() {
            EcdhP256::keypair(&mut seed)
        } else {
            EcdhP256::keypair(&mut OsEntropy::new())
        };

        match result {
            Ok((private_key, public_key)) => {
                tracing::debug!(session = %self.name, "ECDH keypair generated");
                self.keypair = Some((private_key, public_key));
                Ok(public_key)
            }
            Err(err) => {
                tracing::warn!(session = %self.name, error = %err, "ECDH keypair generation failed");
                Err(err)
            }
        }
    }

    /// The cached public key, if a keypair is held
    pub fn public_key(&self) -> Option<PublicKey> {
        self.keypair.as_ref().map(|(_, public_key)| *public_key)
    }

    pub fn has_keypair(&self) -> bool {
        self.keypair.is_some()
    }

    /// Derive the secret shared with `peer_public_key`
    ///
    /// On success the local keypair is discarded. On failure it is kept so
    /// the caller may retry with a corrected peer key.
    pub fn shared_secret(&mut self, peer_public_key: &[u8]) -> ApiResult<SharedSecret> {
        let (private_key, _) = self.keypair.as_ref().ok_or(ApiError::InvalidPrivateKey {
            context: "EcdhSession::shared_secret",
            reason: "no keypair has been created",
        })?;

        let secret = PublicKey::from_bytes(peer_public_key)
            .and_then(|peer| EcdhP256::shared_secret(private_key, &peer));

        match secret {
            Ok(secret) => {
                self.keypair = None;
                tracing::debug!(session = %self.name, "ECDH secret derived, keypair discarded");
                Ok(secret)
            }
            Err(err) => {
                tracing::warn!(session = %self.name, error = %err, "ECDH secret derivation failed");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for EcdhSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdhSession")
            .field("name", &self.name)
            .field("has_keypair", &self.keypair.is_some())
            .field("has_seed", &self.seed.is_some())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

// Held keys and the seed wipe themselves when dropped.
impl Drop for EcdhSession {
    fn drop(&mut self) {
        tracing::debug!(
            session = %self.name,
            had_keypair = self.keypair.is_some(),
            "ECDH session dropped"
        );
    }
}
