//! Byte-oriented ECDH operations
//!
//! The four operations a foreign boundary needs. Keys go in and come out as
//! validated types built from plain byte slices; nothing here retains state.

use crate::ecdh::p256::{EcdhP256, PrivateKey, PublicKey, SharedSecret};
use ecdh_p256_algorithms::rng::OsEntropy;
use ecdh_p256_api::error::ResultExt;
use ecdh_p256_api::{EntropySource, KeyAgreement, Result};
use ecdh_p256_common::security::secure_zeroize;

/// Generate a keypair
///
/// Entropy comes from `entropy` when given, otherwise from the operating
/// system RNG. Every private key returned lies in [1, n-1]; a failing source
/// yields `RandomFailure` without being asked again.
pub fn create_keypair(entropy: Option<&mut dyn EntropySource>) -> Result<(PrivateKey, PublicKey)> {
    let result = match entropy {
        Some(source) => EcdhP256::keypair(source),
        None => EcdhP256::keypair(&mut OsEntropy::new()),
    };

    if let Err(err) = &result {
        tracing::warn!(error = %err, "ECDH keypair generation failed");
    }
    result
}

/// Derive the shared secret for `private_key` and a peer's raw public key
///
/// The private key is validated before the public key, and both before any
/// scalar multiplication.
pub fn create_secret(private_key: &[u8], peer_public_key: &[u8]) -> Result<SharedSecret> {
    let private_key = PrivateKey::from_bytes(private_key)?;
    let peer_public_key = PublicKey::from_bytes(peer_public_key)?;
    EcdhP256::shared_secret(&private_key, &peer_public_key)
}

/// Fill `output` from the operating system RNG
///
/// This is the same source [`create_keypair`] uses when no entropy source is
/// supplied.
pub fn random(output: &mut [u8]) -> Result<()> {
    OsEntropy::new().fill(output).with_context("random")
}

/// Overwrite `buffer` with zeros through a path the optimiser cannot remove
pub fn zeroize(buffer: &mut [u8]) {
    secure_zeroize(buffer);
}
