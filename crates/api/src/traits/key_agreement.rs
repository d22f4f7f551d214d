// File: crates/api/src/traits/key_agreement.rs

//! Trait definition for Diffie-Hellman style key agreement
//!
//! Both parties generate a keypair, exchange public keys and combine their
//! own private key with the peer's public key into the same shared secret.

use super::entropy::EntropySource;
use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use zeroize::Zeroize;

/// Trait for a key-agreement scheme with domain-specific types.
///
/// # Security Design
///
/// Key types carry their own validation: a value of `PublicKey` or
/// `PrivateKey` is always well-formed, so `shared_secret` only has to reject
/// combinations that are invalid as a pair.
pub trait KeyAgreement {
    /// Public key type.
    ///
    /// # Security Note
    /// `from_bytes` must reject encodings that are not valid group elements.
    type PublicKey: Clone + Serialize;

    /// Private key type.
    ///
    /// # Security Note
    /// Zeroized on drop; serialized only into zeroizing buffers.
    type PrivateKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be fed into a KDF immediately; the scheme applies none.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - All randomness comes from `entropy`.
    /// - A failing source fails the call; it is not retried.
    fn keypair(entropy: &mut dyn EntropySource) -> Result<(Self::PrivateKey, Self::PublicKey)>;

    /// Recompute the public key belonging to `private_key`.
    fn public_key(private_key: &Self::PrivateKey) -> Result<Self::PublicKey>;

    /// Combine a private key with the peer's public key.
    ///
    /// # Security Requirements
    /// - Must run in time independent of the private key.
    /// - Must not return a secret derived from a degenerate point.
    fn shared_secret(
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
