// File: crates/kex/src/ecdh/p256/mod.rs
//! ECDH with NIST P-256
//!
//! Keys travel as fixed-size big-endian byte strings: a private key is the
//! 32-byte scalar, a public key the 64-byte `x || y` of the point (no format
//! prefix), and a shared secret the 32-byte x-coordinate of the shared point.
//!
//! # Security Features
//!
//! - Private keys must lie in [1, n-1]; out-of-range values are rejected, never reduced
//! - Public keys must be canonical, on the curve, and not the point at infinity
//! - Validation happens before any secret-dependent computation
//! - Constant-time scalar multiplication
//! - Private keys and shared secrets zeroize on drop

use ecdh_p256_algorithms::ec::p256 as ec_p256;
use ecdh_p256_algorithms::Error as AlgError;
use ecdh_p256_api::error::validate;
use ecdh_p256_api::{
    EntropySource, Error as ApiError, KeyAgreement, Result as ApiResult, Serialize,
    SerializeSecret,
};
use ecdh_p256_common::security::{SecretBuffer, SecureZeroingType, ZeroizeGuard};
use ecdh_p256_internal::constant_time::ct_eq;
use ecdh_p256_params::traditional::ecdh::{
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SEC1_SIZE, ECDH_P256_PUBLIC_KEY_SIZE,
    ECDH_P256_SHARED_SECRET_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// ECDH key agreement over the P-256 curve
pub struct EcdhP256;

/// Public key for ECDH-P256 (raw `x || y`, always a valid curve point)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey([u8; ECDH_P256_PUBLIC_KEY_SIZE]);

/// Private key for ECDH-P256 (scalar in [1, n-1])
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct PrivateKey(SecretBuffer<ECDH_P256_PRIVATE_KEY_SIZE>);

/// Shared secret from ECDH-P256 (x-coordinate of the shared point)
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct SharedSecret(SecretBuffer<ECDH_P256_SHARED_SECRET_SIZE>);

// Public key methods
impl PublicKey {
    /// Create a public key from raw `x || y` bytes with validation
    ///
    /// # Returns
    /// * `Ok(PublicKey)` if the bytes encode a finite point on the curve
    /// * `Err(InvalidPublicKey)` for a wrong length, a coordinate ≥ p, a
    ///   point off the curve, or the all-zero (infinity) encoding
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::public_key(
            bytes.len() == ECDH_P256_PUBLIC_KEY_SIZE,
            "PublicKey::from_bytes",
            "public key must be 64 bytes",
        )?;

        Self::parse_point(bytes, "PublicKey::from_bytes")?;

        let mut key_bytes = [0u8; ECDH_P256_PUBLIC_KEY_SIZE];
        key_bytes.copy_from_slice(bytes);
        Ok(Self(key_bytes))
    }

    /// Parse a SEC1 uncompressed encoding (`0x04 || x || y`)
    pub fn from_sec1_uncompressed(bytes: &[u8]) -> ApiResult<Self> {
        let point = ec_p256::Point::deserialize_uncompressed(bytes).map_err(|e| {
            Self::reject(e, "PublicKey::from_sec1_uncompressed")
        })?;
        Ok(Self(point.serialize_raw()))
    }

    /// Export in SEC1 uncompressed form (`0x04 || x || y`)
    pub fn to_sec1_uncompressed(&self) -> [u8; ECDH_P256_PUBLIC_KEY_SEC1_SIZE] {
        let mut out = [0u8; ECDH_P256_PUBLIC_KEY_SEC1_SIZE];
        out[0] = 0x04;
        out[1..].copy_from_slice(&self.0);
        out
    }

    /// Borrow the raw `x || y` encoding
    pub fn as_bytes(&self) -> &[u8; ECDH_P256_PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Export the public key to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub(crate) fn to_point(&self) -> ApiResult<ec_p256::Point> {
        Self::parse_point(&self.0, "PublicKey::to_point")
    }

    fn parse_point(bytes: &[u8], context: &'static str) -> ApiResult<ec_p256::Point> {
        ec_p256::Point::deserialize_raw(bytes).map_err(|e| Self::reject(e, context))
    }

    fn reject(err: AlgError, context: &'static str) -> ApiError {
        tracing::debug!(context, reason = err.reason(), "rejected P-256 public key");
        ApiError::InvalidPublicKey {
            context,
            reason: err.reason(),
        }
    }
}

// Private key methods
impl PrivateKey {
    /// Create a private key from bytes with validation
    ///
    /// # Returns
    /// * `Ok(PrivateKey)` if the bytes are a big-endian scalar in [1, n-1]
    /// * `Err(InvalidPrivateKey)` for a wrong length, zero, or a value ≥ n
    ///
    /// # Security
    /// The input bytes should be zeroized by the caller after use.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::private_key(
            bytes.len() == ECDH_P256_PRIVATE_KEY_SIZE,
            "PrivateKey::from_bytes",
            "private key must be 32 bytes",
        )?;

        let scalar = ec_p256::Scalar::deserialize(bytes).map_err(|e| {
            tracing::debug!(reason = e.reason(), "rejected P-256 private key");
            ApiError::InvalidPrivateKey {
                context: "PrivateKey::from_bytes",
                reason: e.reason(),
            }
        })?;

        Ok(Self::from_scalar(&scalar))
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> ApiResult<PublicKey> {
        let scalar = self.to_scalar()?;
        let point = ec_p256::scalar_mult_base_g(&scalar);
        Ok(PublicKey(point.serialize_raw()))
    }

    /// Export the private key to bytes (with zeroization on drop)
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }

    fn from_scalar(scalar: &ec_p256::Scalar) -> Self {
        Self(scalar.as_secret_buffer().secure_clone())
    }

    fn to_scalar(&self) -> ApiResult<ec_p256::Scalar> {
        ec_p256::Scalar::from_secret_buffer(self.0.secure_clone()).map_err(|e| {
            ApiError::InvalidPrivateKey {
                context: "PrivateKey::to_scalar",
                reason: e.reason(),
            }
        })
    }
}

// Shared secret methods
impl SharedSecret {
    /// Borrow the 32 secret bytes
    ///
    /// # Security Note
    /// Feed the secret into a KDF immediately; it is not uniformly random.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Export the shared secret to bytes with zeroization
    pub fn to_zeroizing_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.as_bytes().to_vec())
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0.as_slice(), other.0.as_slice())
    }
}

impl Eq for SharedSecret {}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        PublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        PublicKey::to_bytes(self)
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        PrivateKey::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let buffer = SecretBuffer::from_slice(bytes).ok_or(ApiError::MemoryFailure {
            context: "SharedSecret::from_bytes",
            reason: "shared secret must be 32 bytes",
        })?;
        Ok(Self(buffer))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_zeroizing_bytes()
    }
}

impl KeyAgreement for EcdhP256 {
    type PublicKey = PublicKey;
    type PrivateKey = PrivateKey;
    type SharedSecret = SharedSecret;

    fn name() -> &'static str {
        "ECDH-P256"
    }

    fn keypair(entropy: &mut dyn EntropySource) -> ApiResult<(Self::PrivateKey, Self::PublicKey)> {
        // Rejection sampling and the base-point multiply happen below
        let (scalar, point) = ec_p256::generate_keypair(entropy).map_err(|e| match e {
            AlgError::Entropy { .. } => ApiError::RandomFailure {
                context: "EcdhP256::keypair",
            },
            other => ApiError::InvalidPrivateKey {
                context: "EcdhP256::keypair",
                reason: other.reason(),
            },
        })?;

        Ok((PrivateKey::from_scalar(&scalar), PublicKey(point.serialize_raw())))
    }

    fn public_key(private_key: &Self::PrivateKey) -> ApiResult<Self::PublicKey> {
        private_key.public_key()
    }

    fn shared_secret(
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        // 1. Both inputs are re-validated; the private key first
        let scalar = private_key.to_scalar()?;
        let peer_point = peer_public_key.to_point()?;

        // 2. S = d · Q
        let mut shared_point = ec_p256::scalar_mult(&scalar, &peer_point);

        // 3. A degenerate result means the peer key was unusable
        if shared_point.is_identity() {
            tracing::warn!("ECDH shared point is the identity");
            return Err(ApiError::InvalidPublicKey {
                context: "EcdhP256::shared_secret",
                reason: "shared point is the identity",
            });
        }

        // 4. The secret is the x-coordinate
        let mut x_bytes = shared_point.x_coordinate_bytes();
        let x_bytes = ZeroizeGuard::new(&mut x_bytes);
        let mut secret = SecretBuffer::<ECDH_P256_SHARED_SECRET_SIZE>::zeroed();
        secret.as_mut_slice().copy_from_slice(&x_bytes[..]);
        let shared_secret = SharedSecret(secret);
        shared_point.zeroize();

        Ok(shared_secret)
    }
}
