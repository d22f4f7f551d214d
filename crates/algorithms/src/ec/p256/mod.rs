//! NIST P-256 Elliptic Curve Primitives
//!
//! This module implements the NIST P-256 elliptic curve operations in constant time.
//! The curve equation is y² = x³ - 3x + b over the prime field F_p where:
//! - p = 2^256 - 2^224 + 2^192 + 2^96 - 1 (NIST P-256 prime)
//! - The curve order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! The implementation uses:
//! - Montgomery multiplication for field arithmetic
//! - Homogeneous projective coordinates with complete addition formulas
//! - Double-and-add-always scalar multiplication with constant-time selection

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_RAW_SIZE, P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use crate::error::{Error, Result};
use ecdh_p256_api::EntropySource;
use ecdh_p256_common::security::SecretBuffer;
use ecdh_p256_params::traditional::ecdh::{ECDH_P256_KEYGEN_ENTROPY_SIZE, MAX_KEYGEN_ATTEMPTS};

/// Get the standard base point G of the P-256 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
///
/// This is the core operation for deriving public keys from private keys.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: compute scalar * point
///
/// The identity is returned as-is; rejecting it is the caller's decision.
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}

/// Generate a P-256 keypair from an entropy source
///
/// Rejection sampling: each attempt draws 32 bytes and keeps them only if
/// they form a scalar in [1, n-1]. An honest source is rejected with
/// probability below 2^-32, so after `MAX_KEYGEN_ATTEMPTS` rejections the
/// source is treated as broken. A failing source ends the call immediately
/// and is not asked again.
pub fn generate_keypair<E>(entropy: &mut E) -> Result<(Scalar, Point)>
where
    E: EntropySource + ?Sized,
{
    for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
        let mut candidate = SecretBuffer::<ECDH_P256_KEYGEN_ENTROPY_SIZE>::zeroed();

        if let Err(err) = entropy.fill(candidate.as_mut_slice()) {
            tracing::warn!(attempt, error = %err, "entropy source failed during P-256 key generation");
            return Err(Error::Entropy {
                source: "P-256 keypair",
            });
        }

        match Scalar::from_secret_buffer(candidate) {
            Ok(private_key) => {
                let public_key = scalar_mult_base_g(&private_key);
                return Ok((private_key, public_key));
            }
            Err(err) => {
                tracing::debug!(attempt, reason = err.reason(), "rejected P-256 private key candidate");
            }
        }
    }

    tracing::warn!(
        attempts = MAX_KEYGEN_ATTEMPTS,
        "P-256 key generation gave up; every entropy draw was out of range"
    );
    Err(Error::Entropy {
        source: "P-256 keypair rejection sampling",
    })
}
