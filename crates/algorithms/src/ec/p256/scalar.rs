//! P-256 scalar values

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use ecdh_p256_common::security::SecretBuffer;
use ecdh_p256_internal::constant_time::{ct_is_zero, ct_lt_be};
use ecdh_p256_params::traditional::ecdh::NIST_P256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// P-256 scalar value for use in elliptic curve operations
///
/// Always in the range [1, n-1], where n is the order of the base point.
/// Automatically zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<P256_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from big-endian bytes
    ///
    /// Values outside [1, n-1] are rejected, never reduced: a private key
    /// must be used exactly as given. The input array is wiped either way.
    pub fn new(mut data: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let result = Self::check_range(&data).map(|()| Scalar(SecretBuffer::new(data)));
        data.zeroize();
        result
    }

    /// Create a scalar from an existing SecretBuffer
    pub fn from_secret_buffer(buffer: SecretBuffer<P256_SCALAR_SIZE>) -> Result<Self> {
        Self::check_range(buffer.as_array())?;
        Ok(Scalar(buffer))
    }

    /// Access the underlying SecretBuffer containing the scalar value
    pub fn as_secret_buffer(&self) -> &SecretBuffer<P256_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize the scalar to big-endian bytes
    ///
    /// The caller owns the copy and is responsible for wiping it.
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        *self.0.as_array()
    }

    /// Deserialize a scalar from bytes with validation
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Scalar", bytes.len(), P256_SCALAR_SIZE)?;

        let buffer = SecretBuffer::from_slice(bytes).ok_or(Error::Length {
            context: "P-256 Scalar",
            expected: P256_SCALAR_SIZE,
            actual: bytes.len(),
        })?;

        Self::from_secret_buffer(buffer)
    }

    /// Bits of the scalar from most to least significant
    pub(crate) fn bits_be(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .as_slice()
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
    }

    /// Range check in constant time; only the verdict is branched on
    fn check_range(bytes: &[u8; P256_SCALAR_SIZE]) -> Result<()> {
        let is_zero: bool = ct_is_zero(bytes).into();
        let below_n: bool = ct_lt_be(bytes, &NIST_P256.n).into();

        validate::parameter(!is_zero, "P-256 Scalar", "scalar is zero")?;
        validate::parameter(below_n, "P-256 Scalar", "scalar not below group order")
    }
}
