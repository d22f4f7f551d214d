//! # ecdh-p256
//!
//! Elliptic-Curve Diffie-Hellman over NIST P-256 with pluggable entropy,
//! strict key validation and guaranteed zeroization of secret material.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecdh-p256 = "0.3"
//! ```
//!
//! ```
//! use ecdh_p256::prelude::*;
//!
//! # fn main() -> ecdh_p256::api::Result<()> {
//! let (alice_sk, alice_pk) = create_keypair(None)?;
//! let (bob_sk, bob_pk) = create_keypair(None)?;
//!
//! let alice = create_secret(&alice_sk.to_bytes(), bob_pk.as_bytes())?;
//! let bob = create_secret(&bob_sk.to_bytes(), alice_pk.as_bytes())?;
//! assert_eq!(alice, bob);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `os-rng` (default): operating-system randomness for keypair generation
//!   and [`random`](kex::random)
//! - `ffi`: the C-compatible boundary adapter
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `ecdh-p256-api`: errors, status codes and traits
//! - `ecdh-p256-algorithms`: field, scalar and point arithmetic; entropy sources
//! - `ecdh-p256-kex`: key agreement, byte-oriented operations and sessions
//! - `ecdh-p256-ffi`: C boundary adapter

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ecdh_p256_algorithms as algorithms;
pub use ecdh_p256_api as api;
pub use ecdh_p256_common as common;
pub use ecdh_p256_internal as internal;
pub use ecdh_p256_kex as kex;
pub use ecdh_p256_params as params;

// Feature-gated re-exports
#[cfg(feature = "ffi")]
pub use ecdh_p256_ffi as ffi;

/// Common imports for ecdh-p256 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, Status};

    // Re-export core traits
    pub use crate::api::{EntropySource, KeyAgreement, Serialize, SerializeSecret};

    // Key agreement
    pub use crate::kex::{
        create_keypair, create_secret, random, zeroize, EcdhP256, EcdhSession, PrivateKey,
        PublicKey, SharedSecret,
    };

    // Entropy sources
    pub use crate::algorithms::rng::{EntropyCallback, FixedEntropy, OsEntropy, RngEntropy};

    // Re-export security types
    pub use crate::common::{SecretBuffer, ZeroizeGuard};
}
