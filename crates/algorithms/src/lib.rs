//! Cryptographic primitives for ecdh-p256
//!
//! Constant-time arithmetic over the NIST P-256 curve and the entropy
//! sources key generation draws from. Nothing here knows about status codes
//! or foreign callers; those live in the layers above.

#![forbid(unsafe_code)]

pub mod ec;
pub mod error;
pub mod rng;

// Re-export the error types
pub use error::{Error, Result};

// Re-export the curve types
pub use ec::p256::{FieldElement, Point, Scalar};

// Re-export entropy sources
pub use rng::{EntropyCallback, FixedEntropy, OsEntropy, RngEntropy};
