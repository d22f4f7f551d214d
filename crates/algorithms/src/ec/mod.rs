// File: crates/algorithms/src/ec/mod.rs
//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on NIST P-256, the foundation for ECDH key
//! agreement.

pub mod p256;

pub use p256::{Point as P256Point, Scalar as P256Scalar};
