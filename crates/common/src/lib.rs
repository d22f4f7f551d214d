//! Common implementations and shared functionality for ecdh-p256
//!
//! Holds the containers and wiping routines every layer uses for secret
//! material: fixed-size secret buffers, the non-elidable zeroizer and memory
//! barriers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{secure_zeroize, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Re-export memory barrier utilities
pub use security::memory::barrier;
