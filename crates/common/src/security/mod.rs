//! Security primitives and memory safety utilities
//!
//! Foundational types for handling sensitive key material.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Re-export wiping and barrier utilities
pub use memory::{barrier, secure_zeroize};
