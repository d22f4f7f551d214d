//! Public API traits and types for ecdh-p256
//!
//! This crate provides the public surface shared by every layer: the error
//! taxonomy and its stable status codes, the entropy-source capability, and
//! the key-agreement and serialization contracts.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::Status;

// Re-export all traits from the traits module
pub use traits::{EntropySource, KeyAgreement, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{entropy, key_agreement, serialize};
