//! Trait definitions for the ecdh-p256 public surface

pub mod entropy;
pub mod key_agreement;
pub mod serialize;

pub use entropy::EntropySource;
pub use key_agreement::KeyAgreement;
pub use serialize::{Serialize, SerializeSecret};
