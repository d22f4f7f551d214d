//! ECDH key agreement over NIST P-256
//!
//! The typed core of ecdh-p256. It offers three levels of use:
//!
//! - [`EcdhP256`], the [`KeyAgreement`](ecdh_p256_api::KeyAgreement)
//!   implementation over validated key types;
//! - the byte-oriented operations [`create_keypair`], [`create_secret`],
//!   [`random`] and [`zeroize`];
//! - [`EcdhSession`], a named per-party helper that caches its keypair until
//!   a secret has been derived.
//!
//! Derived secrets are the raw x-coordinate of the shared point. No KDF is
//! applied.

#![forbid(unsafe_code)]

pub mod ecdh;
pub mod primitive;
pub mod session;

// Re-exports
pub use ecdh::p256::{EcdhP256, PrivateKey, PublicKey, SharedSecret};
pub use primitive::{create_keypair, create_secret, random, zeroize};
pub use session::EcdhSession;
