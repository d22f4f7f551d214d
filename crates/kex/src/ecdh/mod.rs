//! Elliptic Curve Diffie-Hellman key agreement

pub mod p256;

pub use p256::EcdhP256;
