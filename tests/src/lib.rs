//! Shared fixtures for the ecdh-p256 integration tests
pub mod sources;
pub mod vectors;
