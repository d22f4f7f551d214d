//! # C API
//!
//! C-compatible boundary adapter for ecdh-p256.
//!
//! Two calling conventions are exported. The `ecdh_p256_*` functions take
//! [`ByteArray`] structs whose `size` is the buffer capacity on the way in and
//! the number of bytes written on the way out. The `ecdh_p256_wrap_*`
//! functions take raw pointers with separate `uint32_t` sizes for callers that
//! cannot pass structs.
//!
//! The adapter performs no cryptography. Buffers are checked, handed to
//! [`ecdh_p256_kex`] and the resulting status code is returned unchanged.
//! Outputs are written only on success; on failure every output size is set
//! to zero.

#![deny(unsafe_op_in_unsafe_fn)]

pub mod c_api;
mod marshal;
pub mod types;
pub mod wrap;

pub use c_api::{
    ecdh_p256_create_keypair, ecdh_p256_create_secret, ecdh_p256_random, ecdh_p256_zeroize,
};
pub use types::*;
pub use wrap::{
    ecdh_p256_wrap_create_keypair, ecdh_p256_wrap_create_secret, ecdh_p256_wrap_random,
    ecdh_p256_wrap_zeroize,
};
