//! Internal utilities for the ecdh-p256 workspace
//!
//! Nothing in here is part of the public API surface. The helpers are shared
//! by the arithmetic and key-handling crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
