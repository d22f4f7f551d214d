//! Constant values for the ecdh-p256 workspace
//!
//! Curve domain parameters and fixed encoding sizes. Every other crate pulls
//! its numbers from here so there is exactly one copy of each constant.

#![no_std]

pub mod traditional;
