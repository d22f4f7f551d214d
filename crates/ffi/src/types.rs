//! # FFI Types
//!
//! C-compatible types and constants shared by both calling conventions.

use ecdh_p256_api::Status;
use ecdh_p256_params::traditional::ecdh::{
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P256_SHARED_SECRET_SIZE,
};
use std::os::raw::{c_int, c_void};

pub const ECDH_P256_SUCCESS: c_int = Status::Success.code();
pub const ECDH_P256_RANDOM_FAIL: c_int = Status::RandomFailure.code();
pub const ECDH_P256_INVALID_PUBKEY: c_int = Status::InvalidPublicKey.code();
pub const ECDH_P256_INVALID_PRIVKEY: c_int = Status::InvalidPrivateKey.code();
pub const ECDH_P256_MEMORY_FAIL: c_int = Status::MemoryFailure.code();

pub const SZ_ECDH_P256_PUBLIC_KEY: usize = ECDH_P256_PUBLIC_KEY_SIZE;
pub const SZ_ECDH_P256_PRIVATE_KEY: usize = ECDH_P256_PRIVATE_KEY_SIZE;
pub const SZ_ECDH_P256_SECRET_DATA: usize = ECDH_P256_SHARED_SECRET_SIZE;

/// A pointer with a size
///
/// The `size` member is the capacity of `data` when passed in and the number
/// of bytes written when handed back.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ByteArray {
    pub size: usize,
    pub data: *mut u8,
}

impl ByteArray {
    pub fn new(data: *mut u8, size: usize) -> Self {
        Self { size, data }
    }

    /// An empty array with a null pointer
    pub fn null() -> Self {
        Self {
            size: 0,
            data: std::ptr::null_mut(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// View the array as a byte slice, or `None` if `data` is null
    ///
    /// # Safety
    ///
    /// A non-null `data` must be valid for reads of `size` bytes for `'a`.
    pub(crate) unsafe fn as_slice<'a>(&self) -> Option<&'a [u8]> {
        if self.data.is_null() {
            return None;
        }
        // SAFETY: upheld by the caller
        Some(unsafe { std::slice::from_raw_parts(self.data, self.size) })
    }

    /// View the array as a writable byte slice, or `None` if `data` is null
    ///
    /// # Safety
    ///
    /// A non-null `data` must be valid for writes of `size` bytes for `'a`
    /// and not aliased by any other live reference.
    pub(crate) unsafe fn as_mut_slice<'a>(&self) -> Option<&'a mut [u8]> {
        if self.data.is_null() {
            return None;
        }
        // SAFETY: upheld by the caller
        Some(unsafe { std::slice::from_raw_parts_mut(self.data, self.size) })
    }
}

/// Entropy callback for the struct convention
///
/// Must fill all `entropy_input.size` bytes and return `0`, or return any
/// other value to signal failure.
pub type EntropyCallbackFn =
    Option<unsafe extern "C" fn(context: *mut c_void, entropy_input: ByteArray) -> c_int>;

/// Entropy callback for the wrapper convention
pub type WrapEntropyCallbackFn = Option<
    unsafe extern "C" fn(context: *mut c_void, entropy_data: *mut u8, entropy_size: u32) -> i32,
>;
