//! Wrapper-convention exports
//!
//! The `ecdh_p256_wrap_*` functions mirror [`crate::c_api`] for callers that
//! cannot pass structs. Buffers are raw pointers with `uint32_t` sizes; output
//! sizes are passed by pointer, holding the capacity on entry and the bytes
//! written on return.

use crate::marshal::{keypair_into, random_into, secret_into, wrap_callback};
use crate::types::WrapEntropyCallbackFn;
use ecdh_p256_api::Status;
use ecdh_p256_common::secure_zeroize;
use std::os::raw::c_void;

/// Borrow `len` bytes at `data`, or `None` when `data` is null
///
/// # Safety
/// A non-null `data` must be valid for reads of `len` bytes for `'a`.
unsafe fn input<'a>(data: *const u8, len: u32) -> Option<&'a [u8]> {
    if data.is_null() {
        return None;
    }
    // SAFETY: upheld by the caller
    Some(unsafe { std::slice::from_raw_parts(data, len as usize) })
}

/// Borrow the output buffer described by `data` and the capacity at `size`
///
/// # Safety
/// Non-null pointers must be valid; `data` for writes of `*size` bytes.
unsafe fn output<'a>(data: *mut u8, size: *mut u32) -> Option<&'a mut [u8]> {
    if data.is_null() || size.is_null() {
        return None;
    }
    // SAFETY: upheld by the caller
    Some(unsafe { std::slice::from_raw_parts_mut(data, *size as usize) })
}

/// Store `value` through `size` when it is non-null
///
/// # Safety
/// A non-null `size` must be valid for writes.
unsafe fn store_size(size: *mut u32, value: usize) {
    if let Some(size) = unsafe { size.as_mut() } {
        // Key and secret sizes always fit
        *size = u32::try_from(value).unwrap_or(0);
    }
}

/// Wrapper for [`ecdh_p256_create_keypair`](crate::ecdh_p256_create_keypair)
///
/// # Safety
/// Each data pointer must be valid for writes of the capacity held at its
/// size pointer; the buffers must not overlap. `entropy_cb` must be safe to
/// call with `entropy_context` for the duration of this call.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_wrap_create_keypair(
    private_key_data: *mut u8,
    private_key_size: *mut u32,
    public_key_data: *mut u8,
    public_key_size: *mut u32,
    entropy_cb: WrapEntropyCallbackFn,
    entropy_context: *mut c_void,
) -> i32 {
    // SAFETY: the pointer contract is the caller's
    let outputs = unsafe {
        (
            output(private_key_data, private_key_size),
            output(public_key_data, public_key_size),
        )
    };
    let result = match outputs {
        (Some(private_out), Some(public_out)) => match entropy_cb {
            Some(cb) => {
                // SAFETY: the callback contract is the caller's
                let mut source = unsafe { wrap_callback(cb, entropy_context) };
                keypair_into(private_out, public_out, Some(&mut source))
            }
            None => keypair_into(private_out, public_out, None),
        },
        _ => Err(Status::MemoryFailure),
    };

    let (private_len, public_len, status) = match result {
        Ok((private_len, public_len)) => (private_len, public_len, Status::Success),
        Err(status) => {
            tracing::debug!(status = status.code(), "ecdh_p256_wrap_create_keypair failed");
            (0, 0, status)
        }
    };
    // SAFETY: null-checked inside
    unsafe {
        store_size(private_key_size, private_len);
        store_size(public_key_size, public_len);
    }
    status.code()
}

/// Wrapper for [`ecdh_p256_create_secret`](crate::ecdh_p256_create_secret)
///
/// # Safety
/// Input pointers must be valid for reads of their stated sizes.
/// `secret_data` must be valid for writes of the capacity held at
/// `secret_size` and must not overlap the inputs.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_wrap_create_secret(
    private_key_data: *const u8,
    private_key_size: u32,
    peer_public_key_data: *const u8,
    peer_public_key_size: u32,
    secret_data: *mut u8,
    secret_size: *mut u32,
) -> i32 {
    // SAFETY: the pointer contract is the caller's
    let buffers = unsafe {
        (
            input(private_key_data, private_key_size),
            input(peer_public_key_data, peer_public_key_size),
            output(secret_data, secret_size),
        )
    };
    let result = match buffers {
        (Some(private_key), Some(peer_public_key), Some(secret_out)) => {
            secret_into(private_key, peer_public_key, secret_out)
        }
        _ => Err(Status::MemoryFailure),
    };

    let (len, status) = match result {
        Ok(len) => (len, Status::Success),
        Err(status) => {
            tracing::debug!(status = status.code(), "ecdh_p256_wrap_create_secret failed");
            (0, status)
        }
    };
    // SAFETY: null-checked inside
    unsafe { store_size(secret_size, len) };
    status.code()
}

/// Wrapper for [`ecdh_p256_zeroize`](crate::ecdh_p256_zeroize)
///
/// # Safety
/// A non-null `s` must be valid for writes of `n` bytes.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_wrap_zeroize(s: *mut c_void, n: u32) {
    if s.is_null() || n == 0 {
        return;
    }
    // SAFETY: non-null and valid for `n` bytes per the caller's contract
    let buffer = unsafe { std::slice::from_raw_parts_mut(s.cast::<u8>(), n as usize) };
    secure_zeroize(buffer);
}

/// Wrapper for [`ecdh_p256_random`](crate::ecdh_p256_random)
///
/// # Safety
/// A non-null `output_data` must be valid for writes of `output_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_wrap_random(output_data: *mut u8, output_size: u32) -> i32 {
    if output_data.is_null() {
        tracing::debug!("ecdh_p256_wrap_random called with a null buffer");
        return Status::MemoryFailure.code();
    }
    // SAFETY: non-null and valid for `output_size` bytes per the caller's contract
    let output = unsafe { std::slice::from_raw_parts_mut(output_data, output_size as usize) };
    random_into(output).code()
}
