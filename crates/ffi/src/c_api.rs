//! Struct-convention exports
//!
//! The `ecdh_p256_*` functions. Key and secret buffers travel as
//! [`ByteArray`]s.

use crate::marshal::{keypair_into, random_into, secret_into, struct_callback};
use crate::types::{ByteArray, EntropyCallbackFn};
use ecdh_p256_api::Status;
use ecdh_p256_common::secure_zeroize;
use std::os::raw::{c_int, c_void};

/// Generate a Diffie-Hellman key pair
///
/// # Arguments
/// * `private_key` - receives the 32-byte big-endian private key
/// * `public_key` - receives the 64-byte public key `x ‖ y`
/// * `entropy_cb` - entropy callback, or null to use the OS RNG
/// * `entropy_context` - passed unchanged to `entropy_cb`
///
/// # Returns
/// `ECDH_P256_SUCCESS`, `ECDH_P256_RANDOM_FAIL`, or `ECDH_P256_MEMORY_FAIL`
/// for a null pointer or a buffer below the key size.
///
/// # Safety
/// Both arrays must be valid, distinct, and describe writable buffers of
/// their stated size. `entropy_cb` must be safe to call with
/// `entropy_context` for the duration of this call.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_create_keypair(
    private_key: *mut ByteArray,
    public_key: *mut ByteArray,
    entropy_cb: EntropyCallbackFn,
    entropy_context: *mut c_void,
) -> c_int {
    // SAFETY: pointers are checked for null; validity is the caller's contract
    let (private_key, public_key) = match unsafe { (private_key.as_mut(), public_key.as_mut()) } {
        (Some(private_key), Some(public_key)) => (private_key, public_key),
        (private_key, public_key) => {
            tracing::debug!("ecdh_p256_create_keypair called with a null array");
            for array in [private_key, public_key].into_iter().flatten() {
                array.size = 0;
            }
            return Status::MemoryFailure.code();
        }
    };

    // SAFETY: as above
    let outputs = unsafe { (private_key.as_mut_slice(), public_key.as_mut_slice()) };
    let result = match outputs {
        (Some(private_out), Some(public_out)) => match entropy_cb {
            Some(cb) => {
                // SAFETY: the callback contract is the caller's
                let mut source = unsafe { struct_callback(cb, entropy_context) };
                keypair_into(private_out, public_out, Some(&mut source))
            }
            None => keypair_into(private_out, public_out, None),
        },
        _ => Err(Status::MemoryFailure),
    };

    match result {
        Ok((private_len, public_len)) => {
            private_key.size = private_len;
            public_key.size = public_len;
            Status::Success.code()
        }
        Err(status) => {
            tracing::debug!(status = status.code(), "ecdh_p256_create_keypair failed");
            private_key.size = 0;
            public_key.size = 0;
            status.code()
        }
    }
}

/// Compute a Diffie-Hellman shared secret
///
/// # Arguments
/// * `private_key` - our 32-byte private key
/// * `peer_public_key` - the peer's 64-byte public key
/// * `secret` - receives the 32-byte shared secret
///
/// # Returns
/// `ECDH_P256_SUCCESS`, `ECDH_P256_INVALID_PRIVKEY`,
/// `ECDH_P256_INVALID_PUBKEY`, or `ECDH_P256_MEMORY_FAIL`.
///
/// # Safety
/// Each array must describe a valid buffer of its stated size; `secret` must
/// be writable and must not overlap the inputs.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_create_secret(
    private_key: ByteArray,
    peer_public_key: ByteArray,
    secret: *mut ByteArray,
) -> c_int {
    // SAFETY: null-checked; validity is the caller's contract
    let Some(secret) = (unsafe { secret.as_mut() }) else {
        tracing::debug!("ecdh_p256_create_secret called with a null secret array");
        return Status::MemoryFailure.code();
    };

    // SAFETY: as above
    let buffers = unsafe {
        (
            private_key.as_slice(),
            peer_public_key.as_slice(),
            secret.as_mut_slice(),
        )
    };
    let result = match buffers {
        (Some(private_key), Some(peer_public_key), Some(secret_out)) => {
            secret_into(private_key, peer_public_key, secret_out)
        }
        _ => Err(Status::MemoryFailure),
    };

    match result {
        Ok(len) => {
            secret.size = len;
            Status::Success.code()
        }
        Err(status) => {
            tracing::debug!(status = status.code(), "ecdh_p256_create_secret failed");
            secret.size = 0;
            status.code()
        }
    }
}

/// Zeroize memory
///
/// The write cannot be optimised away. A null pointer is ignored.
///
/// # Safety
/// A non-null `s` must be valid for writes of `n` bytes.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_zeroize(s: *mut c_void, n: usize) {
    if s.is_null() || n == 0 {
        return;
    }
    // SAFETY: non-null and valid for `n` bytes per the caller's contract
    let buffer = unsafe { std::slice::from_raw_parts_mut(s.cast::<u8>(), n) };
    secure_zeroize(buffer);
}

/// Fill `output` with bytes from the OS RNG
///
/// # Returns
/// `ECDH_P256_SUCCESS`, `ECDH_P256_RANDOM_FAIL`, or `ECDH_P256_MEMORY_FAIL`
/// for a null buffer.
///
/// # Safety
/// `output` must describe a writable buffer of its stated size.
#[no_mangle]
pub unsafe extern "C" fn ecdh_p256_random(output: ByteArray) -> c_int {
    // SAFETY: null-checked; validity is the caller's contract
    let status = match unsafe { output.as_mut_slice() } {
        Some(output) => random_into(output),
        None => Status::MemoryFailure,
    };
    if !status.is_success() {
        tracing::debug!(status = status.code(), "ecdh_p256_random failed");
    }
    status.code()
}
