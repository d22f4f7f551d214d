//! Safe halves of the exported functions
//!
//! Everything here works on slices. The exported functions turn pointers
//! into slices and delegate.

use crate::types::{ByteArray, ECDH_P256_SUCCESS};
use ecdh_p256_algorithms::rng::EntropyCallback;
use ecdh_p256_api::error::validate;
use ecdh_p256_api::{EntropySource, Error as ApiError, Result as ApiResult, Status};
use ecdh_p256_kex::{create_keypair, create_secret, random};
use ecdh_p256_params::traditional::ecdh::{
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P256_SHARED_SECRET_SIZE,
};
use std::os::raw::c_void;
use zeroize::Zeroizing;

fn callback_status(status: i32) -> ApiResult<()> {
    if status == ECDH_P256_SUCCESS {
        Ok(())
    } else {
        tracing::debug!(status, "entropy callback reported failure");
        Err(ApiError::RandomFailure {
            context: "entropy callback",
        })
    }
}

/// Adapt a struct-convention callback
///
/// # Safety
///
/// `cb` must be safe to call with `context` and a writable buffer for as long
/// as the returned source is used.
pub(crate) unsafe fn struct_callback(
    cb: unsafe extern "C" fn(*mut c_void, ByteArray) -> i32,
    context: *mut c_void,
) -> EntropyCallback<impl FnMut(&mut [u8]) -> ApiResult<()>> {
    EntropyCallback::new(move |dest: &mut [u8]| {
        let input = ByteArray::new(dest.as_mut_ptr(), dest.len());
        // SAFETY: upheld by the caller of `struct_callback`
        let status = unsafe { cb(context, input) };
        callback_status(status)
    })
}

/// Adapt a wrapper-convention callback
///
/// # Safety
///
/// As for [`struct_callback`].
pub(crate) unsafe fn wrap_callback(
    cb: unsafe extern "C" fn(*mut c_void, *mut u8, u32) -> i32,
    context: *mut c_void,
) -> EntropyCallback<impl FnMut(&mut [u8]) -> ApiResult<()>> {
    EntropyCallback::new(move |dest: &mut [u8]| {
        let size = u32::try_from(dest.len()).map_err(|_| ApiError::RandomFailure {
            context: "entropy callback",
        })?;
        // SAFETY: upheld by the caller of `wrap_callback`
        let status = unsafe { cb(context, dest.as_mut_ptr(), size) };
        callback_status(status)
    })
}

/// Generate a keypair into the caller's buffers
///
/// Returns the number of bytes written to each buffer. Too-small buffers are a
/// `MemoryFailure` reported before any entropy is drawn.
pub(crate) fn keypair_into(
    private_out: &mut [u8],
    public_out: &mut [u8],
    entropy: Option<&mut dyn EntropySource>,
) -> Result<(usize, usize), Status> {
    validate::min_length("keypair_into", private_out.len(), ECDH_P256_PRIVATE_KEY_SIZE)
        .and_then(|()| {
            validate::min_length("keypair_into", public_out.len(), ECDH_P256_PUBLIC_KEY_SIZE)
        })
        .map_err(|err| {
            tracing::debug!(
                private_capacity = private_out.len(),
                public_capacity = public_out.len(),
                "keypair output buffers too small"
            );
            err.status()
        })?;

    let (private_key, public_key) = create_keypair(entropy).map_err(|err| err.status())?;
    private_out[..ECDH_P256_PRIVATE_KEY_SIZE].copy_from_slice(&private_key.to_bytes());
    public_out[..ECDH_P256_PUBLIC_KEY_SIZE].copy_from_slice(public_key.as_bytes());
    Ok((ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE))
}

/// Derive a shared secret into `secret_out`, returning the bytes written
pub(crate) fn secret_into(
    private_key: &[u8],
    peer_public_key: &[u8],
    secret_out: &mut [u8],
) -> Result<usize, Status> {
    validate::min_length("secret_into", secret_out.len(), ECDH_P256_SHARED_SECRET_SIZE).map_err(
        |err| {
            tracing::debug!(capacity = secret_out.len(), "secret output buffer too small");
            err.status()
        },
    )?;

    let secret = create_secret(private_key, peer_public_key).map_err(|err| err.status())?;
    secret_out[..ECDH_P256_SHARED_SECRET_SIZE].copy_from_slice(secret.as_bytes());
    Ok(ECDH_P256_SHARED_SECRET_SIZE)
}

/// Zeroed scratch storage that reports allocation failure instead of aborting
pub(crate) fn scratch_buffer(len: usize) -> Result<Zeroizing<Vec<u8>>, Status> {
    let mut scratch = Vec::new();
    scratch.try_reserve_exact(len).map_err(|_| {
        tracing::warn!(len, "scratch allocation failed");
        Status::MemoryFailure
    })?;
    scratch.resize(len, 0u8);
    Ok(Zeroizing::new(scratch))
}

/// Fill `output` from the OS RNG without exposing a partial fill
pub(crate) fn random_into(output: &mut [u8]) -> Status {
    let mut scratch = match scratch_buffer(output.len()) {
        Ok(scratch) => scratch,
        Err(status) => return status,
    };
    match random(&mut scratch) {
        Ok(()) => {
            output.copy_from_slice(&scratch);
            Status::Success
        }
        Err(err) => err.status(),
    }
}
