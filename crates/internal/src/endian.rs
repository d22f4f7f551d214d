//! Endianness utility functions
//!
//! Field and scalar values travel as big-endian bytes but are computed on as
//! little-endian arrays of 32-bit limbs (limb 0 least significant).

/// Convert a u32 from big-endian byte order to native byte order
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u32 from native byte order to big-endian bytes
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Split a 32-byte big-endian integer into eight little-endian u32 limbs
pub fn be_bytes_to_le_limbs(bytes: &[u8; 32]) -> [u32; 8] {
    let mut limbs = [0u32; 8];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (7 - i) * 4;
        *limb = u32_from_be_bytes(&bytes[offset..offset + 4]);
    }
    limbs
}

/// Inverse of [`be_bytes_to_le_limbs`]
pub fn le_limbs_to_be_bytes(limbs: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, &limb) in limbs.iter().enumerate() {
        let offset = (7 - i) * 4;
        out[offset..offset + 4].copy_from_slice(&u32_to_be_bytes(limb));
    }
    out
}
