//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different length compare unequal; the length itself is public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time check that every byte of `bytes` is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0)
}

/// Constant-time `a < b` for two big-endian integers of the same width
///
/// Runs a full borrow chain from the least significant byte; the final
/// borrow is set exactly when `a < b`.
pub fn ct_lt_be(a: &[u8], b: &[u8]) -> Choice {
    assert_eq!(a.len(), b.len(), "ct_lt_be operands must have equal width");

    let mut borrow: u16 = 0;
    for (&x, &y) in a.iter().rev().zip(b.iter().rev()) {
        let diff = (x as u16).wrapping_sub(y as u16).wrapping_sub(borrow);
        borrow = (diff >> 15) & 1;
    }

    Choice::from(borrow as u8)
}
