//! P-256 field arithmetic implementation
//!
//! Elements of 𝔽ₚ with p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1, held in Montgomery
//! form (a·R mod p, R = 2²⁵⁶) as eight little-endian 32-bit limbs. Every
//! operation runs in time independent of the operand values.

use crate::ec::p256::constants::P256_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use ecdh_p256_internal::endian::{be_bytes_to_le_limbs, le_limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Number of 32-bit limbs for a P-256 field element (8 × 32 = 256 bits)
const NLIMBS: usize = 8;

/// P-256 field element in Montgomery form.
///
/// The limbs always hold a fully reduced value (< p), so two elements are
/// equal exactly when their limbs are equal.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  NIST P-256 Field Constants (little-endian 32-bit limbs)         */
    /* ---------------------------------------------------------------- */

    /// p = FFFFFFFF 00000001 00000000 00000000 00000000 FFFFFFFF FFFFFFFF FFFFFFFF
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, // least significant
        0x00000000, 0x00000000, 0x00000001, 0xFFFFFFFF, // most significant
    ];

    /// R² mod p, used to enter Montgomery form
    const R2: [u32; NLIMBS] = [
        0x00000003, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFB,
        0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFD, 0x00000004,
    ];

    /// R mod p, the Montgomery form of 1
    const ONE: [u32; NLIMBS] = [
        0x00000001, 0x00000000, 0x00000000, 0xFFFFFFFF,
        0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE, 0x00000000,
    ];

    /// Curve coefficient b in Montgomery form
    pub(crate) const B: FieldElement = FieldElement([
        0x29C4BDDF, 0xD89CDF62, 0x78843090, 0xACF005CD,
        0xF7212ED6, 0xE5A220AB, 0x04874834, 0xDC30061D,
    ]);

    /// Base point x-coordinate in Montgomery form
    pub(crate) const G_X: FieldElement = FieldElement([
        0x18A9143C, 0x79E730D4, 0x5FEDB601, 0x75BA95FC,
        0x77622510, 0x79FB732B, 0xA53755C6, 0x18905F76,
    ]);

    /// Base point y-coordinate in Montgomery form
    pub(crate) const G_Y: FieldElement = FieldElement([
        0xCE95560A, 0xDDF25357, 0xBA19E45C, 0x8B4AB8E4,
        0xDD21F325, 0xD2E88688, 0x25885D85, 0x8571FF18,
    ]);

    /// p − 2, the Fermat inversion exponent (big-endian)
    const P_MINUS_2: [u8; P256_FIELD_ELEMENT_SIZE] = [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFD,
    ];

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        FieldElement(Self::ONE)
    }

    /// Create a field element from big-endian bytes.
    ///
    /// Rejects values ≥ p instead of reducing them: a coordinate that is not
    /// canonical is not a valid encoding.
    pub fn from_bytes(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_le_limbs(bytes);

        let (_, borrow) = Self::sbb8(limbs, Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param(
                "FieldElement P-256",
                "coordinate not below field prime",
            ));
        }

        Ok(FieldElement(limbs).mul(&FieldElement(Self::R2)))
    }

    /// Convert this field element into canonical big-endian bytes.
    pub fn to_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        let mut one = [0u32; NLIMBS];
        one[0] = 1;
        // Multiplying by plain 1 divides out R.
        let canonical = self.mul(&FieldElement(one));
        le_limbs_to_be_bytes(&canonical.0)
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        let acc = self.0.iter().fold(0u32, |acc, &limb| acc | limb);
        acc.ct_eq(&0)
    }

    /// Constant-time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        // 1. Full 256-bit addition
        let (sum, carry) = Self::adc8(self.0, other.0);

        // 2. If carry = 1 or sum >= p, subtract p
        let (reduced, borrow) = Self::sbb8(sum, Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;

        Self::conditional_select_limbs(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// Constant-time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = Self::sbb8(self.0, other.0);
        // If borrow == 1, we add p back
        let (diff_plus_p, _) = Self::adc8(diff, Self::MOD_LIMBS);
        Self::conditional_select_limbs(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// 2 · self
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Montgomery multiplication: self · other · R⁻¹ mod p
    ///
    /// CIOS with 32-bit words. Since p ≡ −1 (mod 2³²), −p⁻¹ mod 2³² is 1 and
    /// the per-round quotient digit is simply the low accumulator word.
    #[allow(clippy::needless_range_loop)] // Index used across several arrays
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.0;
        let b = &other.0;
        let p = &Self::MOD_LIMBS;
        let mut t = [0u32; NLIMBS + 2];

        for i in 0..NLIMBS {
            // t += a · b[i]
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let uv = t[j] as u64 + (a[j] as u64) * (b[i] as u64) + carry;
                t[j] = uv as u32;
                carry = uv >> 32;
            }
            let uv = t[NLIMBS] as u64 + carry;
            t[NLIMBS] = uv as u32;
            t[NLIMBS + 1] = (uv >> 32) as u32;

            // t = (t + m · p) / 2³², m = t[0]
            let m = t[0] as u64;
            let uv = t[0] as u64 + m * (p[0] as u64);
            let mut carry = uv >> 32;
            for j in 1..NLIMBS {
                let uv = t[j] as u64 + m * (p[j] as u64) + carry;
                t[j - 1] = uv as u32;
                carry = uv >> 32;
            }
            let uv = t[NLIMBS] as u64 + carry;
            t[NLIMBS - 1] = uv as u32;
            t[NLIMBS] = t[NLIMBS + 1] + (uv >> 32) as u32;
        }

        // t < 2p here; one conditional subtraction finishes the reduction
        let mut low = [0u32; NLIMBS];
        low.copy_from_slice(&t[..NLIMBS]);
        let (reduced, borrow) = Self::sbb8(low, Self::MOD_LIMBS);
        let need_reduce = (t[NLIMBS] | (borrow ^ 1)) & 1;

        Self::conditional_select_limbs(&low, &reduced, Choice::from(need_reduce as u8))
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse via Fermat: a^(p−2) mod p
    ///
    /// The exponent is public, so the square-and-multiply schedule is fixed.
    /// Zero maps to zero; callers that care test [`is_zero`](Self::is_zero)
    /// first.
    pub fn invert(&self) -> Self {
        let mut result = FieldElement::one();

        for &byte in Self::P_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }

        result
    }

    /* ================================================================= */
    /*  Private helper methods (constant-time arithmetic)                */
    /* ================================================================= */

    /// 8-limb addition with carry
    #[inline(always)]
    fn adc8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64) + (b_limb as u64) + carry;
            *r_limb = tmp as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    /// 8-limb subtraction with borrow
    #[inline(always)]
    fn sbb8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u32;

        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let ai = a_limb as u64;
            let bi = b_limb as u64 + borrow as u64;
            *r_limb = ai.wrapping_sub(bi) as u32;
            // New borrow = 1 iff ai < bi + old_borrow
            borrow = (ai < bi) as u32;
        }

        (r, borrow)
    }

    /// Constant-time select: if flag == 0 return a else return b
    #[inline(always)]
    fn conditional_select_limbs(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::conditional_select_limbs(&a.0, &b.0, choice)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
