//! P-256 elliptic curve point operations

use crate::ec::p256::{
    constants::{P256_FIELD_ELEMENT_SIZE, P256_POINT_RAW_SIZE, P256_POINT_UNCOMPRESSED_SIZE},
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Affine coordinates (x, y) or identity
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Homogeneous projective coordinates (X:Y:Z), x = X/Z, y = Y/Z
///
/// The identity is (0:1:0). The addition and doubling formulas below are
/// complete: they need no special cases for the identity, for P + P or for
/// P + (−P).
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Zeroize for Point {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

impl Point {
    /// Create a new affine point from big-endian coordinates
    ///
    /// Both coordinates must be below p and satisfy the curve equation.
    pub fn new_uncompressed(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x_bytes)?;
        let y_fe = FieldElement::from_bytes(y_bytes)?;
        validate::parameter(
            Self::is_on_curve(&x_fe, &y_fe),
            "P-256 Point",
            "point not on curve",
        )?;
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_fe,
        })
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// The standard base point G
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement::G_X,
            y: FieldElement::G_Y,
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Get the x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Serialize as raw `x || y` (identity encodes as all zeros)
    pub fn serialize_raw(&self) -> [u8; P256_POINT_RAW_SIZE] {
        let mut out = [0u8; P256_POINT_RAW_SIZE];
        if self.is_identity() {
            return out;
        }
        out[..P256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x_coordinate_bytes());
        out[P256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y_coordinate_bytes());
        out
    }

    /// Parse a raw `x || y` point
    ///
    /// The all-zero encoding is rejected as the point at infinity; anything
    /// else must be a finite point on the curve.
    pub fn deserialize_raw(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 raw point", bytes.len(), P256_POINT_RAW_SIZE)?;
        validate::parameter(
            bytes.iter().any(|&b| b != 0),
            "P-256 Point",
            "point at infinity",
        )?;

        let mut x_bytes = [0u8; P256_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; P256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[..P256_FIELD_ELEMENT_SIZE]);
        y_bytes.copy_from_slice(&bytes[P256_FIELD_ELEMENT_SIZE..]);

        Self::new_uncompressed(&x_bytes, &y_bytes)
    }

    /// Serialize in SEC1 uncompressed form `0x04 || x || y`
    ///
    /// The identity encodes as 65 zero bytes.
    pub fn serialize_uncompressed(&self) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..].copy_from_slice(&self.serialize_raw());
        out
    }

    /// Parse a SEC1 uncompressed point
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "P-256 uncompressed point",
            bytes.len(),
            P256_POINT_UNCOMPRESSED_SIZE,
        )?;
        if bytes[0] != 0x04 {
            return Err(Error::param(
                "P-256 Point",
                "invalid prefix for uncompressed point",
            ));
        }
        Self::deserialize_raw(&bytes[1..])
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        let p1 = self.to_projective();
        let p2 = other.to_projective();
        p1.add(&p2).to_affine()
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Scalar multiplication: scalar · P
    ///
    /// Double-and-add-always over all 256 bits: every iteration performs one
    /// doubling and one addition and keeps the sum by constant-time
    /// selection, so neither the schedule nor memory access depends on the
    /// scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();

        for bit in scalar.bits_be() {
            acc = acc.double();
            let sum = acc.add(&base);
            acc = ProjectivePoint::conditional_select(&acc, &sum, Choice::from(bit));
        }

        acc.to_affine()
    }

    /// Check that (x, y) satisfies y² = x³ - 3x + b
    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y2 = y.square();
        let x3 = x.square().mul(x);
        let three_x = x.double().add(x);
        let rhs = x3.sub(&three_x).add(&FieldElement::B);
        y2 == rhs
    }

    /// Convert affine to projective for intermediate computations
    fn to_projective(&self) -> ProjectivePoint {
        let finite = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&finite, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ProjectivePoint {
    /// Identity in homogeneous form: (0 : 1 : 0)
    pub(crate) fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Complete addition for a = −3
    ///
    /// Renes–Costello–Batina 2015, Algorithm 4. Step numbers follow the paper.
    pub(crate) fn add(&self, other: &Self) -> Self {
        let b = FieldElement::B;

        let xx = self.x.mul(&other.x); // 1
        let yy = self.y.mul(&other.y); // 2
        let zz = self.z.mul(&other.z); // 3
        let xy_pairs = self.x.add(&self.y).mul(&other.x.add(&other.y)).sub(&xx.add(&yy)); // 4-8
        let yz_pairs = self.y.add(&self.z).mul(&other.y.add(&other.z)).sub(&yy.add(&zz)); // 9-13
        let xz_pairs = self.x.add(&self.z).mul(&other.x.add(&other.z)).sub(&xx.add(&zz)); // 14-18

        let bzz_part = xz_pairs.sub(&b.mul(&zz)); // 19, 20
        let bzz3_part = bzz_part.double().add(&bzz_part); // 21, 22
        let yy_m_bzz3 = yy.sub(&bzz3_part); // 23
        let yy_p_bzz3 = yy.add(&bzz3_part); // 24

        let zz3 = zz.double().add(&zz); // 26, 27
        let bxz_part = b.mul(&xz_pairs).sub(&zz3.add(&xx)); // 25, 28, 29
        let bxz3_part = bxz_part.double().add(&bxz_part); // 30, 31
        let xx3_m_zz3 = xx.double().add(&xx).sub(&zz3); // 32, 33, 34

        ProjectivePoint {
            x: yy_p_bzz3.mul(&xy_pairs).sub(&yz_pairs.mul(&bxz3_part)), // 35, 39, 40
            y: yy_p_bzz3.mul(&yy_m_bzz3).add(&xx3_m_zz3.mul(&bxz3_part)), // 36, 37, 38
            z: yy_m_bzz3.mul(&yz_pairs).add(&xy_pairs.mul(&xx3_m_zz3)), // 41, 42, 43
        }
    }

    /// Exception-free doubling for a = −3
    ///
    /// Renes–Costello–Batina 2015, Algorithm 6.
    pub(crate) fn double(&self) -> Self {
        let b = FieldElement::B;

        let xx = self.x.square(); // 1
        let yy = self.y.square(); // 2
        let zz = self.z.square(); // 3
        let xy2 = self.x.mul(&self.y).double(); // 4, 5
        let xz2 = self.x.mul(&self.z).double(); // 6, 7

        let bzz_part = b.mul(&zz).sub(&xz2); // 8, 9
        let bzz3_part = bzz_part.double().add(&bzz_part); // 10, 11
        let yy_m_bzz3 = yy.sub(&bzz3_part); // 12
        let yy_p_bzz3 = yy.add(&bzz3_part); // 13
        let y_frag = yy_p_bzz3.mul(&yy_m_bzz3); // 14
        let x_frag = yy_m_bzz3.mul(&xy2); // 15

        let zz3 = zz.double().add(&zz); // 16, 17
        let bxz2_part = b.mul(&xz2).sub(&zz3.add(&xx)); // 18, 19, 20
        let bxz6_part = bxz2_part.double().add(&bxz2_part); // 21, 22
        let xx3_m_zz3 = xx.double().add(&xx).sub(&zz3); // 23, 24, 25

        let y = y_frag.add(&xx3_m_zz3.mul(&bxz6_part)); // 26, 27
        let yz2 = self.y.mul(&self.z).double(); // 28, 29
        let x = x_frag.sub(&bxz6_part.mul(&yz2)); // 30, 31
        let z = yz2.mul(&yy).double().double(); // 32, 33, 34

        ProjectivePoint { x, y, z }
    }

    /// Convert to affine; Z = 0 yields the identity
    pub(crate) fn to_affine(&self) -> Point {
        let is_identity = self.z.is_zero();
        let z_inv = self.z.invert();

        let finite = Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv),
            y: self.y.mul(&z_inv),
        };
        Point::conditional_select(&finite, &Point::identity(), is_identity)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            is_identity: Choice::from(u8::conditional_select(
                &a.is_identity.unwrap_u8(),
                &b.is_identity.unwrap_u8(),
                choice,
            )),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}
