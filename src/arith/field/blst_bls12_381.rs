//! blst-backed scalar field for BLS12-381.
//!
//! Implements `FieldElement` for `blstrs::Scalar`. blstrs keeps values in
//! Montgomery form internally; the byte conversions below always go through
//! its canonical big-endian encoding.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::Scalar;
use ff::Field;

use crate::{BackendError, FieldElement, SCALAR_BYTES};

impl FieldElement for Scalar {
    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }

    fn mul(&self, other: &Self) -> Self {
        *self * *other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn is_zero(&self) -> bool {
        Field::is_zero(self).into()
    }

    fn to_repr(&self) -> [u8; SCALAR_BYTES] {
        self.to_bytes_be()
    }

    fn from_repr(repr: &[u8; SCALAR_BYTES]) -> Result<Self, BackendError> {
        Option::<Scalar>::from(Scalar::from_bytes_be(repr))
            .ok_or(BackendError::Serialization("scalar is not reduced modulo r"))
    }
}
