//! Arkworks-backed scalar field for BLS12-381.
//!
//! Compiled when the Cargo feature `ark_bls12381` is enabled.

pub use ::ark_bls12_381::Fr as ArkFr;
use ark_ff::{BigInteger, Field, One as ArkOne, PrimeField, Zero};

use crate::{BackendError, FieldElement, SCALAR_BYTES};

impl FieldElement for ArkFr {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        ArkOne::one()
    }

    fn from_u64(n: u64) -> Self {
        ArkFr::from(n)
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
        Field::inverse(self)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn to_repr(&self) -> [u8; SCALAR_BYTES] {
        let be = self.into_bigint().to_bytes_be();
        let mut bytes = [0u8; SCALAR_BYTES];
        bytes[SCALAR_BYTES - be.len()..].copy_from_slice(&be);
        bytes
    }

    fn from_repr(repr: &[u8; SCALAR_BYTES]) -> Result<Self, BackendError> {
        let value = ArkFr::from_be_bytes_mod_order(repr);
        if FieldElement::to_repr(&value) != *repr {
            return Err(BackendError::Serialization("scalar is not reduced modulo r"));
        }
        Ok(value)
    }

    fn from_repr_reduced(repr: &[u8; SCALAR_BYTES]) -> Self {
        ArkFr::from_be_bytes_mod_order(repr)
    }
}
