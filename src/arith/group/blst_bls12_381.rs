//! blst-backed BLS12-381 groups.
//!
//! Wraps the blstrs projective points and target group in local newtypes so
//! that the `CurvePoint` and `TargetGroup` methods never collide with the
//! inherent blstrs API. Scalar multiplication takes the blst-backed
//! [`Fr32`] directly.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective, Gt as BlstGt};
use group::Group;

use crate::{BackendError, CurvePoint, Fr32, TargetGroup};

/// Point of the G1 group in projective coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(pub G1Projective);

/// Point of the G2 group in projective coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(pub G2Projective);

/// Element of the pairing target group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gt(pub BlstGt);

impl CurvePoint<Fr32> for G1 {
    const COMPRESSED_LEN: usize = 48;

    fn identity() -> Self {
        G1(<G1Projective as Group>::identity())
    }

    fn generator() -> Self {
        G1(<G1Projective as Group>::generator())
    }

    fn is_identity(&self) -> bool {
        <G1Projective as Group>::is_identity(&self.0).into()
    }

    fn add(&self, other: &Self) -> Self {
        G1(self.0 + other.0)
    }

    fn negate(&self) -> Self {
        G1(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr32) -> Self {
        G1(self.0 * scalar.inner())
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self {
        G1(G1Projective::hash_to_curve(msg, dst, &[]))
    }

    fn to_compressed(&self) -> Vec<u8> {
        G1Affine::from(self.0).to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr: &[u8; 48] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid G1 length"))?;
        Option::<G1Affine>::from(G1Affine::from_compressed(repr))
            .map(|p| G1(p.into()))
            .ok_or(BackendError::Serialization("invalid G1 bytes"))
    }
}

impl CurvePoint<Fr32> for G2 {
    const COMPRESSED_LEN: usize = 96;

    fn identity() -> Self {
        G2(<G2Projective as Group>::identity())
    }

    fn generator() -> Self {
        G2(<G2Projective as Group>::generator())
    }

    fn is_identity(&self) -> bool {
        <G2Projective as Group>::is_identity(&self.0).into()
    }

    fn add(&self, other: &Self) -> Self {
        G2(self.0 + other.0)
    }

    fn negate(&self) -> Self {
        G2(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr32) -> Self {
        G2(self.0 * scalar.inner())
    }

    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self {
        G2(G2Projective::hash_to_curve(msg, dst, &[]))
    }

    fn to_compressed(&self) -> Vec<u8> {
        G2Affine::from(self.0).to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr: &[u8; 96] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid G2 length"))?;
        Option::<G2Affine>::from(G2Affine::from_compressed(repr))
            .map(|p| G2(p.into()))
            .ok_or(BackendError::Serialization("invalid G2 bytes"))
    }
}

impl TargetGroup for Gt {
    fn is_identity(&self) -> bool {
        <BlstGt as Group>::is_identity(&self.0).into()
    }

    fn combine(&self, other: &Self) -> Self {
        Gt(&self.0 + &other.0)
    }
}
