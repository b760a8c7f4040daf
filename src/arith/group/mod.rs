use std::fmt::Debug;

use crate::{BackendError, Scalar};

mod blst_bls12_381;
pub use blst_bls12_381::{G1, G2, Gt};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// Points are multiplied by the crate's [`Scalar`] type, so a group can only
/// be paired with the scalar field it was instantiated for.
///
/// # Type Parameters
///
/// - `S`: The scalar type used for scalar multiplication
///
/// # Example
///
/// ```rust
/// use bls_scalar::{CurvePoint, Fr32, G2, Scalar};
///
/// let mut two = Fr32::new();
/// two.set_i64(2);
///
/// let h = G2::hash_to_curve(b"message", b"EXAMPLE_DST");
/// assert_eq!(h.mul_scalar(&two), CurvePoint::add(&h, &h));
///
/// let bytes = h.to_compressed();
/// assert_eq!(bytes.len(), <G2 as CurvePoint<Fr32>>::COMPRESSED_LEN);
/// assert_eq!(G2::from_compressed(&bytes).expect("valid point"), h);
/// ```
pub trait CurvePoint<S: Scalar>: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Length of the compressed encoding in bytes.
    const COMPRESSED_LEN: usize;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &S) -> Self;

    /// Hashes `msg` to a point of this group under the domain tag `dst`.
    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self;

    fn to_compressed(&self) -> Vec<u8>;

    /// Decodes a compressed point, rejecting encodings that are off the
    /// curve or outside the prime-order subgroup.
    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError>;
}

/// Pairing target group (GT) abstraction.
///
/// This trait represents the target group of the pairing operation, which is
/// a multiplicative subgroup of the extension field.
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + 'static {
    fn is_identity(&self) -> bool;

    /// Combines (multiplies) two target group elements.
    fn combine(&self, other: &Self) -> Self;
}
