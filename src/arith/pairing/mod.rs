use std::fmt::Debug;

mod blst_bls12_381;
pub use blst_bls12_381::PairingEngine;

use crate::{BackendError, CurvePoint, Scalar, TargetGroup};

/// Main backend trait that ties together the scalar type, both source groups
/// and the pairing.
///
/// Generic signing code is written against this trait; fixing `B` fixes the
/// scalar field, so scalars and points of different curves cannot be mixed.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field element type (Fr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
/// - `Target`: The pairing target group (GT)
///
/// # Example
///
/// ```rust
/// use bls_scalar::{CurvePoint, PairingBackend, PairingEngine, TargetGroup};
///
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let g1 = G1::generator();
/// let g2 = G2::generator();
///
/// // e(g1, g2) * e(-g1, g2) = 1
/// let product = PairingEngine::multi_pairing(&[g1, g1.negate()], &[g2, g2]).expect("same length");
/// assert!(product.is_identity());
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: Scalar;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and multiplying.
    /// Returns an error if the input arrays have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}
