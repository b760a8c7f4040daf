use blstrs::{Bls12, G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective};
use group::Curve;
use group::prime::PrimeCurveAffine;
use pairing::{MillerLoopResult, MultiMillerLoop};

use crate::{BackendError, Fr32, G1, G2, Gt, PairingBackend};

/// Pairing engine implementation for the blst BLS12-381 backend.
#[derive(Debug)]
pub struct PairingEngine;

/// blst-backed `PairingBackend` implementation for BLS12-381.
impl PairingBackend for PairingEngine {
    type Scalar = Fr32;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Gt(blstrs::pairing(&G1Affine::from(g1.0), &G2Affine::from(g2.0)))
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        let g1_proj: Vec<G1Projective> = g1.iter().map(|p| p.0).collect();
        let g2_proj: Vec<G2Projective> = g2.iter().map(|p| p.0).collect();
        let mut g1_affine = vec![G1Affine::identity(); g1.len()];
        let mut g2_affine = vec![G2Affine::identity(); g2.len()];
        G1Projective::batch_normalize(&g1_proj, &mut g1_affine);
        G2Projective::batch_normalize(&g2_proj, &mut g2_affine);
        let g2_prepared: Vec<G2Prepared> =
            g2_affine.iter().map(|aff| G2Prepared::from(*aff)).collect();
        let terms: Vec<_> = g1_affine.iter().zip(g2_prepared.iter()).collect();
        let result = Bls12::multi_miller_loop(&terms).final_exponentiation();
        Ok(Gt(result))
    }
}
