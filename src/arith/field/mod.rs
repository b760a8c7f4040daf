use std::fmt::Debug;

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use self::ark_bls12_381::ArkFr;

/// Scalar field backend selected at compile time.
///
/// `blst` takes precedence when both backend features are enabled.
#[cfg(feature = "blst")]
pub type Fr = blstrs::Scalar;
#[cfg(all(feature = "ark_bls12381", not(feature = "blst")))]
pub type Fr = ArkFr;

#[cfg(not(any(feature = "blst", feature = "ark_bls12381")))]
compile_error!("enable at least one scalar backend: `blst` or `ark_bls12381`");

/// Width in bytes of the canonical scalar encoding.
pub const SCALAR_BYTES: usize = 32;

/// Big-endian encoding of the BLS12-381 scalar field order `r`.
pub const MODULUS_BE: [u8; SCALAR_BYTES] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// Field arithmetic backend for the BLS12-381 scalar field.
///
/// Implementations wrap a fixed-width integer that is always reduced modulo
/// the field order. Every operation returns a reduced value; the byte
/// conversions use big-endian order.
///
/// # Example
///
/// ```rust
/// use bls_scalar::{FieldElement, Fr};
///
/// let two = Fr::from_u64(2);
/// let four = FieldElement::mul(&two, &two);
/// assert_eq!(four, Fr::from_u64(4));
///
/// let bytes = four.to_repr();
/// assert_eq!(bytes[31], 4);
/// assert_eq!(Fr::from_repr(&bytes).expect("canonical"), four);
/// ```
pub trait FieldElement: Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static {
    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;

    fn add(&self, other: &Self) -> Self;

    fn sub(&self, other: &Self) -> Self;

    fn mul(&self, other: &Self) -> Self;

    fn negate(&self) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    fn is_zero(&self) -> bool;

    /// Serializes this element as 32 big-endian bytes.
    fn to_repr(&self) -> [u8; SCALAR_BYTES];

    /// Deserializes a canonical big-endian representation.
    ///
    /// Returns an error if the value is not reduced modulo the field order.
    fn from_repr(repr: &[u8; SCALAR_BYTES]) -> Result<Self, BackendError>;

    /// Interprets any 32 big-endian bytes as an integer and reduces it
    /// modulo the field order.
    fn from_repr_reduced(repr: &[u8; SCALAR_BYTES]) -> Self {
        // 2^64 = (2^64 - 1) + 1
        let radix = Self::from_u64(u64::MAX).add(&Self::one());
        repr.chunks_exact(8).fold(Self::zero(), |acc, chunk| {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            acc.mul(&radix).add(&Self::from_u64(u64::from_be_bytes(limb)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduction_helper<F: FieldElement>() {
        assert_eq!(F::from_repr_reduced(&MODULUS_BE), F::zero());

        let mut r_plus_five = MODULUS_BE;
        r_plus_five[31] += 5;
        assert_eq!(F::from_repr_reduced(&r_plus_five), F::from_u64(5));
        assert!(F::from_repr(&r_plus_five).is_err());
        assert!(F::from_repr(&MODULUS_BE).is_err());

        let mut r_minus_one = MODULUS_BE;
        r_minus_one[31] -= 1;
        let minus_one = F::from_repr(&r_minus_one).expect("r - 1 is canonical");
        assert_eq!(minus_one, F::one().negate());
        assert_eq!(F::from_repr_reduced(&r_minus_one), minus_one);
    }

    fn limb_order_helper<F: FieldElement>() {
        let mut bytes = [0u8; SCALAR_BYTES];
        bytes[23] = 1;
        let radix = F::from_u64(u64::MAX).add(&F::one());
        assert_eq!(F::from_repr_reduced(&bytes), radix);
        assert_eq!(radix.to_repr(), bytes);
    }

    fn invert_helper<F: FieldElement>() {
        assert!(F::zero().invert().is_none());
        let seven = F::from_u64(7);
        let inv = seven.invert().expect("non-zero element");
        assert_eq!(seven.mul(&inv), F::one());
    }

    #[test]
    fn reduction_default_backend() {
        reduction_helper::<Fr>();
        limb_order_helper::<Fr>();
        invert_helper::<Fr>();
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn reduction_arkworks() {
        reduction_helper::<ArkFr>();
        limb_order_helper::<ArkFr>();
        invert_helper::<ArkFr>();
    }

    #[cfg(all(feature = "ark_bls12381", not(feature = "blst")))]
    #[test]
    fn arkworks_is_the_fallback_alias() {
        let five: Fr = ArkFr::from(5u64);
        assert_eq!(five, <Fr as FieldElement>::from_u64(5));
        assert_eq!(FieldElement::to_repr(&five)[31], 5);
    }

    #[cfg(all(feature = "blst", feature = "ark_bls12381"))]
    #[test]
    fn backends_agree() {
        use rand::{RngCore, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut a = [0u8; SCALAR_BYTES];
            let mut b = [0u8; SCALAR_BYTES];
            rng.fill_bytes(&mut a);
            rng.fill_bytes(&mut b);

            let ba = <blstrs::Scalar as FieldElement>::from_repr_reduced(&a);
            let bb = <blstrs::Scalar as FieldElement>::from_repr_reduced(&b);
            let aa = <ArkFr as FieldElement>::from_repr_reduced(&a);
            let ab = <ArkFr as FieldElement>::from_repr_reduced(&b);

            assert_eq!(FieldElement::to_repr(&ba), FieldElement::to_repr(&aa));
            assert_eq!(
                FieldElement::to_repr(&FieldElement::mul(&ba, &bb)),
                FieldElement::to_repr(&FieldElement::mul(&aa, &ab))
            );
            assert_eq!(
                FieldElement::to_repr(&FieldElement::sub(&ba, &bb)),
                FieldElement::to_repr(&FieldElement::sub(&aa, &ab))
            );
            assert_eq!(
                FieldElement::invert(&ba).map(|v| FieldElement::to_repr(&v)),
                FieldElement::invert(&aa).map(|v| FieldElement::to_repr(&v))
            );
        }
    }
}
