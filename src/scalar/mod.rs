//! Generic scalar capability consumed by the signature layer.
//!
//! [`Scalar`] is the contract generic key-generation and signing code works
//! against: construction, in-place arithmetic, random picking and a fixed
//! width binary encoding. Operands are `&Self`, so mixing elements of two
//! different fields is a type error rather than a runtime failure.
//!
//! Every mutator writes into the receiver and hands back `&mut Self`, which
//! lets calls be chained:
//!
//! ```rust
//! use bls_scalar::{Fr32, Scalar};
//!
//! let two = Fr32::from_u64(2);
//! let three = Fr32::from_u64(3);
//!
//! let mut sum = Fr32::new();
//! sum.add(&two, &three);
//!
//! let mut minus_five = Fr32::new();
//! minus_five.set_i64(-5);
//! assert!(Fr32::new().add(&sum, &minus_five).is_zero());
//! ```

use std::fmt::{Debug, Display};
use std::io::{Read, Write};

use rand_core::RngCore;

use crate::errors::Error;

mod field_scalar;
pub use field_scalar::{FieldScalar, Fr32};

/// Scalar field element abstraction for pairing-based schemes.
pub trait Scalar:
    Clone + Debug + Display + PartialEq + Eq + Default + Send + Sync + 'static
{
    /// Canonical encoding, always [`Scalar::encoded_len`] bytes long.
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the additive identity.
    fn new() -> Self;

    /// Overwrites the receiver with `a`.
    fn set(&mut self, a: &Self) -> &mut Self;

    /// Sets the receiver to a small signed integer reduced modulo the field order.
    fn set_i64(&mut self, v: i64) -> &mut Self;

    /// Sets the receiver to the additive identity (0).
    fn zero(&mut self) -> &mut Self;

    /// Sets the receiver to the multiplicative identity (1).
    fn one(&mut self) -> &mut Self;

    /// `self = a + b`
    fn add(&mut self, a: &Self, b: &Self) -> &mut Self;

    /// `self = a - b`
    fn sub(&mut self, a: &Self, b: &Self) -> &mut Self;

    /// `self = -a`
    fn negate(&mut self, a: &Self) -> &mut Self;

    /// `self = a * b`
    fn mul(&mut self, a: &Self, b: &Self) -> &mut Self;

    /// `self = a^-1`
    ///
    /// Fails with [`Error::DivisionByZero`] when `a` is zero; the receiver is
    /// left untouched in that case.
    fn inverse(&mut self, a: &Self) -> Result<&mut Self, Error>;

    /// `self = a / b`, failing like [`Scalar::inverse`] when `b` is zero.
    fn div(&mut self, a: &Self, b: &Self) -> Result<&mut Self, Error>;

    /// Whether the receiver is the additive identity.
    fn is_zero(&self) -> bool;

    /// Sets the receiver to an element drawn from `rng`.
    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self;

    /// Encoded length of a scalar in bytes.
    fn encoded_len() -> usize;

    /// Canonical big-endian encoding, [`Scalar::encoded_len`] (32) bytes.
    fn to_bytes(&self) -> Self::Repr;

    /// Sets the receiver from an encoded buffer, reducing if necessary.
    ///
    /// The buffer must be exactly [`Scalar::encoded_len`] bytes long.
    fn set_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, Error>;

    /// Writes the canonical encoding and returns the number of bytes written.
    fn encode_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, Error>;

    /// Reads exactly one encoded scalar and returns the number of bytes consumed.
    fn decode_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<usize, Error>;
}
