//! # bls-scalar: the BLS12-381 scalar field behind a generic scalar API
//!
//! This crate provides an element of the BLS12-381 scalar field `Z/rZ` with
//! `r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`,
//! exposed through a generic [`Scalar`] capability that signature code can be
//! written against without naming the concrete field.
//!
//! ## Overview
//!
//! A scalar is created as zero, mutated in place by arithmetic that writes
//! into the receiver and returns it for chaining, and serialized to and from
//! a fixed 32-byte big-endian buffer. All values stay reduced modulo `r`.
//!
//! ## Architecture
//!
//! - **[`scalar`]**: The [`Scalar`] trait and [`FieldScalar`], with the
//!   [`Fr32`] alias bound to the selected backend.
//!
//! - **arith**: Backend traits ([`FieldElement`], [`CurvePoint`],
//!   [`TargetGroup`], [`PairingBackend`]) and their blstrs/Arkworks
//!   implementations.
//!
//! - **bls**: BLS signatures on G2 ([`BlsSchemeOnG2`]) consuming the scalar
//!   capability.
//!
//! - **[`config`]**: Backend selection and the signing domain.
//!
//! - **[`vectors`]**: JSON compatibility vectors for cross-implementation checks.
//!
//! - **[`errors`]**: Error types for backend and scalar operations.
//!
//! ## Quick Example
//!
//! ```rust
//! use bls_scalar::{Error, Fr32, Scalar};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut a = Fr32::new();
//! a.pick(&mut rng);
//!
//! let mut inv = Fr32::new();
//! inv.inverse(&a)?;
//! assert_eq!(*Fr32::new().mul(&a, &inv), *Fr32::new().one());
//!
//! let mut buf = Vec::new();
//! a.encode_to(&mut buf)?;
//! assert_eq!(buf.len(), 32);
//!
//! let mut b = Fr32::new();
//! b.decode_from(&mut buf.as_slice())?;
//! assert_eq!(a, b);
//!
//! assert!(matches!(inv.inverse(&Fr32::new()), Err(Error::DivisionByZero)));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`blst`** (default): blstrs scalar field, groups and pairing
//! - **`ark_bls12381`**: Arkworks scalar field
//!
//! ## Encoding
//!
//! The canonical encoding is 32 bytes, big-endian. Decoding accepts any 32
//! bytes and reduces them modulo `r`; random sampling does the same with 32
//! bytes drawn from the supplied generator.
//!
//! ## Security Considerations
//!
//! - **Inversion**: Inverting or dividing by zero fails with
//!   [`Error::DivisionByZero`] instead of producing a value.
//! - **Sampling bias**: Reducing 256 random bits modulo a 255-bit `r` is not
//!   exactly uniform. Compatibility with existing key material requires this
//!   exact mapping.

mod arith;
#[cfg(feature = "blst")]
mod bls;
pub mod config;
pub mod errors;
pub mod scalar;
#[cfg(feature = "blst")]
pub mod vectors;

pub use arith::*;
#[cfg(feature = "blst")]
pub use bls::*;
pub use config::*;
pub use errors::*;
pub use scalar::*;
