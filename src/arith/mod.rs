//! Cryptographic backend abstractions and implementations.
//!
//! This module provides trait abstractions for the arithmetic this crate
//! builds on, allowing the blstrs and Arkworks backends to sit behind one
//! interface.
//!
//! # Architecture
//!
//! - **field**: Scalar field arithmetic (Fr): addition, multiplication,
//!   inversion and big-endian byte conversion with reduction
//! - **group**: Elliptic curve point operations (G1, G2, GT) and hashing to
//!   the curve
//! - **pairing**: Bilinear pairing operations - `e(G1, G2) -> GT`
//!
//! # Backend Support
//!
//! | Feature | Backend | Field | Groups & pairing |
//! |---------|---------|-------|------------------|
//! | `blst` (default) | blstrs | ✓ | ✓ |
//! | `ark_bls12381` | Arkworks | ✓ | ✗ |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "blst")]
//! # {
//! use bls_scalar::{CurvePoint, Fr32, PairingBackend, PairingEngine, Scalar};
//!
//! let mut s = Fr32::new();
//! s.set_i64(3);
//!
//! let g1 = <PairingEngine as PairingBackend>::G1::generator();
//! let g2 = <PairingEngine as PairingBackend>::G2::generator();
//! let lhs = PairingEngine::pairing(&g1.mul_scalar(&s), &g2);
//! let rhs = PairingEngine::pairing(&g1, &g2.mul_scalar(&s));
//! assert_eq!(lhs, rhs);
//! # }
//! ```

mod field;
pub use self::field::*;

#[cfg(feature = "blst")]
mod group;
#[cfg(feature = "blst")]
pub use self::group::*;

#[cfg(feature = "blst")]
mod pairing;
#[cfg(feature = "blst")]
pub use self::pairing::*;
