//! BLS signatures over a generic pairing backend.
//!
//! This module is the consumer of the [`Scalar`](crate::Scalar) capability:
//! key generation picks a private scalar from a caller-supplied random
//! source, and signing multiplies a hashed-to-curve point by it. Nothing here
//! depends on the concrete scalar field beyond the [`PairingBackend`] it is
//! instantiated with.
//!
//! # Protocol
//!
//! With private key `x`, public key `X = x·G1` and domain tag `dst`:
//!
//! 1. **Sign**: `σ = x·H(m)` where `H` hashes to G2 under `dst`.
//! 2. **Verify**: accept iff `e(X, H(m)) = e(G1, σ)`, checked as the single
//!    product `e(X, H(m))·e(-G1, σ) = 1`.
//!
//! # Example
//!
//! ```rust
//! use bls_scalar::{BlsSchemeOnG2, PairingEngine, SignatureScheme};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let scheme = BlsSchemeOnG2::<PairingEngine>::default();
//! let mut rng = StdRng::seed_from_u64(1);
//! let keys = scheme.new_key_pair(&mut rng);
//!
//! let sig = scheme.sign(&keys.secret, b"hello").expect("sign");
//! scheme.verify(&keys.public, b"hello", &sig).expect("valid signature");
//! assert!(scheme.verify(&keys.public, b"other", &sig).is_err());
//! ```

use std::fmt::Debug;

use rand_core::RngCore;

use crate::{PairingBackend, errors::Error};

mod scheme;
pub use scheme::BlsSchemeOnG2;

mod keys;
pub use keys::KeyPair;

/// Signature scheme interface generic over the pairing backend.
pub trait SignatureScheme<B: PairingBackend>: Debug + Send + Sync {
    /// Generates a key pair, drawing the private scalar from `rng`.
    fn new_key_pair<R: RngCore + ?Sized>(&self, rng: &mut R) -> KeyPair<B>;

    /// Signs `msg` and returns the compressed signature.
    fn sign(&self, secret: &B::Scalar, msg: &[u8]) -> Result<Vec<u8>, Error>;

    /// Verifies a compressed signature over `msg` against `public`.
    ///
    /// Returns [`Error::InvalidSignature`] when the pairing check fails.
    fn verify(&self, public: &B::G1, msg: &[u8], sig: &[u8]) -> Result<(), Error>;
}
