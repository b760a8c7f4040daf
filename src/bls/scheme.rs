use core::marker::PhantomData;

use rand_core::RngCore;
use tracing::{instrument, trace};

use crate::{
    CurvePoint, DEFAULT_DOMAIN, KeyPair, PairingBackend, Scalar, SchemeConfig, SignatureScheme,
    TargetGroup, errors::Error,
};

/// BLS signatures on G2 with public keys on G1.
#[derive(Debug)]
pub struct BlsSchemeOnG2<B: PairingBackend> {
    domain: Vec<u8>,
    _phantom: PhantomData<B>,
}

impl<B: PairingBackend> BlsSchemeOnG2<B> {
    /// Creates a scheme hashing messages under `domain`.
    pub fn new(domain: impl Into<Vec<u8>>) -> Self {
        Self {
            domain: domain.into(),
            _phantom: PhantomData,
        }
    }

    /// Creates a scheme from a validated configuration.
    pub fn from_config(config: &SchemeConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::new(config.domain.as_bytes()))
    }

    pub fn domain(&self) -> &[u8] {
        &self.domain
    }

    /// Hashes `msg` to G2 under this scheme's domain tag.
    pub fn hash_message(&self, msg: &[u8]) -> B::G2 {
        B::G2::hash_to_curve(msg, &self.domain)
    }

    /// Derives the public key `secret·G1`.
    pub fn public_key(secret: &B::Scalar) -> B::G1 {
        B::G1::generator().mul_scalar(secret)
    }
}

impl<B: PairingBackend> Default for BlsSchemeOnG2<B> {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN)
    }
}

impl<B: PairingBackend> Clone for BlsSchemeOnG2<B> {
    fn clone(&self) -> Self {
        Self::new(self.domain.clone())
    }
}

impl<B: PairingBackend> SignatureScheme<B> for BlsSchemeOnG2<B> {
    fn new_key_pair<R: RngCore + ?Sized>(&self, rng: &mut R) -> KeyPair<B> {
        let mut secret = B::Scalar::new();
        while secret.pick(rng).is_zero() {
            trace!("picked zero private key, drawing again");
        }
        let public = Self::public_key(&secret);
        KeyPair { secret, public }
    }

    #[instrument(level = "debug", skip_all, fields(msg_len = msg.len()))]
    fn sign(&self, secret: &B::Scalar, msg: &[u8]) -> Result<Vec<u8>, Error> {
        if secret.is_zero() {
            return Err(Error::MalformedInput("private key is zero".into()));
        }
        let sig = self.hash_message(msg).mul_scalar(secret);
        Ok(sig.to_compressed())
    }

    #[instrument(level = "debug", skip_all, fields(msg_len = msg.len(), sig_len = sig.len()))]
    fn verify(&self, public: &B::G1, msg: &[u8], sig: &[u8]) -> Result<(), Error> {
        if public.is_identity() {
            return Err(Error::MalformedInput("public key is the identity".into()));
        }
        let sig_len = <B::G2 as CurvePoint<B::Scalar>>::COMPRESSED_LEN;
        if sig.len() != sig_len {
            return Err(Error::InvalidLength {
                expected: sig_len,
                got: sig.len(),
            });
        }
        let sig = B::G2::from_compressed(sig).map_err(Error::Backend)?;
        let hashed = self.hash_message(msg);
        let product = B::multi_pairing(
            &[*public, B::G1::generator().negate()],
            &[hashed, sig],
        )?;
        if product.is_identity() {
            Ok(())
        } else {
            trace!("pairing check failed");
            Err(Error::InvalidSignature)
        }
    }
}
