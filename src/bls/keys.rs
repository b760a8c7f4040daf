use crate::PairingBackend;

/// Private scalar and matching public key in G1.
///
/// # Security
///
/// The private scalar must be kept confidential.
#[derive(Debug)]
pub struct KeyPair<B: PairingBackend> {
    pub secret: B::Scalar,
    pub public: B::G1,
}

impl<B: PairingBackend> Clone for KeyPair<B> {
    fn clone(&self) -> Self {
        Self {
            secret: self.secret.clone(),
            public: self.public,
        }
    }
}
