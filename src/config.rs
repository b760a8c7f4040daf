//! Configuration types for the signature scheme and vector tooling.
//!
//! This module provides configuration types that control which arithmetic
//! backend is used and which domain-separation tag the BLS scheme hashes
//! messages under.
//!
//! # Example
//!
//! ```rust
//! use bls_scalar::{BackendConfig, BackendId, SchemeConfig, DEFAULT_DOMAIN};
//!
//! let config = SchemeConfig::new(BackendConfig::new(BackendId::Blst), DEFAULT_DOMAIN);
//! # #[cfg(feature = "blst")]
//! config.validate().expect("valid config");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BackendError, Error};

/// Domain-separation tag of the BLS signature ciphersuite on G2.
pub const DEFAULT_DOMAIN: &str = "BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Longest tag accepted by `expand_message_xmd`.
pub const MAX_DOMAIN_LEN: usize = 255;

/// Arithmetic backend implementations.
///
/// - **blst**: Optimized implementation for BLS12-381 using assembly. Provides
///   the scalar field, both groups and the pairing.
/// - **Arkworks**: Pure Rust scalar field. Groups and pairing are not wired up
///   for this backend.
///
/// # Feature Flags
///
/// - `blst` (default): Enable blstrs
/// - `ark_bls12381`: Enable the Arkworks scalar field
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BackendId {
    /// Arkworks backend (pure Rust, scalar field only)
    Arkworks,
    /// blstrs backend (optimized assembly)
    Blst,
}

/// Backend selection.
///
/// Use [`ensure_supported`](BackendConfig::ensure_supported) for scalar-only
/// use and [`ensure_pairing`](BackendConfig::ensure_pairing) before signing.
///
/// | Backend    | Scalar field | Groups & pairing |
/// |------------|--------------|------------------|
/// | Arkworks   | ✓            | ✗                |
/// | blst       | ✓            | ✓                |
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackendConfig {
    /// The arithmetic backend to use
    pub backend: BackendId,
}

impl BackendConfig {
    pub fn new(backend: BackendId) -> Self {
        Self { backend }
    }

    /// Validates that the backend's feature flag is enabled at compile time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bls_scalar::{BackendConfig, BackendId};
    ///
    /// let config = BackendConfig::new(BackendId::Arkworks);
    /// assert_eq!(config.ensure_supported().is_ok(), cfg!(feature = "ark_bls12381"));
    /// ```
    pub fn ensure_supported(&self) -> Result<(), BackendError> {
        match self.backend {
            BackendId::Arkworks => {
                if cfg!(feature = "ark_bls12381") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bls12381` feature to use the Arkworks scalar field",
                    ))
                }
            }
            BackendId::Blst => {
                if cfg!(feature = "blst") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `blst` feature to use the blstrs backend",
                    ))
                }
            }
        }
    }

    /// Like [`ensure_supported`](BackendConfig::ensure_supported), and also
    /// requires group and pairing support.
    pub fn ensure_pairing(&self) -> Result<(), BackendError> {
        self.ensure_supported()?;
        match self.backend {
            BackendId::Blst => Ok(()),
            BackendId::Arkworks => Err(BackendError::UnsupportedFeature(
                "the Arkworks backend provides the scalar field only",
            )),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(BackendId::Blst)
    }
}

/// Parameters of a BLS signing domain.
///
/// # Constraints
///
/// - `backend` must support pairings
/// - `domain` must be at most [`MAX_DOMAIN_LEN`] bytes
///
/// # Example
///
/// ```rust
/// use bls_scalar::SchemeConfig;
///
/// let json = r#"{ "backend": { "backend": "Blst" }, "domain": "MY_APP_V1" }"#;
/// let config = SchemeConfig::from_json(json).expect("valid json");
/// assert_eq!(config.domain, "MY_APP_V1");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Backend configuration
    pub backend: BackendConfig,
    /// Domain-separation tag messages are hashed under
    pub domain: String,
}

impl SchemeConfig {
    pub fn new(backend: BackendConfig, domain: impl Into<String>) -> Self {
        Self {
            backend,
            domain: domain.into(),
        }
    }

    /// Parses a configuration from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the configuration.
    ///
    /// This checks that:
    /// - The backend is compiled in and supports pairings
    /// - The domain tag fits `expand_message_xmd`
    pub fn validate(&self) -> Result<(), Error> {
        self.backend.ensure_pairing().map_err(Error::Backend)?;
        if self.domain.len() > MAX_DOMAIN_LEN {
            return Err(Error::InvalidConfig(format!(
                "domain separation tag is {} bytes, at most {MAX_DOMAIN_LEN} allowed",
                self.domain.len()
            )));
        }
        Ok(())
    }
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self::new(BackendConfig::default(), DEFAULT_DOMAIN)
    }
}
