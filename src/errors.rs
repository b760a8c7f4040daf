//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the concrete
//! field and curve backends (blstrs, Arkworks) as well as the crate-level
//! `Error` type returned by scalar decoding, inversion and the signature
//! layer.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use bls_scalar::{Error, Fr32, Scalar};
//!
//! let mut s = Fr32::new();
//! let err = s.set_bytes(&[0u8; 31]).unwrap_err();
//! assert!(matches!(err, Error::InvalidLength { expected: 32, got: 31 }));
//! ```

use thiserror::Error;

/// Errors bubbled up from backend implementations (blstrs, Arkworks).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported backend feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// Crate-level errors returned by scalar operations and the signature API.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte source reached end-of-stream before a full scalar was read.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },
    /// A fixed-size buffer had the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
    /// Inversion of, or division by, the additive identity.
    #[error("division by zero")]
    DivisionByZero,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("signature verification failed")]
    InvalidSignature,
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
