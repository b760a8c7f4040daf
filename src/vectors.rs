//! Compatibility test vectors.
//!
//! A vector records, for one message and ciphersuite pair, the message hashed
//! to G1 and to G2 under the ciphersuite tag. When the ciphersuite equals the
//! signing domain it also records a freshly generated private key (decimal),
//! the compressed public key and the signature. Other implementations of the
//! same curve can replay the file to check hashing, key derivation and
//! signing bit for bit.
//!
//! Byte fields are base64 encoded in the JSON form and every field is
//! written, so files interchange with the Go `encoding/json` tooling.
//!
//! # Example
//!
//! ```rust
//! use bls_scalar::vectors::{self, TestCase};
//! use bls_scalar::{BlsSchemeOnG2, DEFAULT_DOMAIN, PairingEngine};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let scheme = BlsSchemeOnG2::<PairingEngine>::default();
//! let cases = [TestCase::new("1234", DEFAULT_DOMAIN)];
//! let generated = vectors::generate(&scheme, &mut StdRng::seed_from_u64(3), &cases).expect("generate");
//!
//! let json = vectors::to_json(&generated).expect("json");
//! let parsed = vectors::from_json(&json).expect("parse");
//! parsed[0].check(scheme.domain()).expect("vector replays");
//! ```

use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    BlsSchemeOnG2, CurvePoint, Fr32, G1, G2, PairingEngine, SignatureScheme, errors::Error,
};

/// Upper bound (exclusive) on the byte length of random messages.
pub const MAX_RANDOM_MSG_BYTES: usize = 2000;

/// Number of random-length messages in [`default_cases`].
pub const DEFAULT_RANDOM_CASES: usize = 100;

/// A message and the ciphersuite tag it is hashed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub msg: String,
    pub ciphersuite: String,
}

impl TestCase {
    pub fn new(msg: impl Into<String>, ciphersuite: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ciphersuite: ciphersuite.into(),
        }
    }
}

/// One recorded vector.
///
/// Every field is always written. Rows without key material carry an empty
/// `BLSPrivKey` and `null` for `BLSPubKey` and `BLSSigG2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestVector {
    pub msg: String,
    pub ciphersuite: String,
    #[serde(with = "b64")]
    pub g1_compressed: Vec<u8>,
    #[serde(with = "b64")]
    pub g2_compressed: Vec<u8>,
    #[serde(rename = "BLSPrivKey", default, with = "opt_decimal")]
    pub bls_priv_key: Option<String>,
    #[serde(rename = "BLSPubKey", default, with = "opt_b64")]
    pub bls_pub_key: Option<Vec<u8>>,
    #[serde(rename = "BLSSigG2", default, with = "opt_b64")]
    pub bls_sig_g2: Option<Vec<u8>>,
}

// Byte fields use standard padded base64.
mod b64 {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&base64::encode_config(bytes, base64::STANDARD))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        base64::decode_config(s, base64::STANDARD).map_err(de::Error::custom)
    }
}

mod opt_b64 {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => super::b64::serialize(bytes, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => base64::decode_config(s, base64::STANDARD)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}

// An absent private key is the empty string.
mod opt_decimal {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
    }
}

/// Builds the standard case list.
///
/// The fixed cases come first: the empty message under the empty tag and
/// under `domain`, then `"1234"` under `domain`. They are followed by hex
/// strings of 32 and 64 random bytes and `random` hex strings of random
/// length below [`MAX_RANDOM_MSG_BYTES`] bytes, all under `domain`.
pub fn default_cases<R: RngCore + ?Sized>(
    rng: &mut R,
    domain: &str,
    random: usize,
) -> Vec<TestCase> {
    let mut cases = vec![
        TestCase::new("", ""),
        TestCase::new("", domain),
        TestCase::new("1234", domain),
        TestCase::new(random_hex(rng, 32), domain),
        TestCase::new(random_hex(rng, 64), domain),
    ];
    for _ in 0..random {
        let len = rng.gen_range(0..MAX_RANDOM_MSG_BYTES);
        cases.push(TestCase::new(random_hex(rng, len), domain));
    }
    cases
}

fn random_hex<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Produces one vector per case. Keys are drawn from `rng` only for cases
/// whose ciphersuite equals the scheme's domain.
#[instrument(level = "info", skip_all, fields(cases = cases.len()))]
pub fn generate<R: RngCore + ?Sized>(
    scheme: &BlsSchemeOnG2<PairingEngine>,
    rng: &mut R,
    cases: &[TestCase],
) -> Result<Vec<TestVector>, Error> {
    cases
        .iter()
        .map(|case| -> Result<TestVector, Error> {
            let msg = case.msg.as_bytes();
            let suite = case.ciphersuite.as_bytes();
            let mut vector = TestVector {
                msg: case.msg.clone(),
                ciphersuite: case.ciphersuite.clone(),
                g1_compressed: G1::hash_to_curve(msg, suite).to_compressed(),
                g2_compressed: G2::hash_to_curve(msg, suite).to_compressed(),
                bls_priv_key: None,
                bls_pub_key: None,
                bls_sig_g2: None,
            };
            if suite == scheme.domain() {
                let keys = scheme.new_key_pair(rng);
                vector.bls_sig_g2 = Some(scheme.sign(&keys.secret, msg)?);
                vector.bls_priv_key = Some(keys.secret.to_string());
                vector.bls_pub_key = Some(keys.public.to_compressed());
            }
            debug!(msg_len = msg.len(), signed = vector.bls_sig_g2.is_some(), "vector generated");
            Ok(vector)
        })
        .collect()
}

impl TestVector {
    /// Recomputes every recorded field and reports the first mismatch.
    ///
    /// `domain` is the signing domain the file was produced with. Rows under
    /// it must carry key material; rows under other ciphersuites may, and any
    /// key material present is checked against the row's own ciphersuite.
    pub fn check(&self, domain: &[u8]) -> Result<(), Error> {
        let msg = self.msg.as_bytes();
        let suite = self.ciphersuite.as_bytes();

        if G1::hash_to_curve(msg, suite).to_compressed() != self.g1_compressed {
            return Err(self.mismatch("G1Compressed"));
        }
        if G2::hash_to_curve(msg, suite).to_compressed() != self.g2_compressed {
            return Err(self.mismatch("G2Compressed"));
        }

        let signed = (&self.bls_priv_key, &self.bls_pub_key, &self.bls_sig_g2);
        let (secret, public, sig) = match signed {
            (None, None, None) if suite == domain => {
                return Err(self.mismatch("missing key material"));
            }
            (None, None, None) => return Ok(()),
            (Some(secret), Some(public), Some(sig)) => (secret, public, sig),
            _ => return Err(self.mismatch("partial key material")),
        };

        // Keys are replayed under the ciphersuite they were recorded with.
        let scheme = BlsSchemeOnG2::<PairingEngine>::new(suite);
        let secret = Fr32::from_decimal_str(secret)?;
        let derived = BlsSchemeOnG2::<PairingEngine>::public_key(&secret);
        if derived.to_compressed() != *public {
            return Err(self.mismatch("BLSPubKey"));
        }
        if scheme.sign(&secret, msg)? != *sig {
            return Err(self.mismatch("BLSSigG2"));
        }
        scheme.verify(&derived, msg, sig)
    }

    fn mismatch(&self, field: &str) -> Error {
        Error::MalformedInput(format!(
            "{field} mismatch for message of {} chars under ciphersuite {:?}",
            self.msg.len(),
            self.ciphersuite
        ))
    }
}

/// Serializes vectors as JSON indented by four spaces, newline terminated.
pub fn to_json(vectors: &[TestVector]) -> Result<String, Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    vectors.serialize(&mut serializer)?;
    out.push(b'\n');
    String::from_utf8(out).map_err(|e| Error::MalformedInput(e.to_string()))
}

pub fn from_json(json: &str) -> Result<Vec<TestVector>, Error> {
    Ok(serde_json::from_str(json)?)
}
