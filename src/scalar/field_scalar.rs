use std::fmt;
use std::io::{self, Read, Write};
use std::ops;
use std::str::FromStr;

use num_bigint::BigUint;
use rand_core::RngCore;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::Error;
use crate::{FieldElement, Fr, SCALAR_BYTES, Scalar};

/// Scalar of the BLS12-381 curve on the compile-time selected backend.
pub type Fr32 = FieldScalar<Fr>;

/// An element of `Z/rZ` backed by a [`FieldElement`] implementation.
///
/// The wrapped value is reduced modulo `r` at all times. The canonical
/// encoding is the 32-byte big-endian form of that reduced value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldScalar<F: FieldElement> {
    value: F,
}

impl<F: FieldElement> FieldScalar<F> {
    pub fn from_inner(value: F) -> Self {
        Self { value }
    }

    pub fn inner(&self) -> &F {
        &self.value
    }

    pub fn from_u64(n: u64) -> Self {
        Self {
            value: F::from_u64(n),
        }
    }

    pub fn set_u64(&mut self, n: u64) -> &mut Self {
        self.value = F::from_u64(n);
        self
    }

    /// Parses the base-10 form produced by `Display`.
    ///
    /// Only ASCII digits are accepted and the value must be below `r`.
    pub fn from_decimal_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::MalformedInput(format!(
                "not a decimal integer: {s:?}"
            )));
        }
        let n = BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| Error::MalformedInput(format!("not a decimal integer: {s:?}")))?;
        let be = n.to_bytes_be();
        if be.len() > SCALAR_BYTES {
            return Err(Error::MalformedInput(
                "decimal scalar exceeds the field order".into(),
            ));
        }
        let mut repr = [0u8; SCALAR_BYTES];
        repr[SCALAR_BYTES - be.len()..].copy_from_slice(&be);
        let value = F::from_repr(&repr).map_err(|_| {
            Error::MalformedInput("decimal scalar exceeds the field order".into())
        })?;
        Ok(Self { value })
    }
}

impl<F: FieldElement> Default for FieldScalar<F> {
    fn default() -> Self {
        Self { value: F::zero() }
    }
}

impl<F: FieldElement> fmt::Display for FieldScalar<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BigUint::from_bytes_be(&self.value.to_repr()))
    }
}

impl<F: FieldElement> fmt::Debug for FieldScalar<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldScalar({self})")
    }
}

impl<F: FieldElement> FromStr for FieldScalar<F> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl<F: FieldElement> Scalar for FieldScalar<F> {
    type Repr = [u8; SCALAR_BYTES];

    fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, a: &Self) -> &mut Self {
        self.value = a.value;
        self
    }

    fn set_i64(&mut self, v: i64) -> &mut Self {
        // unsigned_abs is exact for i64::MIN
        self.value = F::from_u64(v.unsigned_abs());
        if v < 0 {
            self.value = self.value.negate();
        }
        self
    }

    fn zero(&mut self) -> &mut Self {
        self.value = F::zero();
        self
    }

    fn one(&mut self) -> &mut Self {
        self.value = F::one();
        self
    }

    fn add(&mut self, a: &Self, b: &Self) -> &mut Self {
        self.value = F::add(&a.value, &b.value);
        self
    }

    fn sub(&mut self, a: &Self, b: &Self) -> &mut Self {
        self.value = F::sub(&a.value, &b.value);
        self
    }

    fn negate(&mut self, a: &Self) -> &mut Self {
        self.value = F::negate(&a.value);
        self
    }

    fn mul(&mut self, a: &Self, b: &Self) -> &mut Self {
        self.value = F::mul(&a.value, &b.value);
        self
    }

    fn inverse(&mut self, a: &Self) -> Result<&mut Self, Error> {
        self.value = F::invert(&a.value).ok_or(Error::DivisionByZero)?;
        Ok(self)
    }

    fn div(&mut self, a: &Self, b: &Self) -> Result<&mut Self, Error> {
        let mut inv = Self::new();
        inv.inverse(b)?;
        Ok(self.mul(a, &inv))
    }

    fn is_zero(&self) -> bool {
        F::is_zero(&self.value)
    }

    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let mut buf = [0u8; SCALAR_BYTES];
        rng.fill_bytes(&mut buf);
        self.value = F::from_repr_reduced(&buf);
        self
    }

    fn encoded_len() -> usize {
        SCALAR_BYTES
    }

    fn to_bytes(&self) -> Self::Repr {
        self.value.to_repr()
    }

    fn set_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, Error> {
        let repr: &[u8; SCALAR_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: SCALAR_BYTES,
            got: bytes.len(),
        })?;
        self.value = F::from_repr_reduced(repr);
        Ok(self)
    }

    fn encode_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize, Error> {
        w.write_all(&self.value.to_repr())?;
        Ok(SCALAR_BYTES)
    }

    fn decode_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<usize, Error> {
        let mut buf = [0u8; SCALAR_BYTES];
        let mut filled = 0;
        while filled < SCALAR_BYTES {
            match r.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        if filled < SCALAR_BYTES {
            return Err(Error::ShortRead {
                expected: SCALAR_BYTES,
                got: filled,
            });
        }
        self.value = F::from_repr_reduced(&buf);
        Ok(filled)
    }
}

impl<F: FieldElement> ops::Add for FieldScalar<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_inner(F::add(&self.value, &rhs.value))
    }
}

impl<F: FieldElement> ops::Sub for FieldScalar<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_inner(F::sub(&self.value, &rhs.value))
    }
}

impl<F: FieldElement> ops::Mul for FieldScalar<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_inner(F::mul(&self.value, &rhs.value))
    }
}

impl<F: FieldElement> ops::Neg for FieldScalar<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_inner(F::negate(&self.value))
    }
}

impl<F: FieldElement> ops::AddAssign for FieldScalar<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = F::add(&self.value, &rhs.value);
    }
}

impl<F: FieldElement> ops::SubAssign for FieldScalar<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = F::sub(&self.value, &rhs.value);
    }
}

impl<F: FieldElement> ops::MulAssign for FieldScalar<F> {
    fn mul_assign(&mut self, rhs: Self) {
        self.value = F::mul(&self.value, &rhs.value);
    }
}

// Serialized as the 32-byte canonical encoding; non-canonical input is rejected.
impl<F: FieldElement> Serialize for FieldScalar<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.value.to_repr())
    }
}

impl<'de, F: FieldElement> Deserialize<'de> for FieldScalar<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        let repr: [u8; SCALAR_BYTES] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| <D::Error as de::Error>::invalid_length(bytes.len(), &"32 scalar bytes"))?;
        F::from_repr(&repr)
            .map(Self::from_inner)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MODULUS_BE;
    use rand::{SeedableRng, rngs::StdRng};

    const R_MINUS_ONE: &str =
        "52435875175126190479447740508185965837690552500527637822603658699938581184512";

    fn random_scalars(rng: &mut StdRng, n: usize) -> Vec<Fr32> {
        (0..n)
            .map(|_| {
                let mut s = Fr32::new();
                s.pick(rng);
                s
            })
            .collect()
    }

    fn below_modulus(s: &Fr32) -> bool {
        BigUint::from_bytes_be(&s.to_bytes()) < BigUint::from_bytes_be(&MODULUS_BE)
    }

    /// Yields at most `chunk` bytes per read call.
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn new_is_additive_identity() {
        let zero = Fr32::new();
        assert!(zero.is_zero());
        assert_eq!(zero.to_bytes(), [0u8; SCALAR_BYTES]);
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero, Fr32::default());
    }

    #[test]
    fn arithmetic_stays_reduced() {
        let mut rng = StdRng::seed_from_u64(1);
        let xs = random_scalars(&mut rng, 16);
        let mut max = Fr32::new();
        max.set_i64(-1);
        for pair in xs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let mut out = Fr32::new();
            assert!(below_modulus(out.add(a, b)));
            assert!(below_modulus(out.sub(a, b)));
            assert!(below_modulus(out.sub(b, a)));
            assert!(below_modulus(out.mul(a, b)));
            assert!(below_modulus(out.negate(a)));
            assert!(below_modulus(out.add(a, &max)));
        }
        assert_eq!(max.to_string(), R_MINUS_ONE);
    }

    #[test]
    fn identity_laws() {
        let mut rng = StdRng::seed_from_u64(2);
        let zero = Fr32::new();
        let mut one = Fr32::new();
        one.one();
        for a in random_scalars(&mut rng, 16) {
            let mut out = Fr32::new();
            assert_eq!(*out.add(&a, &zero), a);
            assert_eq!(*out.mul(&a, &one), a);
            assert!(out.sub(&a, &a).is_zero());

            let mut neg = Fr32::new();
            neg.negate(&a);
            assert_eq!(*out.negate(&neg), a);
            assert!(out.add(&a, &neg).is_zero());
        }
        let mut out = Fr32::new();
        assert!(out.negate(&zero).is_zero());
    }

    #[test]
    fn inverse_and_division() {
        let mut rng = StdRng::seed_from_u64(3);
        let xs = random_scalars(&mut rng, 16);
        for pair in xs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);

            let mut inv = Fr32::new();
            inv.inverse(b).expect("non-zero");
            let mut product = Fr32::new();
            product.mul(b, &inv);
            assert_eq!(product, *Fr32::new().one());

            let mut quotient = Fr32::new();
            quotient.div(a, b).expect("non-zero divisor");
            let mut expected = Fr32::new();
            expected.mul(a, &inv);
            assert_eq!(quotient, expected);
        }
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let zero = Fr32::new();
        let seven = Fr32::from_u64(7);
        let mut out = seven;

        assert!(matches!(out.inverse(&zero), Err(Error::DivisionByZero)));
        assert!(matches!(out.div(&seven, &zero), Err(Error::DivisionByZero)));
        assert_eq!(out, seven, "receiver must be untouched on failure");
    }

    #[test]
    fn small_integers() {
        let mut five = Fr32::new();
        five.set_i64(5);
        let mut minus_five = Fr32::new();
        minus_five.set_i64(-5);
        assert!(Fr32::new().add(&five, &minus_five).is_zero());
        assert_eq!(five, Fr32::from_u64(5));

        assert!(Fr32::new().set_i64(0).is_zero());

        let mut min = Fr32::new();
        min.set_i64(i64::MIN);
        let mut expected = Fr32::new();
        expected.negate(&Fr32::from_u64(1 << 63));
        assert_eq!(min, expected);

        let mut max = Fr32::new();
        max.set_i64(i64::MAX);
        let mut sum = Fr32::new();
        sum.add(&max, &min);
        assert_eq!(sum.to_string(), R_MINUS_ONE);
    }

    #[test]
    fn clone_is_independent() {
        let a = Fr32::from_u64(11);
        let mut b = a.clone();
        b.set_i64(-3);
        assert_eq!(a, Fr32::from_u64(11));

        let mut c = Fr32::new();
        c.set(&a);
        let d = c.clone();
        c.one();
        assert_eq!(d, a);
    }

    #[test]
    fn encoding_round_trip() {
        let mut rng = StdRng::seed_from_u64(4);
        for a in random_scalars(&mut rng, 16) {
            let mut buf = Vec::new();
            assert_eq!(a.encode_to(&mut buf).expect("vec write"), SCALAR_BYTES);
            assert_eq!(buf.len(), Fr32::encoded_len());
            assert_eq!(buf.as_slice(), a.to_bytes().as_slice());

            let mut decoded = Fr32::new();
            let consumed = decoded.decode_from(&mut buf.as_slice()).expect("decode");
            assert_eq!(consumed, SCALAR_BYTES);
            assert_eq!(decoded, a);

            let mut from_buf = Fr32::new();
            from_buf.set_bytes(&buf).expect("exact length");
            assert_eq!(from_buf, a);
        }
    }

    #[test]
    fn encoding_is_big_endian() {
        let s = Fr32::from_u64(0x0102);
        let bytes = s.to_bytes();
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
        assert!(bytes[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn decode_reduces_out_of_range_input() {
        let mut s = Fr32::new();
        s.set_bytes(&MODULUS_BE).expect("exact length");
        assert!(s.is_zero());

        s.set_bytes(&[0xff; SCALAR_BYTES]).expect("exact length");
        assert_eq!(
            s.to_string(),
            "10920338887063814464675503992315976177888879664585288394250266608035967270909"
        );
    }

    #[test]
    fn short_read_is_rejected() {
        let data = [9u8; SCALAR_BYTES - 1];
        let mut s = Fr32::from_u64(42);
        match s.decode_from(&mut &data[..]) {
            Err(Error::ShortRead { expected, got }) => {
                assert_eq!(expected, SCALAR_BYTES);
                assert_eq!(got, SCALAR_BYTES - 1);
            }
            other => panic!("expected short read, got {other:?}"),
        }
        assert_eq!(s, Fr32::from_u64(42));

        let mut empty: &[u8] = &[];
        assert!(matches!(
            s.decode_from(&mut empty),
            Err(Error::ShortRead { got: 0, .. })
        ));
    }

    #[test]
    fn decode_collects_partial_reads() {
        let expected = Fr32::from_u64(0xdead_beef);
        let bytes = expected.to_bytes();
        let mut trickle = Trickle {
            data: &bytes,
            chunk: 5,
        };
        let mut s = Fr32::new();
        assert_eq!(s.decode_from(&mut trickle).expect("decode"), SCALAR_BYTES);
        assert_eq!(s, expected);
    }

    #[test]
    fn decode_leaves_trailing_bytes() {
        let a = Fr32::from_u64(1);
        let b = Fr32::from_u64(2);
        let mut stream = Vec::new();
        a.encode_to(&mut stream).expect("write");
        b.encode_to(&mut stream).expect("write");

        let mut reader = stream.as_slice();
        let mut s = Fr32::new();
        s.decode_from(&mut reader).expect("first");
        assert_eq!(s, a);
        s.decode_from(&mut reader).expect("second");
        assert_eq!(s, b);
        assert!(reader.is_empty());
    }

    #[test]
    fn set_bytes_rejects_wrong_length() {
        let mut s = Fr32::new();
        for len in [0, 31, 33, 64] {
            let buf = vec![1u8; len];
            match s.set_bytes(&buf) {
                Err(Error::InvalidLength { expected, got }) => {
                    assert_eq!(expected, SCALAR_BYTES);
                    assert_eq!(got, len);
                }
                other => panic!("expected invalid length, got {other:?}"),
            }
        }
    }

    #[test]
    fn pick_is_deterministic_for_seeded_streams() {
        let a = random_scalars(&mut StdRng::seed_from_u64(99), 4);
        let b = random_scalars(&mut StdRng::seed_from_u64(99), 4);
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn decimal_round_trip() {
        let mut rng = StdRng::seed_from_u64(5);
        for a in random_scalars(&mut rng, 8) {
            let parsed: Fr32 = a.to_string().parse().expect("decimal");
            assert_eq!(parsed, a);
        }
        assert_eq!(
            Fr32::from_decimal_str(R_MINUS_ONE).expect("r - 1"),
            *Fr32::new().set_i64(-1)
        );
    }

    #[test]
    fn decimal_rejects_malformed() {
        let r = "52435875175126190479447740508185965837690552500527637822603658699938581184513";
        for bad in ["", "-1", "12a", " 1", r] {
            assert!(
                matches!(Fr32::from_decimal_str(bad), Err(Error::MalformedInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn operators_match_in_place_forms() {
        let mut rng = StdRng::seed_from_u64(6);
        let xs = random_scalars(&mut rng, 2);
        let (a, b) = (xs[0], xs[1]);

        assert_eq!(a + b, *Fr32::new().add(&a, &b));
        assert_eq!(a - b, *Fr32::new().sub(&a, &b));
        assert_eq!(a * b, *Fr32::new().mul(&a, &b));
        assert_eq!(-a, *Fr32::new().negate(&a));

        let mut acc = a;
        acc += b;
        acc -= b;
        acc *= Fr32::from_u64(1);
        assert_eq!(acc, a);
    }

    #[test]
    fn serde_uses_canonical_bytes() {
        let a = Fr32::from_u64(258);
        let json = serde_json::to_string(&a).expect("serialize");
        let back: Fr32 = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, a);

        let non_canonical = serde_json::to_string(&MODULUS_BE.to_vec()).expect("serialize");
        assert!(serde_json::from_str::<Fr32>(&non_canonical).is_err());
        assert!(serde_json::from_str::<Fr32>("[1,2,3]").is_err());
    }
}
