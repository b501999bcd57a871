//! Secret and public keys for WTLS key agreement.

use core::fmt::{self, Debug, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};
use wtls_curve::{random_scalar, Affine, BigUint, CurveId, EllipticCurve};

use crate::agreement::{pad_be, SharedSecret};
use crate::errors::EcdhError;

/// A secret scalar `k` in `[1, n)` on one of the WTLS curves.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use wtls_curve::CurveId;
/// use wtls_ecdh::SecretKey;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let secret_key = SecretKey::random(CurveId::P160, &mut rng);
/// let public_key = secret_key.public_key();
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SecretKeyRepr")]
pub struct SecretKey {
    curve: CurveId,
    scalar: BigUint,
}

/// A public key `[k]G`, never the point at infinity.
///
/// Deserialization runs the same checks as [`PublicKey::from_affine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PublicKeyRepr")]
pub struct PublicKey {
    curve: CurveId,
    point: Affine,
}

// unvalidated wire forms
#[derive(Deserialize)]
struct SecretKeyRepr {
    curve: CurveId,
    scalar: BigUint,
}

#[derive(Deserialize)]
struct PublicKeyRepr {
    curve: CurveId,
    point: Affine,
}

impl TryFrom<SecretKeyRepr> for SecretKey {
    type Error = EcdhError;

    fn try_from(repr: SecretKeyRepr) -> Result<Self, Self::Error> {
        SecretKey::from_scalar(repr.curve, repr.scalar)
    }
}

impl TryFrom<PublicKeyRepr> for PublicKey {
    type Error = EcdhError;

    fn try_from(repr: PublicKeyRepr) -> Result<Self, Self::Error> {
        PublicKey::from_affine(repr.curve, repr.point)
    }
}

impl SecretKey {
    /// Generates a random secret key on `curve`.
    pub fn random<R: Rng + ?Sized>(curve: CurveId, rng: &mut R) -> Self {
        Self {
            curve,
            scalar: random_scalar(curve.params(), rng),
        }
    }

    /// Loads a big-endian scalar. Fails unless `0 < k < n`.
    pub fn from_bytes(curve: CurveId, bytes: &[u8]) -> Result<Self, EcdhError> {
        Self::from_scalar(curve, BigUint::from_bytes_be(bytes))
    }

    fn from_scalar(curve: CurveId, scalar: BigUint) -> Result<Self, EcdhError> {
        if scalar.bits() == 0 || &scalar >= curve.params().n() {
            return Err(EcdhError::InvalidSecretKey);
        }
        Ok(Self { curve, scalar })
    }

    /// Big-endian scalar, zero-padded to the byte length of `n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.curve.params().n().bits().div_ceil(8) as usize;
        pad_be(&self.scalar, len)
    }

    #[inline]
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Derives `[k]G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            curve: self.curve,
            point: self
                .curve
                .params()
                .scalar_base_mult(&self.scalar.to_bytes_be()),
        }
    }

    /// Computes the x-coordinate of `[k]peer`, padded to the field length.
    pub fn diffie_hellman(&self, peer: &PublicKey) -> Result<SharedSecret, EcdhError> {
        if peer.curve != self.curve {
            return Err(EcdhError::CurveMismatch(self.curve, peer.curve));
        }

        let params = self.curve.params();
        let shared = params.scalar_mult(&peer.point, &self.scalar.to_bytes_be());
        let x = shared.x().ok_or(EcdhError::PointAtInfinity)?;

        Ok(SharedSecret::new(pad_be(x, params.byte_len())))
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

impl PublicKey {
    /// Wraps a point after checking that it is finite, reduced and on `curve`.
    pub fn from_affine(curve: CurveId, point: Affine) -> Result<Self, EcdhError> {
        let params = curve.params();
        let (x, y) = point.coordinates().ok_or(EcdhError::InvalidPublicKey)?;
        if x >= params.p() || y >= params.p() || !params.is_on_curve(x, y) {
            return Err(EcdhError::InvalidPublicKey);
        }
        Ok(Self { curve, point })
    }

    /// Decodes a compressed (`0x02`/`0x03`) or uncompressed (`0x04`) point.
    pub fn from_sec1_bytes(curve: CurveId, bytes: &[u8]) -> Result<Self, EcdhError> {
        let point = curve.params().decompress_point(bytes)?;
        Self::from_affine(curve, point)
    }

    pub fn to_compressed(&self) -> Result<Vec<u8>, EcdhError> {
        Ok(self.curve.params().compress_point(&self.point)?)
    }

    pub fn to_uncompressed(&self) -> Result<Vec<u8>, EcdhError> {
        Ok(self.curve.params().marshal(&self.point)?)
    }

    #[inline]
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    #[inline]
    pub fn point(&self) -> &Affine {
        &self.point
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(sk: &SecretKey) -> Self {
        sk.public_key()
    }
}
