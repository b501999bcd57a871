use num_bigint::BigUint;

use crate::affine::Affine;
use crate::codec::TAG_UNCOMPRESSED;
use crate::errors::PointError;
use crate::jacobian::{scalar_mul, Jacobian};
use crate::params::CurveParams;

/// Generic short Weierstrass curve interface.
///
/// Points are passed as [`Affine`] values; none of the arithmetic methods
/// check that their inputs lie on the curve.
pub trait EllipticCurve {
    fn params(&self) -> &CurveParams;

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    fn add(&self, a: &Affine, b: &Affine) -> Affine;

    fn double(&self, a: &Affine) -> Affine;

    /// `[k]point` for a big-endian scalar `k` of any length.
    fn scalar_mult(&self, point: &Affine, k: &[u8]) -> Affine;

    #[inline]
    fn scalar_base_mult(&self, k: &[u8]) -> Affine {
        self.scalar_mult(&self.params().generator(), k)
    }

    /// Uncompressed encoding `0x04 || x || y`, each coordinate zero-padded
    /// to the field length.
    fn marshal(&self, point: &Affine) -> Result<Vec<u8>, PointError> {
        let (x, y) = point.coordinates().ok_or(PointError::Infinity)?;
        let params = self.params();
        if x >= params.p() || y >= params.p() {
            return Err(PointError::NotOnCurve);
        }
        let byte_len = params.byte_len();

        let mut out = vec![0u8; 1 + 2 * byte_len];
        out[0] = TAG_UNCOMPRESSED;
        write_padded(&mut out[1..1 + byte_len], x);
        write_padded(&mut out[1 + byte_len..], y);
        Ok(out)
    }

    /// Inverse of [`EllipticCurve::marshal`]. Rejects coordinates that are not
    /// reduced or not on the curve.
    fn unmarshal(&self, data: &[u8]) -> Result<Affine, PointError> {
        let params = self.params();
        let byte_len = params.byte_len();
        let expected = 1 + 2 * byte_len;

        if data.len() != expected {
            return Err(PointError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        if data[0] != TAG_UNCOMPRESSED {
            return Err(PointError::InvalidHeader(Some(data[0])));
        }

        let x = BigUint::from_bytes_be(&data[1..1 + byte_len]);
        let y = BigUint::from_bytes_be(&data[1 + byte_len..]);
        if &x >= params.p() || &y >= params.p() || !self.is_on_curve(&x, &y) {
            return Err(PointError::NotOnCurve);
        }

        Ok(Affine::new(x, y))
    }
}

// big-endian, left-padded with zeros; `value` must fit in `dst`
fn write_padded(dst: &mut [u8], value: &BigUint) {
    let bytes = value.to_bytes_be();
    let offset = dst.len() - bytes.len();
    dst[offset..].copy_from_slice(&bytes);
}

impl EllipticCurve for CurveParams {
    #[inline]
    fn params(&self) -> &CurveParams {
        self
    }

    #[inline]
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        CurveParams::is_on_curve(self, x, y)
    }

    fn add(&self, a: &Affine, b: &Affine) -> Affine {
        let field = self.field();
        Jacobian::from_affine(a)
            .add(&Jacobian::from_affine(b), &field)
            .to_affine(&field)
    }

    fn double(&self, a: &Affine) -> Affine {
        let field = self.field();
        Jacobian::from_affine(a).double(&field).to_affine(&field)
    }

    fn scalar_mult(&self, point: &Affine, k: &[u8]) -> Affine {
        scalar_mul(point, k, &self.field())
    }
}
