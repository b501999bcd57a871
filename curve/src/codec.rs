//! Compressed point encoding: `header || x`.
//!
//! The header is `0x02` for an even `y` and `0x03` for an odd `y`; `0x04`
//! marks an uncompressed point and is handed to [`EllipticCurve::unmarshal`].

use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::Affine;
use crate::curve::EllipticCurve;
use crate::errors::PointError;
use crate::field::is_odd;
use crate::params::CurveParams;

pub const TAG_COMPRESSED_EVEN: u8 = 0x02;
pub const TAG_COMPRESSED_ODD: u8 = 0x03;
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Same as [`CurveParams::compress_point`].
pub fn compress_point(curve: &CurveParams, point: &Affine) -> Result<Vec<u8>, PointError> {
    curve.compress_point(point)
}

impl CurveParams {
    /// Parity header followed by the minimal big-endian bytes of `x`.
    ///
    /// The output is not padded, so small `x` values encode shorter than
    /// `1 + byte_len()`.
    pub fn compress_point(&self, point: &Affine) -> Result<Vec<u8>, PointError> {
        let (x, y) = point.coordinates().ok_or(PointError::Infinity)?;
        let x_bytes = x.to_bytes_be();

        let mut out = Vec::with_capacity(1 + x_bytes.len());
        out.push(if is_odd(y) {
            TAG_COMPRESSED_ODD
        } else {
            TAG_COMPRESSED_EVEN
        });
        out.extend_from_slice(&x_bytes);
        Ok(out)
    }

    /// Recover a point from its compressed (or uncompressed) encoding.
    ///
    /// `x` may be given with or without leading zero padding, but never
    /// longer than `byte_len()` bytes.
    pub fn decompress_point(&self, data: &[u8]) -> Result<Affine, PointError> {
        let (&header, x_bytes) = data.split_first().ok_or(PointError::InvalidHeader(None))?;
        let want_odd = match header {
            TAG_COMPRESSED_ODD => true,
            TAG_COMPRESSED_EVEN => false,
            TAG_UNCOMPRESSED => return self.unmarshal(data),
            other => return Err(PointError::InvalidHeader(Some(other))),
        };

        let byte_len = self.byte_len();
        if x_bytes.is_empty() || x_bytes.len() > byte_len {
            return Err(PointError::LengthMismatch {
                expected: 1 + byte_len,
                actual: data.len(),
            });
        }

        let x = BigUint::from_bytes_be(x_bytes);
        if &x >= self.p() {
            return Err(PointError::NotOnCurve);
        }

        let mut y = self.sqrt(&self.rhs(&x)).ok_or(PointError::NotOnCurve)?;
        if is_odd(&y) != want_odd {
            // y = 0 has no odd counterpart
            if y.is_zero() {
                return Err(PointError::NotOnCurve);
            }
            y = self.p() - y;
        }

        Ok(Affine::new(x, y))
    }
}
