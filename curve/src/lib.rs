//! Elliptic curves of the WAP-WTLS handshake.
//!
//! This crate provides the two fixed WTLS prime curves (P-112 and P-160, both
//! `y² = x³ + 3`), affine points, Jacobian point arithmetic, scalar
//! multiplication, modular square roots and compressed/uncompressed point
//! encodings. The parameter sets are built once, on first access.
//!
//! None of the arithmetic is constant time.
//!
//! ```
//! use wtls_curve::{p112, EllipticCurve};
//!
//! let curve = p112();
//! let point = curve.scalar_base_mult(&[0x2a]);
//! let bytes = curve.compress_point(&point).unwrap();
//! assert_eq!(curve.decompress_point(&bytes).unwrap(), point);
//! ```

mod affine;
mod codec;
mod curve;
mod errors;
mod field;
mod jacobian;
mod params;
mod random;
mod sqrt;

pub use affine::Affine;
pub use codec::{compress_point, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED};
pub use curve::EllipticCurve;
pub use errors::{PointError, UnknownCurve};
pub use num_bigint::BigUint;
pub use params::{p112, p160, CurveId, CurveParams};
pub use random::{generate_key, random_scalar};
pub use sqrt::{legendre_symbol, sqrt};
