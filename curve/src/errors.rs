//! Error types for point encoding and curve selection.

/// Errors raised while encoding or decoding curve points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    /// The leading byte is none of `0x02`, `0x03` or `0x04`, or the input is empty.
    #[error("not a compressed point (invalid header {0:?})")]
    InvalidHeader(Option<u8>),
    /// The encoding length does not match the curve's field size.
    #[error("not a compressed point (expected {expected} bytes, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },
    /// The decoded coordinates do not describe a point on the curve.
    #[error("not a compressed point (not on curve)")]
    NotOnCurve,
    /// The point at infinity has no wire encoding.
    #[error("the point at infinity cannot be encoded")]
    Infinity,
}

/// A curve name that matches neither WTLS parameter set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown curve identifier {0:?}")]
pub struct UnknownCurve(pub String);
