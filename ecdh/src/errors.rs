//! Error types for WTLS key agreement.

use wtls_curve::{CurveId, PointError};

/// Errors that can occur while loading keys or deriving a shared secret.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EcdhError {
    /// A public key encoding could not be decoded.
    #[error("invalid public key encoding: {0}")]
    Encoding(#[from] PointError),
    /// The secret scalar is zero or not below the base point order.
    #[error("secret scalar out of range")]
    InvalidSecretKey,
    /// The public key is the point at infinity or not on its curve.
    #[error("public key is not a valid point")]
    InvalidPublicKey,
    /// The two keys were generated on different curves.
    #[error("curve mismatch: {0} and {1}")]
    CurveMismatch(CurveId, CurveId),
    /// The agreed point is the point at infinity.
    ///
    /// Both WTLS curves have prime order and every [`PublicKey`](crate::PublicKey)
    /// is validated, so this is not expected in practice.
    #[error("shared point is the point at infinity")]
    PointAtInfinity,
}
