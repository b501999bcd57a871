//! Shared secret produced by a key agreement.

use serde::{Deserialize, Serialize};
use wtls_curve::BigUint;

/// The x-coordinate of the agreed point, big-endian and zero-padded to the
/// curve's field length. This is the premaster secret of the WTLS ECDH
/// key exchange.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        SharedSecret(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// Big-endian bytes of `value`, left-padded with zeros to `len`.
pub(crate) fn pad_be(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}
