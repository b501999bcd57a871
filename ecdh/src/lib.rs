//! Elliptic curve Diffie-Hellman over the WTLS curves.
//!
//! This library implements the ECDH key exchange of the WTLS handshake:
//! - Secret keys are random scalars in `[1, n)`
//! - Public keys are curve points, exchanged in compressed or uncompressed form
//! - The shared secret is the x-coordinate of the agreed point
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wtls_curve::CurveId;
//! use wtls_ecdh::{PublicKey, SecretKey};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let client = SecretKey::random(CurveId::P112, &mut rng);
//! let server = SecretKey::random(CurveId::P112, &mut rng);
//!
//! // Public keys travel compressed
//! let client_hello = client.public_key().to_compressed().expect("finite point");
//! let server_hello = server.public_key().to_compressed().expect("finite point");
//!
//! let server_pk = PublicKey::from_sec1_bytes(CurveId::P112, &server_hello).expect("decode");
//! let client_pk = PublicKey::from_sec1_bytes(CurveId::P112, &client_hello).expect("decode");
//!
//! let a = client.diffie_hellman(&server_pk).expect("agree");
//! let b = server.diffie_hellman(&client_pk).expect("agree");
//! assert_eq!(a, b);
//! ```
//!
//! # Security Considerations
//!
//! - The arithmetic is not constant time
//! - Both curves are far below modern security levels; they exist for
//!   interoperability with legacy WTLS peers

mod agreement;
mod errors;
mod keys;

#[cfg(test)]
mod tests;

pub use agreement::SharedSecret;
pub use errors::EcdhError;
pub use keys::{PublicKey, SecretKey};
