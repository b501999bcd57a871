use super::*;
use hex_literal::hex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wtls_curve::{Affine, BigUint, CurveId, EllipticCurve, PointError};

#[test]
fn test_agreement() {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in [CurveId::P112, CurveId::P160] {
        let alice = SecretKey::random(curve, &mut rng);
        let bob = SecretKey::random(curve, &mut rng);

        let ab = alice.diffie_hellman(&bob.public_key()).expect("agree");
        let ba = bob.diffie_hellman(&alice.public_key()).expect("agree");

        assert_eq!(ab, ba);
        assert_eq!(ab.len(), curve.params().byte_len());
    }
}

#[test]
fn test_agreement_vectors() {
    let alice = SecretKey::from_bytes(CurveId::P112, &[0x05]).expect("secret");
    let bob = SecretKey::from_bytes(CurveId::P112, &hex!("deadbeef")).expect("secret");
    let shared = alice.diffie_hellman(&bob.public_key()).expect("agree");
    assert_eq!(shared.as_bytes(), hex!("4636cfe375b1e5ea505cb6640230"));

    let alice = SecretKey::from_bytes(CurveId::P160, &[0x05]).expect("secret");
    let bob = SecretKey::from_bytes(CurveId::P160, &hex!("deadbeef")).expect("secret");
    let shared = bob.diffie_hellman(&alice.public_key()).expect("agree");
    assert_eq!(
        shared.as_bytes(),
        hex!("62b0084f0c5923f23242bc8f9066c33155b08718")
    );
}

#[test]
fn test_rejects_curve_mismatch() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = SecretKey::random(CurveId::P112, &mut rng);
    let b = SecretKey::random(CurveId::P160, &mut rng);
    assert_eq!(
        a.diffie_hellman(&b.public_key()),
        Err(EcdhError::CurveMismatch(CurveId::P112, CurveId::P160))
    );
}

#[test]
fn test_secret_key_range() {
    let n = CurveId::P112.params().n().clone();
    assert_eq!(
        SecretKey::from_bytes(CurveId::P112, &[0x00, 0x00]),
        Err(EcdhError::InvalidSecretKey)
    );
    assert_eq!(
        SecretKey::from_bytes(CurveId::P112, &n.to_bytes_be()),
        Err(EcdhError::InvalidSecretKey)
    );
    let max = &n - 1u32;
    assert!(SecretKey::from_bytes(CurveId::P112, &max.to_bytes_be()).is_ok());
}

#[test]
fn test_secret_key_bytes() {
    let sk = SecretKey::from_bytes(CurveId::P160, &[0x2a]).expect("secret");
    let bytes = sk.to_bytes();
    assert_eq!(bytes.len(), 21);
    assert_eq!(bytes[20], 0x2a);
    assert_eq!(SecretKey::from_bytes(CurveId::P160, &bytes), Ok(sk));
}

#[test]
fn test_public_key_encodings() {
    let mut rng = StdRng::seed_from_u64(9);
    for curve in [CurveId::P112, CurveId::P160] {
        let pk = SecretKey::random(curve, &mut rng).public_key();

        let compressed = pk.to_compressed().expect("encode");
        assert_eq!(PublicKey::from_sec1_bytes(curve, &compressed), Ok(pk.clone()));

        let uncompressed = pk.to_uncompressed().expect("encode");
        assert_eq!(uncompressed.len(), 1 + 2 * curve.params().byte_len());
        assert_eq!(PublicKey::from_sec1_bytes(curve, &uncompressed), Ok(pk));
    }
}

#[test]
fn test_public_key_rejects() {
    assert_eq!(
        PublicKey::from_sec1_bytes(CurveId::P112, &[0x05, 0x01]),
        Err(EcdhError::Encoding(PointError::InvalidHeader(Some(0x05))))
    );
    assert_eq!(
        PublicKey::from_affine(CurveId::P112, Affine::infinity()),
        Err(EcdhError::InvalidPublicKey)
    );
    assert_eq!(
        PublicKey::from_affine(
            CurveId::P112,
            Affine::new(BigUint::from(1u32), BigUint::from(3u32))
        ),
        Err(EcdhError::InvalidPublicKey)
    );
}

#[test]
fn test_public_key_from_generator() {
    let params = CurveId::P160.params();
    let pk = PublicKey::from_affine(CurveId::P160, params.generator()).expect("valid");
    let sk = SecretKey::from_bytes(CurveId::P160, &[0x01]).expect("secret");
    assert_eq!(PublicKey::from(&sk), pk);
    assert_eq!(pk.point(), &params.scalar_base_mult(&[0x01]));
}

#[test]
fn test_serde_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    let sk = SecretKey::random(CurveId::P112, &mut rng);
    let pk = sk.public_key();

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");

    let sk2: SecretKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    assert_eq!(sk2, sk);
    assert_eq!(pk2, pk);
}

#[test]
fn test_deserialize_rejects_invalid_keys() {
    // bincode encodes a two-field struct the same way as a pair
    let off_curve = (CurveId::P112, Affine::new(BigUint::from(1u32), BigUint::from(3u32)));
    let bytes = bincode::serialize(&off_curve).expect("serialize");
    assert!(bincode::deserialize::<PublicKey>(&bytes).is_err());

    let infinity = (CurveId::P160, Affine::infinity());
    let bytes = bincode::serialize(&infinity).expect("serialize");
    assert!(bincode::deserialize::<PublicKey>(&bytes).is_err());

    let zero = (CurveId::P112, BigUint::from(0u32));
    let bytes = bincode::serialize(&zero).expect("serialize");
    assert!(bincode::deserialize::<SecretKey>(&bytes).is_err());

    let order = (CurveId::P112, CurveId::P112.params().n().clone());
    let bytes = bincode::serialize(&order).expect("serialize");
    assert!(bincode::deserialize::<SecretKey>(&bytes).is_err());
}

#[test]
fn test_secret_key_debug_is_redacted() {
    let sk = SecretKey::from_bytes(CurveId::P112, &[0x2a]).expect("secret");
    let shown = format!("{sk:?}");
    assert!(shown.contains("P112"));
    assert!(!shown.contains("42"));
}
