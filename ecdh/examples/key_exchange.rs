use rand::rngs::StdRng;
use rand::SeedableRng;
use wtls_curve::CurveId;
use wtls_ecdh::{PublicKey, SecretKey};

fn main() {
    let curve: CurveId = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("P-160")
        .parse()
        .expect("curve name");

    let mut rng = StdRng::seed_from_u64(42);
    let client = SecretKey::random(curve, &mut rng);
    let server = SecretKey::random(curve, &mut rng);

    let client_pk = client.public_key().to_compressed().expect("encode client key");
    let server_pk = server.public_key().to_uncompressed().expect("encode server key");

    let server_pk = PublicKey::from_sec1_bytes(curve, &server_pk).expect("decode server key");
    let client_pk = PublicKey::from_sec1_bytes(curve, &client_pk).expect("decode client key");

    let a = client.diffie_hellman(&server_pk).expect("client agree");
    let b = server.diffie_hellman(&client_pk).expect("server agree");
    assert_eq!(a, b);

    let hex: String = a.as_bytes().iter().map(|b| format!("{b:02x}")).collect();
    println!("{curve}: premaster secret {hex}");
}
