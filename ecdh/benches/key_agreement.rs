use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wtls_curve::CurveId;
use wtls_ecdh::{PublicKey, SecretKey};

fn bench_keygen(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in [CurveId::P112, CurveId::P160] {
        c.bench_function(&format!("ecdh_keygen_{curve}"), |bencher| {
            bencher.iter(|| {
                let sk = SecretKey::random(curve, &mut rng);
                black_box(sk.public_key());
            })
        });
    }
}

fn bench_agree(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in [CurveId::P112, CurveId::P160] {
        let sk = SecretKey::random(curve, &mut rng);
        let peer = SecretKey::random(curve, &mut rng).public_key();
        let encoded = peer.to_compressed().expect("encode");

        c.bench_function(&format!("ecdh_agree_{curve}"), |bencher| {
            bencher.iter(|| {
                let pk = PublicKey::from_sec1_bytes(curve, black_box(&encoded)).expect("decode");
                black_box(sk.diffie_hellman(&pk).expect("agree"));
            })
        });
    }
}

criterion_group!(benches, bench_keygen, bench_agree);
criterion_main!(benches);
