//! Group law and codec properties over random scalars.

use proptest::prelude::*;
use wtls_curve::{legendre_symbol, p112, p160, sqrt, BigUint, CurveParams, EllipticCurve};

fn curves() -> [&'static CurveParams; 2] {
    [p112(), p160()]
}

prop_compose! {
    fn scalar()(bytes in proptest::collection::vec(any::<u8>(), 1..24)) -> Vec<u8> {
        bytes
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scalar_mult_lands_on_curve(k in scalar()) {
        for curve in curves() {
            let p = curve.scalar_base_mult(&k);
            if let Some((x, y)) = p.coordinates() {
                prop_assert!(x < curve.p() && y < curve.p());
                prop_assert!(curve.is_on_curve(x, y));
            }
        }
    }

    #[test]
    fn double_equals_self_add(k in scalar()) {
        for curve in curves() {
            let p = curve.scalar_base_mult(&k);
            prop_assert_eq!(curve.double(&p), curve.add(&p, &p));
        }
    }

    #[test]
    fn scalar_mult_is_additive(a in any::<u32>(), b in any::<u32>()) {
        for curve in curves() {
            let sum = u64::from(a) + u64::from(b);
            let left = curve.scalar_base_mult(&sum.to_be_bytes());
            let right = curve.add(
                &curve.scalar_base_mult(&a.to_be_bytes()),
                &curve.scalar_base_mult(&b.to_be_bytes()),
            );
            prop_assert_eq!(left, right);
        }
    }

    #[test]
    fn scalar_mult_reduces_mod_order(k in scalar()) {
        for curve in curves() {
            let k = BigUint::from_bytes_be(&k);
            let wrapped = &k + curve.n();
            prop_assert_eq!(
                curve.scalar_base_mult(&k.to_bytes_be()),
                curve.scalar_base_mult(&wrapped.to_bytes_be())
            );
        }
    }

    #[test]
    fn compress_round_trip(k in scalar()) {
        for curve in curves() {
            let p = curve.scalar_base_mult(&k);
            if p.is_infinity() {
                continue;
            }
            let bytes = curve.compress_point(&p).unwrap();
            prop_assert_eq!(curve.decompress_point(&bytes).unwrap(), p);
        }
    }

    #[test]
    fn marshal_round_trip(k in scalar()) {
        for curve in curves() {
            let p = curve.scalar_base_mult(&k);
            if p.is_infinity() {
                continue;
            }
            let bytes = curve.marshal(&p).unwrap();
            prop_assert_eq!(bytes.len(), 1 + 2 * curve.byte_len());
            prop_assert_eq!(curve.unmarshal(&bytes).unwrap(), p);
        }
    }

    #[test]
    fn sqrt_squares_back(bytes in proptest::collection::vec(any::<u8>(), 1..20)) {
        for curve in curves() {
            let a = BigUint::from_bytes_be(&bytes) % curve.p();
            let symbol = legendre_symbol(&a, curve.p());
            prop_assert!((-1..=1).contains(&symbol));
            match sqrt(&a, curve.p()) {
                Some(r) => {
                    prop_assert!(symbol >= 0);
                    prop_assert_eq!((&r * &r) % curve.p(), a);
                }
                None => prop_assert_eq!(symbol, -1),
            }
        }
    }
}
