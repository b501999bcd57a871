//! Square roots modulo a prime.
//!
//! [`sqrt`] takes the `a^((p+1)/4)` shortcut when `p ≡ 3 (mod 4)` (true for
//! both WTLS curves) and falls back to Tonelli-Shanks otherwise.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::field::PrimeField;

/// Legendre symbol `(a | p)` by Euler's criterion, for an odd prime `p`.
///
/// Returns `0` when `p` divides `a`, `1` when `a` is a non-zero quadratic
/// residue and `-1` otherwise.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i32 {
    let field = PrimeField::new(p);
    let a = field.reduce(a);
    if a.is_zero() {
        return 0;
    }

    let p_minus_one = p - 1u32;
    let euler = field.pow(&a, &(&p_minus_one >> 1u32));

    if euler == p_minus_one {
        -1
    } else {
        1
    }
}

/// Returns some `r` with `r² ≡ a (mod p)`, or `None` if `a` is a
/// non-residue. `a ≡ 0` yields `Some(0)`.
pub fn sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let field = PrimeField::new(p);
    let a = field.reduce(a);

    if a.is_zero() {
        return Some(a);
    }
    if *p == BigUint::from(2u32) {
        return Some(a);
    }
    if legendre_symbol(&a, p) != 1 {
        return None;
    }
    if p.bit(0) && p.bit(1) {
        let e = (p + 1u32) >> 2u32;
        return Some(field.pow(&a, &e));
    }

    tonelli_shanks(&a, &field)
}

fn tonelli_shanks(a: &BigUint, field: &PrimeField<'_>) -> Option<BigUint> {
    let p = field.modulus();

    // p - 1 = s * 2^e with s odd
    let p_minus_one = p - 1u32;
    let e = p_minus_one.trailing_zeros().unwrap_or(0);
    let s = &p_minus_one >> e;

    let mut n = BigUint::from(2u32);
    while legendre_symbol(&n, p) != -1 {
        n += 1u32;
    }

    let mut x = field.pow(a, &((&s + 1u32) >> 1u32));
    let mut b = field.pow(a, &s);
    let mut g = field.pow(&n, &s);
    let mut r = e;

    loop {
        let mut t = b.clone();
        let mut m = 0u64;
        while m < r && !t.is_one() {
            t = field.square(&t);
            m += 1;
        }

        if m == 0 {
            return Some(x);
        }
        // only reachable when p is not prime
        if m == r {
            return None;
        }

        let gs = field.pow(&g, &(BigUint::one() << (r - m - 1)));
        g = field.square(&gs);
        x = field.mul(&x, &gs);
        b = field.mul(&b, &g);
        r = m;
    }
}
