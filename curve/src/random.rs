use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::affine::Affine;
use crate::curve::EllipticCurve;
use crate::params::CurveParams;

/// Sample a scalar uniformly from `[1, n)` by rejection.
pub fn random_scalar<R: Rng + ?Sized>(curve: &CurveParams, rng: &mut R) -> BigUint {
    let n = curve.n();
    let bits = n.bits();
    let mut buf = vec![0u8; bits.div_ceil(8) as usize];
    let excess = buf.len() as u64 * 8 - bits;

    loop {
        rng.fill(buf.as_mut_slice());
        buf[0] &= 0xffu8 >> excess;

        let k = BigUint::from_bytes_be(&buf);
        if !k.is_zero() && &k < n {
            return k;
        }
    }
}

/// Sample a key pair `(k, [k]G)`.
pub fn generate_key<R: Rng + ?Sized>(curve: &CurveParams, rng: &mut R) -> (BigUint, Affine) {
    let k = random_scalar(curve, rng);
    let public = curve.scalar_base_mult(&k.to_bytes_be());
    (k, public)
}
