use num_bigint::BigUint;
use num_traits::Zero;

/// Arithmetic in the integers modulo a prime `p`.
///
/// Operands may be unreduced; every result is reduced into `[0, p)`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct PrimeField<'a> {
    p: &'a BigUint,
}

impl<'a> PrimeField<'a> {
    #[inline]
    pub(crate) fn new(p: &'a BigUint) -> Self {
        PrimeField { p }
    }

    #[inline]
    pub(crate) fn modulus(&self) -> &'a BigUint {
        self.p
    }

    #[inline]
    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % self.p
    }

    #[inline]
    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.p
    }

    /// `a - b mod p`, wrapping negative differences back by one modulus.
    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            self.p - b + a
        }
    }

    #[inline]
    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.p
    }

    #[inline]
    pub(crate) fn mul_u32(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % self.p
    }

    #[inline]
    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    #[inline]
    pub(crate) fn double(&self, a: &BigUint) -> BigUint {
        (a << 1u32) % self.p
    }

    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            self.p - a
        }
    }

    #[inline]
    pub(crate) fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, self.p)
    }

    /// Multiplicative inverse, `None` when `a ≡ 0`.
    #[inline]
    pub(crate) fn invert(&self, a: &BigUint) -> Option<BigUint> {
        self.reduce(a).modinv(self.p)
    }
}

#[inline]
pub(crate) fn is_odd(a: &BigUint) -> bool {
    a.bit(0)
}
