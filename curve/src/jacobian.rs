use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::Affine;
use crate::field::PrimeField;

/// Point in Jacobian coordinates (X:Y:Z) where (x,y) = (X/Z², Y/Z³).
/// The point at infinity is any point with Z = 0.
///
/// Only used inside a single operation to defer the field inversion until
/// the final conversion back to [`Affine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Jacobian {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Jacobian {
    pub(crate) fn identity() -> Self {
        Jacobian {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    #[inline]
    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Lift with Z = 1.
    pub(crate) fn from_affine(point: &Affine) -> Self {
        match point.coordinates() {
            Some((x, y)) => Jacobian {
                x: x.clone(),
                y: y.clone(),
                z: BigUint::one(),
            },
            None => Self::identity(),
        }
    }

    pub(crate) fn to_affine(&self, field: &PrimeField<'_>) -> Affine {
        let Some(z_inv) = field.invert(&self.z) else {
            return Affine::infinity();
        };
        let z_inv2 = field.square(&z_inv);
        let z_inv3 = field.mul(&z_inv2, &z_inv);

        Affine::new(field.mul(&self.x, &z_inv2), field.mul(&self.y, &z_inv3))
    }

    /// Point addition, "add-2007-bl".
    ///
    /// Coincident operands are routed to [`Jacobian::double`] and mutual
    /// negations give the identity; the formula itself covers neither.
    pub(crate) fn add(&self, other: &Self, field: &PrimeField<'_>) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let z1z1 = field.square(&self.z);
        let z2z2 = field.square(&other.z);

        let u1 = field.mul(&self.x, &z2z2);
        let u2 = field.mul(&other.x, &z1z1);
        let s1 = field.mul(&field.mul(&self.y, &other.z), &z2z2);
        let s2 = field.mul(&field.mul(&other.y, &self.z), &z1z1);

        let h = field.sub(&u2, &u1);
        let r = field.sub(&s2, &s1);
        if h.is_zero() {
            if r.is_zero() {
                return self.double(field);
            }
            return Self::identity();
        }

        let i = field.square(&field.double(&h));
        let j = field.mul(&h, &i);
        let r = field.double(&r);
        let v = field.mul(&u1, &i);

        // X3 = r² - J - 2V
        let x3 = field.sub(&field.sub(&field.square(&r), &j), &field.double(&v));

        // Y3 = r(V - X3) - 2·S1·J
        let y3 = field.sub(
            &field.mul(&r, &field.sub(&v, &x3)),
            &field.double(&field.mul(&s1, &j)),
        );

        // Z3 = ((Z1 + Z2)² - Z1Z1 - Z2Z2)·H
        let z_sum = field.square(&field.add(&self.z, &other.z));
        let z3 = field.mul(&field.sub(&field.sub(&z_sum, &z1z1), &z2z2), &h);

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point doubling for a = 0, "dbl-2009-l".
    pub(crate) fn double(&self, field: &PrimeField<'_>) -> Self {
        if self.is_identity() {
            return self.clone();
        }

        let a = field.square(&self.x);
        let b = field.square(&self.y);
        let c = field.square(&b);

        // D = 2((X + B)² - A - C)
        let d = field.square(&field.add(&self.x, &b));
        let d = field.double(&field.sub(&field.sub(&d, &a), &c));

        let e = field.mul_u32(&a, 3);
        let f = field.square(&e);

        let x3 = field.sub(&f, &field.double(&d));
        let y3 = field.sub(&field.mul(&e, &field.sub(&d, &x3)), &field.mul_u32(&c, 8));
        // zero when Y = 0, i.e. a point of order two
        let z3 = field.double(&field.mul(&self.y, &self.z));

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

/// Left-to-right double-and-add of `base` by the big-endian scalar `k`.
///
/// The accumulator stays unset until the first one bit, which seeds it with
/// `base` directly. An all-zero (or empty) scalar gives the point at infinity.
pub(crate) fn scalar_mul(base: &Affine, k: &[u8], field: &PrimeField<'_>) -> Affine {
    if base.is_infinity() {
        return Affine::infinity();
    }
    let b = Jacobian::from_affine(base);

    let mut acc: Option<Jacobian> = None;
    for byte in k {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1 == 1;
            acc = match acc {
                None if bit => Some(b.clone()),
                None => None,
                Some(p) => {
                    let p = p.double(field);
                    Some(if bit { b.add(&p, field) } else { p })
                }
            };
        }
    }

    match acc {
        Some(p) => p.to_affine(field),
        None => Affine::infinity(),
    }
}
