// WTLS curve 8 (P-112) and curve 9 (P-160), both y² = x³ + 3 with base point (1, 2).
//
// P-112: p = 0xfffffffffffffffffffffffffde7 (112 bits, p ≡ 3 mod 4)
//        n = 0x0100000000000001ecea551ad837e9 (113 bits)
// P-160: p = 0xfffffffffffffffffffffffffffffffffffc808f (160 bits, p ≡ 3 mod 4)
//        n = 0x0100000000000000000001cdc98ae0e2de574abf33 (161 bits)

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::errors::UnknownCurve;
use crate::field::PrimeField;
use crate::sqrt;

const P112_P: &[u8] = &hex!("fffffffffffffffffffffffffde7");
const P112_N: &[u8] = &hex!("0100000000000001ecea551ad837e9");

const P160_P: &[u8] = &hex!("fffffffffffffffffffffffffffffffffffc808f");
const P160_N: &[u8] = &hex!("0100000000000000000001cdc98ae0e2de574abf33");

const B: u32 = 3;
const GX: u32 = 1;
const GY: u32 = 2;

static P112: Lazy<CurveParams> = Lazy::new(|| {
    CurveParams::new(
        "P-112",
        BigUint::from_bytes_be(P112_P),
        BigUint::from_bytes_be(P112_N),
        BigUint::from(B),
        BigUint::from(GX),
        BigUint::from(GY),
        112,
    )
});

static P160: Lazy<CurveParams> = Lazy::new(|| {
    CurveParams::new(
        "P-160",
        BigUint::from_bytes_be(P160_P),
        BigUint::from_bytes_be(P160_N),
        BigUint::from(B),
        BigUint::from(GX),
        BigUint::from(GY),
        160,
    )
});

/// The 112-bit WTLS curve. Built on first access.
pub fn p112() -> &'static CurveParams {
    &P112
}

/// The 160-bit WTLS curve. Built on first access.
pub fn p160() -> &'static CurveParams {
    &P160
}

/// Domain parameters of a short Weierstrass curve `y² = x³ + b` over GF(p).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    name: &'static str,
    /// the order of the underlying field
    p: BigUint,
    /// the order of the base point
    n: BigUint,
    /// the constant of the curve equation
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    /// the size of the underlying field
    bit_size: usize,
}

impl CurveParams {
    pub(crate) fn new(
        name: &'static str,
        p: BigUint,
        n: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        bit_size: usize,
    ) -> Self {
        CurveParams {
            name,
            p,
            n,
            b,
            gx,
            gy,
            bit_size,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn gx(&self) -> &BigUint {
        &self.gx
    }

    #[inline]
    pub fn gy(&self) -> &BigUint {
        &self.gy
    }

    #[inline]
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Length of a field element on the wire: `ceil(bit_size / 8)`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        (self.bit_size + 7) >> 3
    }

    /// The base point `(gx, gy)`.
    pub fn generator(&self) -> Affine {
        Affine::new(self.gx.clone(), self.gy.clone())
    }

    #[inline]
    pub(crate) fn field(&self) -> PrimeField<'_> {
        PrimeField::new(&self.p)
    }

    /// `x³ + b mod p`, the right-hand side of the curve equation.
    pub(crate) fn rhs(&self, x: &BigUint) -> BigUint {
        let field = self.field();
        let x3 = field.mul(&field.square(x), x);
        field.add(&x3, &self.b)
    }

    /// Check `y² ≡ x³ + b (mod p)`.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        self.field().square(y) == self.rhs(x)
    }

    /// A square root of `a` modulo `p`, if one exists.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        sqrt::sqrt(a, &self.p)
    }

    /// `-point`, i.e. `(x, p - y)`.
    pub fn negate(&self, point: &Affine) -> Affine {
        match point.coordinates() {
            Some((x, y)) => Affine::new(x.clone(), self.field().neg(y)),
            None => Affine::infinity(),
        }
    }
}

/// Selector for the two fixed WTLS parameter sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    P112,
    P160,
}

impl CurveId {
    pub fn params(self) -> &'static CurveParams {
        match self {
            CurveId::P112 => p112(),
            CurveId::P160 => p160(),
        }
    }
}

impl Display for CurveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.params().name())
    }
}

impl FromStr for CurveId {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "p112" => Ok(CurveId::P112),
            "p160" => Ok(CurveId::P160),
            _ => Err(UnknownCurve(s.to_owned())),
        }
    }
}
