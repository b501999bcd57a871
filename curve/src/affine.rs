use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Affine point on one of the WTLS curves.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// The point does not carry its curve; arithmetic goes through
/// [`EllipticCurve`](crate::EllipticCurve) on the matching [`CurveParams`](crate::CurveParams).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    x: BigUint,
    y: BigUint,
    is_infinity: bool,
}

impl Affine {
    /// Create a new affine point. Coordinates are taken as given.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// The point at infinity (identity element). Both coordinates are absent.
    pub fn infinity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// The x-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// `(x, y)`, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        if self.is_infinity {
            None
        } else {
            Some((&self.x, &self.y))
        }
    }

    /// Consumes the point, returning `(x, y)` or `None` for infinity.
    pub fn into_coordinates(self) -> Option<(BigUint, BigUint)> {
        if self.is_infinity {
            None
        } else {
            Some((self.x, self.y))
        }
    }
}

impl From<(BigUint, BigUint)> for Affine {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Affine::new(x, y)
    }
}
