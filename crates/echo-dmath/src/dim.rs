// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimal hook for the external dimensional-units wrapper.
//!
//! [`DimScalar<T, D>`] tags a scalar with a type-level dimension exponent
//! `D` (a typenum integer: metres are `P1`, areas `P2`, frequencies `N1`,
//! plain numbers `Z0`). The math companions perform only dimension algebra
//! on the tag: multiplication adds exponents, `sqrt` halves them,
//! transcendentals require — and return — dimensionless values. The full
//! units system lives outside this crate; this is the surface it consumes.
//!
//! Rust has no ad-hoc overloading, so the per-function companions are
//! methods rather than a second set of free functions:
//!
//! ```
//! use echo_dmath::dim::DimScalar;
//! use echo_dmath::SoftF32;
//! use typenum::P2;
//!
//! let area = DimScalar::<SoftF32, P2>::new(SoftF32::new(9.0));
//! let side = area.sqrt(); // DimScalar<SoftF32, P1>
//! assert_eq!(side.value.to_float(), 3.0);
//! ```

use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

use typenum::{Diff, Integer, PartialDiv, PartialQuot, Sum, P2, Z0};

use crate::mathf;
use crate::traits::FloatScalar;

/// A scalar carrying a compile-time dimension exponent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DimScalar<T, D> {
    /// The underlying scalar value.
    pub value: T,
    dim: PhantomData<D>,
}

impl<T: FloatScalar, D: Integer> DimScalar<T, D> {
    /// Tags a value with this dimension.
    pub fn new(value: T) -> Self {
        Self {
            value,
            dim: PhantomData,
        }
    }

    /// Magnitude, dimension preserved.
    pub fn abs(self) -> Self {
        Self::new(mathf::abs(self.value))
    }

    /// Floor, dimension preserved.
    pub fn floor(self) -> Self {
        Self::new(mathf::floor(self.value))
    }

    /// Round-half-away, dimension preserved.
    pub fn round(self) -> Self {
        Self::new(mathf::round(self.value))
    }

    /// Remainder against a same-dimension divisor.
    pub fn fmod(self, other: Self) -> Self {
        Self::new(mathf::fmod(self.value, other.value))
    }

    /// NaN-avoiding maximum of two same-dimension values.
    pub fn max(self, other: Self) -> Self {
        Self::new(mathf::max(self.value, other.value))
    }

    /// Square root: halves the dimension exponent (requires it to be even).
    pub fn sqrt(self) -> DimScalar<T, PartialQuot<D, P2>>
    where
        D: PartialDiv<P2>,
        PartialQuot<D, P2>: Integer,
    {
        DimScalar::new(mathf::sqrt(self.value))
    }

    /// Angle of `self/other`, which is dimensionless.
    pub fn atan2(self, other: Self) -> DimScalar<T, Z0> {
        DimScalar::new(mathf::atan2(self.value, other.value))
    }
}

/// Transcendentals exist only at dimension zero.
impl<T: FloatScalar> DimScalar<T, Z0> {
    /// Sine of a dimensionless value.
    pub fn sin(self) -> Self {
        Self::new(mathf::sin(self.value))
    }

    /// Cosine of a dimensionless value.
    pub fn cos(self) -> Self {
        Self::new(mathf::cos(self.value))
    }

    /// Tangent of a dimensionless value.
    pub fn tan(self) -> Self {
        Self::new(mathf::tan(self.value))
    }

    /// Arc sine of a dimensionless value.
    pub fn asin(self) -> Self {
        Self::new(mathf::asin(self.value))
    }

    /// Arc cosine of a dimensionless value.
    pub fn acos(self) -> Self {
        Self::new(mathf::acos(self.value))
    }

    /// Arc tangent of a dimensionless value.
    pub fn atan(self) -> Self {
        Self::new(mathf::atan(self.value))
    }

    /// Exponential of a dimensionless value.
    pub fn exp(self) -> Self {
        Self::new(mathf::exp(self.value))
    }

    /// Natural logarithm of a dimensionless value.
    pub fn log(self) -> Self {
        Self::new(mathf::log(self.value))
    }

    /// Decimal logarithm of a dimensionless value.
    pub fn log10(self) -> Self {
        Self::new(mathf::log10(self.value))
    }
}

impl<T: FloatScalar, D: Integer> Add for DimScalar<T, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<T: FloatScalar, D: Integer> Sub for DimScalar<T, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<T: FloatScalar, D: Integer> Neg for DimScalar<T, D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<T: FloatScalar, D1: Integer, D2: Integer> Mul<DimScalar<T, D2>> for DimScalar<T, D1>
where
    D1: Add<D2>,
    Sum<D1, D2>: Integer,
{
    type Output = DimScalar<T, Sum<D1, D2>>;

    fn mul(self, rhs: DimScalar<T, D2>) -> Self::Output {
        DimScalar::new(self.value * rhs.value)
    }
}

impl<T: FloatScalar, D1: Integer, D2: Integer> Div<DimScalar<T, D2>> for DimScalar<T, D1>
where
    D1: Sub<D2>,
    Diff<D1, D2>: Integer,
{
    type Output = DimScalar<T, Diff<D1, D2>>;

    fn div(self, rhs: DimScalar<T, D2>) -> Self::Output {
        DimScalar::new(self.value / rhs.value)
    }
}
