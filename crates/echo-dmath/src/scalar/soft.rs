// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Software-emulated deterministic float32.
//!
//! The payload is stored as a raw `u32` bit pattern and every operation runs
//! through the integer kernels in [`crate::softfloat`]; no host float
//! instruction is involved anywhere, so results are bit-identical on every
//! target regardless of FPU quirks, compiler flags or optimization level.
//!
//! This is the reference kind: the other deterministic kinds are validated by
//! comparing their bit results against `SoftF32`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::softfloat;
use crate::traits::{FloatScalar, FpTraits};

/// Deterministic float32 backed by integer-only IEEE-754 emulation.
///
/// # Examples
/// ```
/// use echo_dmath::SoftF32;
///
/// let a = SoftF32::new(0.1) + SoftF32::new(0.2);
/// assert_eq!(a.to_bits(), 0x3e99999a);
/// ```
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct SoftF32(u32);

impl SoftF32 {
    /// The positive zero value.
    pub const ZERO: Self = Self(0);

    /// The identity value.
    pub const ONE: Self = Self(0x3f80_0000);

    /// Wraps a host float payload bit-for-bit.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value.to_bits())
    }

    /// Returns the payload as a host float, bit-for-bit.
    #[inline]
    pub const fn to_float(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Returns the raw binary32 bit pattern.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Reinterprets a binary32 bit pattern.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<f32> for SoftF32 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SoftF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_float())
    }
}

impl Add for SoftF32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(softfloat::f32_add(self.0, rhs.0))
    }
}

impl Sub for SoftF32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(softfloat::f32_sub(self.0, rhs.0))
    }
}

impl Mul for SoftF32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(softfloat::f32_mul(self.0, rhs.0))
    }
}

impl Div for SoftF32 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(softfloat::f32_div(self.0, rhs.0))
    }
}

impl Neg for SoftF32 {
    type Output = Self;

    /// Sign-bit flip; exact, no arithmetic involved.
    #[inline]
    fn neg(self) -> Self {
        Self(self.0 ^ 0x8000_0000)
    }
}

impl PartialEq for SoftF32 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        softfloat::f32_eq(self.0, other.0)
    }
}

impl PartialOrd for SoftF32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if FpTraits::is_nan(*self) || FpTraits::is_nan(*other) {
            return None;
        }
        if softfloat::f32_lt(self.0, other.0) {
            Some(Ordering::Less)
        } else if softfloat::f32_eq(self.0, other.0) {
            Some(Ordering::Equal)
        } else {
            Some(Ordering::Greater)
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        softfloat::f32_lt(self.0, other.0)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        softfloat::f32_le(self.0, other.0)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        softfloat::f32_lt(other.0, self.0)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        softfloat::f32_le(other.0, self.0)
    }
}

impl FpTraits for SoftF32 {
    const IS_DETERMINISTIC: bool = true;
    const IS_FIXED_POINT: bool = false;
    const IS_SUPPORTED: bool = true;
    const DISPLAY_NAME: &'static str = "SoftF32";

    type Fallback = Self;

    #[inline]
    fn to_fallback(self) -> Self {
        self
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.0 & 0x7fff_ffff > 0x7f80_0000
    }

    #[inline]
    fn is_inf(self) -> bool {
        self.0 & 0x7fff_ffff == 0x7f80_0000
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.0 & 0x7fff_ffff < 0x7f80_0000
    }

    #[inline]
    fn sign(self) -> bool {
        self.0 >> 31 != 0
    }

    #[inline]
    fn is_zero(self) -> bool {
        self.0 << 1 == 0
    }
}

impl FloatScalar for SoftF32 {
    #[inline]
    fn from_f32(x: f32) -> Self {
        Self::new(x)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self.to_float()
    }

    #[inline]
    fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        self.0
    }

    #[inline]
    fn trunc_i64(self) -> i64 {
        softfloat::f32_to_i64_trunc(self.0)
    }
}

impl crate::serial::AliasRw for SoftF32 {
    type Alias = f32;

    #[inline]
    fn to_alias(self) -> f32 {
        self.to_float()
    }

    #[inline]
    fn from_alias(alias: f32) -> Self {
        Self::new(alias)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SoftF32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_float().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SoftF32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f32::deserialize(deserializer).map(Self::new)
    }
}
