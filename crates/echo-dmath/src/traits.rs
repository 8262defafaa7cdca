// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capability contract shared by every scalar kind.
//!
//! [`FpTraits`] is the surface the elementary-function library and the
//! serialization hook program against. For a kind that claims
//! `IS_DETERMINISTIC`, every method here is a pure function of the operand
//! payload bits and yields identical results on every supported target.
//!
//! [`FloatScalar`] extends the contract for kinds whose payload *is* an
//! IEEE-754 binary32 pattern (everything except fixed point). Fixed point
//! participates through [`FpTraits::to_fallback`], which widens it to its
//! float fallback type before any transcendental runs.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Uniform introspection and conversion hooks for a scalar kind.
pub trait FpTraits: Copy + Debug + PartialEq + PartialOrd + 'static {
    /// Whether this type is a floating-point-like scalar at all.
    const IS_VALID_FP: bool = true;
    /// Whether arithmetic on this kind is bit-stable across targets.
    const IS_DETERMINISTIC: bool;
    /// Whether this kind stores a fixed-point payload.
    const IS_FIXED_POINT: bool;
    /// Whether the current target can realize this kind at all.
    const IS_SUPPORTED: bool;
    /// Human-readable kind name for diagnostics and test reports.
    const DISPLAY_NAME: &'static str;

    /// The float type this kind widens to for elementary functions.
    /// Identity for float-payload kinds.
    type Fallback: FloatScalar;

    /// Widens to the fallback float type.
    fn to_fallback(self) -> Self::Fallback;

    /// IEEE-754 NaN test.
    fn is_nan(self) -> bool;
    /// IEEE-754 infinity test.
    fn is_inf(self) -> bool;
    /// IEEE-754 finiteness test.
    fn is_finite(self) -> bool;
    /// The sign bit, as a bool (true for negative, including -0.0).
    fn sign(self) -> bool;
    /// True exactly for ±0.
    fn is_zero(self) -> bool;
}

/// A scalar whose payload is an IEEE-754 binary32 bit pattern.
///
/// Adds bit-level introspection plus the arithmetic/relational operator
/// surface the math kernels need. `from_bits ∘ to_bits` is the identity for
/// every value, including NaNs.
pub trait FloatScalar:
    FpTraits<Fallback = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Number of explicit fraction bits in the payload.
    const SIGNIFICANT_BITS: u32 = 23;
    /// Mask of the explicit fraction bits.
    const SIGNIFICAND_MASK: u32 = 0x007f_ffff;

    /// Constructs the scalar holding exactly this `f32` payload.
    fn from_f32(x: f32) -> Self;
    /// Returns the payload as `f32` (bitwise, no rounding).
    fn to_f32(self) -> f32;

    /// Reinterprets an IEEE-754 binary32 bit pattern as this scalar.
    fn from_bits(bits: u32) -> Self;
    /// Returns the payload's IEEE-754 binary32 bit pattern.
    fn to_bits(self) -> u32;

    /// Unbiased exponent; subnormals and zeros report −127.
    fn exponent(self) -> i32 {
        (((self.to_bits() >> 23) & 0xff) as i32) - 0x7f
    }

    /// Signed 24-bit significand with the implicit bit reinstated.
    fn mantissa(self) -> i32 {
        let bits = self.to_bits();
        let implicit = u32::from(self.exponent() > -127) << 23;
        let magnitude = ((bits & Self::SIGNIFICAND_MASK) | implicit) as i32;
        if bits >> 31 == 0 {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Replaces the exponent with biased `e + 127`.
    ///
    /// Returns `None` when the biased exponent falls outside `[0, 255]`;
    /// the value is unchanged in that case.
    fn set_exponent(self, e: i32) -> Option<Self> {
        let biased = e + 127;
        if !(0..=255).contains(&biased) {
            return None;
        }
        let bits = (self.to_bits() & 0x807f_ffff) | ((biased as u32) << 23);
        Some(Self::from_bits(bits))
    }

    /// Truncates toward zero into an `i64`.
    fn trunc_i64(self) -> i64;
}

impl FpTraits for f32 {
    const IS_DETERMINISTIC: bool = false;
    const IS_FIXED_POINT: bool = false;
    const IS_SUPPORTED: bool = true;
    const DISPLAY_NAME: &'static str = "f32";

    type Fallback = f32;

    #[inline]
    fn to_fallback(self) -> f32 {
        self
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.to_bits() & 0x7fff_ffff > 0x7f80_0000
    }

    #[inline]
    fn is_inf(self) -> bool {
        self.to_bits() & 0x7fff_ffff == 0x7f80_0000
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.to_bits() & 0x7fff_ffff < 0x7f80_0000
    }

    #[inline]
    fn sign(self) -> bool {
        self.to_bits() >> 31 != 0
    }

    #[inline]
    fn is_zero(self) -> bool {
        self.to_bits() << 1 == 0
    }
}

impl FloatScalar for f32 {
    #[inline]
    fn from_f32(x: f32) -> Self {
        x
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn trunc_i64(self) -> i64 {
        self as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_bit_introspection() {
        assert_eq!(1.0f32.exponent(), 0);
        assert_eq!(2.0f32.exponent(), 1);
        assert_eq!(0.5f32.exponent(), -1);
        assert_eq!(0.0f32.exponent(), -127);
        assert_eq!(f32::from_bits(1).exponent(), -127);

        assert_eq!(1.0f32.mantissa(), 1 << 23);
        assert_eq!((-1.0f32).mantissa(), -(1 << 23));
        assert_eq!(1.5f32.mantissa(), (1 << 23) | (1 << 22));
        // Subnormals have no implicit bit.
        assert_eq!(f32::from_bits(0x0000_0001).mantissa(), 1);
    }

    #[test]
    fn f32_set_exponent() {
        assert_eq!(1.0f32.set_exponent(3), Some(8.0));
        assert_eq!(1.5f32.set_exponent(-1), Some(0.75));
        assert_eq!(1.0f32.set_exponent(200), None);
        assert_eq!(1.0f32.set_exponent(-200), None);
    }

    #[test]
    fn f32_zero_matches_both_signs() {
        assert!(0.0f32.is_zero());
        assert!((-0.0f32).is_zero());
        assert!(!f32::from_bits(1).is_zero());
    }
}
