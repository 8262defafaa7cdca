// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic float32 scalar kinds.
//!
//! Every kind wraps one IEEE-754 binary32 payload and differs only in how the
//! four arithmetic operators are realized. The selection is a build-time
//! decision of the embedding application; code written against
//! [`FpTraits`](crate::traits::FpTraits) works with any of them.
//!
//! | Kind | Determinism | How |
//! |---|---|---|
//! | [`SoftF32`] | always | integer-only emulation (reference) |
//! | [`AsmF32`] | on supported ISAs | one fenced hardware instruction per op |
//! | [`OpaqueF32`] | unless whole-program opt | non-inlinable operator calls |
//! | [`StrictF32`] | strict-IEEE toolchains | plain ops, one per statement |
//! | `f32` | no | host arithmetic, calibration only |

#[cfg(dmath_asm_scalar)]
pub mod asm;
pub mod opaque;
pub mod soft;
pub mod strict;

#[cfg(dmath_asm_scalar)]
pub use asm::AsmF32;
pub use opaque::OpaqueF32;
pub use soft::SoftF32;
pub use strict::StrictF32;

/// Shared plumbing for kinds whose payload is stored as a host `f32`.
///
/// Comparisons and sign flips are bit-exact on every IEEE machine and need no
/// fencing, so they go through the payload directly; only the four arithmetic
/// operators differ per kind and stay in each kind's module.
macro_rules! impl_f32_payload_kind {
    ($ty:ident, $name:literal, deterministic: $det:expr, supported: $sup:expr) => {
        impl $ty {
            /// Wraps a host float payload bit-for-bit.
            #[inline]
            pub const fn new(value: f32) -> Self {
                Self(value)
            }

            /// Returns the payload as a host float, bit-for-bit.
            #[inline]
            pub const fn to_float(self) -> f32 {
                self.0
            }
        }

        impl From<f32> for $ty {
            #[inline]
            fn from(value: f32) -> Self {
                Self(value)
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl PartialOrd for $ty {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;

            /// Sign-bit flip; exact, no arithmetic involved.
            #[inline]
            fn neg(self) -> Self {
                Self(f32::from_bits(self.0.to_bits() ^ 0x8000_0000))
            }
        }

        impl crate::traits::FpTraits for $ty {
            const IS_DETERMINISTIC: bool = $det;
            const IS_FIXED_POINT: bool = false;
            const IS_SUPPORTED: bool = $sup;
            const DISPLAY_NAME: &'static str = $name;

            type Fallback = Self;

            #[inline]
            fn to_fallback(self) -> Self {
                self
            }

            #[inline]
            fn is_nan(self) -> bool {
                self.0.to_bits() & 0x7fff_ffff > 0x7f80_0000
            }

            #[inline]
            fn is_inf(self) -> bool {
                self.0.to_bits() & 0x7fff_ffff == 0x7f80_0000
            }

            #[inline]
            fn is_finite(self) -> bool {
                self.0.to_bits() & 0x7fff_ffff < 0x7f80_0000
            }

            #[inline]
            fn sign(self) -> bool {
                self.0.to_bits() >> 31 != 0
            }

            #[inline]
            fn is_zero(self) -> bool {
                self.0.to_bits() << 1 == 0
            }
        }

        impl crate::traits::FloatScalar for $ty {
            #[inline]
            fn from_f32(x: f32) -> Self {
                Self(x)
            }

            #[inline]
            fn to_f32(self) -> f32 {
                self.0
            }

            #[inline]
            fn from_bits(bits: u32) -> Self {
                Self(f32::from_bits(bits))
            }

            #[inline]
            fn to_bits(self) -> u32 {
                self.0.to_bits()
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn trunc_i64(self) -> i64 {
                self.0 as i64
            }
        }

        impl crate::serial::AliasRw for $ty {
            type Alias = f32;

            #[inline]
            fn to_alias(self) -> f32 {
                self.0
            }

            #[inline]
            fn from_alias(alias: f32) -> Self {
                Self(alias)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                f32::deserialize(deserializer).map(Self)
            }
        }
    };
}

pub(crate) use impl_f32_payload_kind;
