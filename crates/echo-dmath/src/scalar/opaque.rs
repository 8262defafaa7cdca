// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! TU-isolation-style deterministic float32.
//!
//! Each operator lives in a `#[inline(never)]` function with
//! [`core::hint::black_box`] on both operands and the result, so the
//! optimizer sees every operation as an opaque call: no constant folding, no
//! reassociation, no contraction into FMA across operation boundaries. This
//! is the Rust rendition of defining each operator in a separately compiled
//! translation unit.
//!
//! The guarantee does not survive whole-program optimization (fat LTO can
//! still inline `inline(never)` candidates after the codegen-unit merge), so
//! the build probe flips `IS_SUPPORTED` off when it detects an LTO build.
//! Callers are expected to gate on it.

use core::hint::black_box;
use core::ops::{Add, Div, Mul, Sub};

use crate::scalar::impl_f32_payload_kind;

/// Deterministic float32 whose operators are optimizer-opaque calls.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct OpaqueF32(f32);

impl_f32_payload_kind!(
    OpaqueF32,
    "OpaqueF32",
    deterministic: true,
    supported: cfg!(not(dmath_wpo))
);

#[inline(never)]
fn op_add(a: f32, b: f32) -> f32 {
    black_box(black_box(a) + black_box(b))
}

#[inline(never)]
fn op_sub(a: f32, b: f32) -> f32 {
    black_box(black_box(a) - black_box(b))
}

#[inline(never)]
fn op_mul(a: f32, b: f32) -> f32 {
    black_box(black_box(a) * black_box(b))
}

#[inline(never)]
fn op_div(a: f32, b: f32) -> f32 {
    black_box(black_box(a) / black_box(b))
}

impl Add for OpaqueF32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(op_add(self.0, rhs.0))
    }
}

impl Sub for OpaqueF32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(op_sub(self.0, rhs.0))
    }
}

impl Mul for OpaqueF32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(op_mul(self.0, rhs.0))
    }
}

impl Div for OpaqueF32 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(op_div(self.0, rhs.0))
    }
}
