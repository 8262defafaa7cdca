// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Strict-mode deterministic float32.
//!
//! The thinnest wrapper: each operator is a single plain float operation in
//! its own statement. Rust's float semantics are already "strict" in the
//! C sense — the language permits no fast-math reassociation and no implicit
//! contraction — so on targets whose hardware rounds binary32 correctly
//! (everything except legacy x87 code paths) this kind is deterministic at
//! zero cost. The wrapper exists so the choice is explicit and auditable, and
//! so the capability flags can say so.

use core::ops::{Add, Div, Mul, Sub};

use crate::scalar::impl_f32_payload_kind;

/// Deterministic float32 relying on the toolchain's strict IEEE semantics.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct StrictF32(f32);

impl_f32_payload_kind!(
    StrictF32,
    "StrictF32",
    deterministic: true,
    // x86 without SSE goes through the 80-bit x87 stack and double-rounds.
    supported: cfg!(any(not(target_arch = "x86"), target_feature = "sse2"))
);

impl Add for StrictF32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let value = self.0 + rhs.0;
        Self(value)
    }
}

impl Sub for StrictF32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let value = self.0 - rhs.0;
        Self(value)
    }
}

impl Mul for StrictF32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let value = self.0 * rhs.0;
        Self(value)
    }
}

impl Div for StrictF32 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let value = self.0 / rhs.0;
        Self(value)
    }
}
