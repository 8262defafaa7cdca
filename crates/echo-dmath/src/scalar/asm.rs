// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Asm-fenced deterministic float32.
//!
//! Each binary operator issues exactly one scalar hardware float instruction
//! through `core::arch::asm!`. The asm block is an optimization barrier: the
//! compiler cannot fuse neighbouring operations into FMA, reassociate across
//! them, or constant-fold them away, so the result is the single correctly
//! rounded instruction IEEE-754 prescribes — identical on every conformant
//! CPU with default rounding.
//!
//! Only ISAs with a scalar single-precision instruction form are supported
//! (x86-64 SSE, AArch64, RISC-V F); `build.rs` gates the module out
//! elsewhere.
#![allow(unsafe_code)]

use core::ops::{Add, Div, Mul, Sub};

use crate::scalar::impl_f32_payload_kind;

/// Deterministic float32 realized as one fenced hardware instruction per
/// operation.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct AsmF32(f32);

impl_f32_payload_kind!(AsmF32, "AsmF32", deterministic: true, supported: true);

#[cfg(target_arch = "x86_64")]
macro_rules! scalar_op {
    ($instr:literal, $a:expr, $b:expr) => {{
        let mut out = $a;
        // SAFETY: a register-only scalar SSE instruction; no memory, no flags
        // the caller observes, no stack use.
        unsafe {
            core::arch::asm!(
                concat!($instr, " {a}, {b}"),
                a = inout(xmm_reg) out,
                b = in(xmm_reg) $b,
                options(pure, nomem, nostack)
            );
        }
        out
    }};
}

#[cfg(target_arch = "x86_64")]
impl AsmF32 {
    #[inline]
    fn hw_add(a: f32, b: f32) -> f32 {
        scalar_op!("addss", a, b)
    }

    #[inline]
    fn hw_sub(a: f32, b: f32) -> f32 {
        scalar_op!("subss", a, b)
    }

    #[inline]
    fn hw_mul(a: f32, b: f32) -> f32 {
        scalar_op!("mulss", a, b)
    }

    #[inline]
    fn hw_div(a: f32, b: f32) -> f32 {
        scalar_op!("divss", a, b)
    }
}

#[cfg(target_arch = "aarch64")]
macro_rules! scalar_op {
    ($instr:literal, $a:expr, $b:expr) => {{
        let out: f32;
        // SAFETY: a register-only scalar float instruction.
        unsafe {
            core::arch::asm!(
                concat!($instr, " {out:s}, {a:s}, {b:s}"),
                out = out(vreg) out,
                a = in(vreg) $a,
                b = in(vreg) $b,
                options(pure, nomem, nostack)
            );
        }
        out
    }};
}

#[cfg(target_arch = "aarch64")]
impl AsmF32 {
    #[inline]
    fn hw_add(a: f32, b: f32) -> f32 {
        scalar_op!("fadd", a, b)
    }

    #[inline]
    fn hw_sub(a: f32, b: f32) -> f32 {
        scalar_op!("fsub", a, b)
    }

    #[inline]
    fn hw_mul(a: f32, b: f32) -> f32 {
        scalar_op!("fmul", a, b)
    }

    #[inline]
    fn hw_div(a: f32, b: f32) -> f32 {
        scalar_op!("fdiv", a, b)
    }
}

#[cfg(target_arch = "riscv64")]
macro_rules! scalar_op {
    ($instr:literal, $a:expr, $b:expr) => {{
        let out: f32;
        // SAFETY: a register-only scalar float instruction; rounding mode is
        // the static default (rne).
        unsafe {
            core::arch::asm!(
                concat!($instr, " {out}, {a}, {b}"),
                out = out(freg) out,
                a = in(freg) $a,
                b = in(freg) $b,
                options(pure, nomem, nostack)
            );
        }
        out
    }};
}

#[cfg(target_arch = "riscv64")]
impl AsmF32 {
    #[inline]
    fn hw_add(a: f32, b: f32) -> f32 {
        scalar_op!("fadd.s", a, b)
    }

    #[inline]
    fn hw_sub(a: f32, b: f32) -> f32 {
        scalar_op!("fsub.s", a, b)
    }

    #[inline]
    fn hw_mul(a: f32, b: f32) -> f32 {
        scalar_op!("fmul.s", a, b)
    }

    #[inline]
    fn hw_div(a: f32, b: f32) -> f32 {
        scalar_op!("fdiv.s", a, b)
    }
}

impl Add for AsmF32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(Self::hw_add(self.0, rhs.0))
    }
}

impl Sub for AsmF32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(Self::hw_sub(self.0, rhs.0))
    }
}

impl Mul for AsmF32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Self::hw_mul(self.0, rhs.0))
    }
}

impl Div for AsmF32 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(Self::hw_div(self.0, rhs.0))
    }
}
