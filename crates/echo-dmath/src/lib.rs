// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-dmath: deterministic math core for the Echo engine family.
//!
//! Simulation code that must replay bit-identically across machines cannot use
//! the host's floating point freely: compilers reassociate, contract into FMA,
//! and libm implementations disagree at the last ulp. This crate provides a
//! family of interchangeable float32 scalar kinds whose arithmetic is
//! bit-stable across conformant targets, an elementary-function library written
//! against those kinds, a width-promoting fixed-point scalar, and a correctly
//! rounded decimal-to-double parser for ingesting numeric input.
//!
//! The scalar kinds share one capability contract ([`FpTraits`]) and differ
//! only in how an operation is realized:
//!
//! - [`SoftF32`](scalar::SoftF32) — software IEEE-754 emulator, the reference
//!   all other deterministic kinds are validated against;
//! - [`AsmF32`](scalar::AsmF32) — one fenced hardware instruction per operator
//!   (only on ISAs with a scalar float form);
//! - [`OpaqueF32`](scalar::OpaqueF32) — operators behind optimizer-opaque,
//!   non-inlinable calls;
//! - [`StrictF32`](scalar::StrictF32) — thin wrapper over the host float,
//!   one operation per statement;
//! - `f32` — the host float itself, non-deterministic, for A/B calibration.
#![deny(unsafe_code)] // `scalar::asm` opts back in locally for its asm! fences
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    // Payload-bit code converts between integer widths on every other line;
    // the intent is always the bit pattern, which these casts preserve.
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    // The msun kernels generate NaN as (x - x) / (x - x), and payload
    // equality IS the IEEE compare on these wrapper types.
    clippy::eq_op,
    clippy::float_cmp,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

pub mod approx;
pub mod bigint;
pub mod consts;
pub mod dim;
pub mod fixed;
pub mod mathf;
pub mod parse;
pub mod scalar;
pub mod serial;
pub mod traits;

mod bigreal;
mod softfloat;

pub use crate::fixed::{Fixed, Fx32, Rational};
pub use crate::parse::parse_decimal_f64;
pub use crate::scalar::{OpaqueF32, SoftF32, StrictF32};
pub use crate::traits::{FloatScalar, FpTraits};

#[cfg(dmath_asm_scalar)]
pub use crate::scalar::AsmF32;
