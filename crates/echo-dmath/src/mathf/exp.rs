// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-precision exponential, ARM-optimized-routines style.
//!
//! `x = k·ln2/32 + r`; `2^(k/32)` comes from a 32-entry table of double bit
//! patterns (the `k` contribution is a plain integer add into the exponent
//! field), and `2^(r/32)` from a cubic polynomial. Intermediates are `f64`
//! with bit-exact coefficients; see the module notes in
//! [`crate::mathf`] on why this stays deterministic.

use crate::mathf::host_libm;
use crate::traits::{FloatScalar, FpTraits};

const TABLE_BITS: u32 = 5;
const N: u64 = 1 << TABLE_BITS;

/// `tab[i] = bits(2^(i/N)) − (i << 52−TABLE_BITS)`, so adding `k` shifted
/// into the exponent field yields `2^(k/N)` for any `|k| < 150·N`.
const TAB: [u64; N as usize] = [
    0x3ff0000000000000, 0x3fefd9b0d3158574, 0x3fefb5586cf9890f, 0x3fef9301d0125b51,
    0x3fef72b83c7d517b, 0x3fef54873168b9aa, 0x3fef387a6e756238, 0x3fef1e9df51fdee1,
    0x3fef06fe0a31b715, 0x3feef1a7373aa9cb, 0x3feedea64c123422, 0x3feece086061892d,
    0x3feebfdad5362a27, 0x3feeb42b569d4f82, 0x3feeab07dd485429, 0x3feea47eb03a5585,
    0x3feea09e667f3bcd, 0x3fee9f75e8ec5f74, 0x3feea11473eb0187, 0x3feea589994cce13,
    0x3feeace5422aa0db, 0x3feeb737b0cdc5e5, 0x3feec49182a3f090, 0x3feed503b23e255d,
    0x3feee89f995ad3ad, 0x3feeff76f2fb5e47, 0x3fef199bdd85529c, 0x3fef3720dcef9069,
    0x3fef5818dcfba487, 0x3fef7c97337b9b5f, 0x3fefa4afa2a490da, 0x3fefd0765b6e4540,
];

/// `0x1.8p52`: the round-to-int shifter.
const SHIFT: f64 = f64::from_bits(0x4338000000000000);
/// `N/ln2`.
const INV_LN2_SCALED: f64 = f64::from_bits(0x40471547652b82fe);
/// Cubic in `r`, pre-scaled by `N` powers (exact exponent shifts of the
/// base coefficients, so still bit-exact).
const POLY: [f64; 3] = [
    f64::from_bits(0x3ebc6af84b912394), // base / N^3
    f64::from_bits(0x3f2ebfce50fac4f3), // base / N^2
    f64::from_bits(0x3f962e42ff0c52d6), // base / N
];

/// `e^x`; overflow clamps to +∞, underflow to +0.
pub fn exp<T: FpTraits>(x: T) -> T::Fallback {
    exp_impl(x.to_fallback())
}

fn exp_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::expf(x.to_f32())));

    let xd = f64::from(x.to_f32());
    let abstop = (x.to_bits() >> 20) & 0x7ff;
    if abstop >= 0x42b {
        // |x| >= 88, or nan.
        if x.to_bits() == 0xff80_0000 {
            return F::from_f32(0.0);
        }
        if abstop >= 0x7f8 {
            return x + x;
        }
        if x > F::from_bits(0x42b1_7217) {
            // x > log(0x1p128) ~= 88.72
            return F::from_bits(0x7f80_0000);
        }
        if x < F::from_bits(0xc2cf_f1b4) {
            // x < log(0x1p-150) ~= -103.97
            return F::from_bits(0);
        }
    }

    // x*N/ln2 = k + r with r in [-1/2, 1/2].
    let z = INV_LN2_SCALED * xd;
    let kd = z + SHIFT;
    let ki = kd.to_bits();
    let kd = kd - SHIFT;
    let r = z - kd;

    // exp(x) = 2^(k/N) * 2^(r/N) ~= s * (C0*r^3 + C1*r^2 + C2*r + 1).
    let t = TAB[(ki % N) as usize].wrapping_add(ki << (52 - TABLE_BITS));
    let s = f64::from_bits(t);
    let p = POLY[0] * r + POLY[1];
    let r2 = r * r;
    let mut y = POLY[2] * r + 1.0;
    y = p * r2 + y;
    y *= s;
    #[allow(clippy::cast_possible_truncation)]
    F::from_f32(y as f32)
}
