// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument reduction modulo π/2 for binary32 inputs.
//!
//! Medium magnitudes (below 2^28·π/2) use the split-constant path with a
//! 53-bit π/2; larger magnitudes use a Payne–Hanek reduction in plain
//! integer arithmetic over a stored bit expansion of 2/π, so the result is
//! bit-exact by construction on every target. Returns the quadrant count
//! `n` and the remainder `y ∈ [−π/4, π/4]` with |x| = k·π/2 + y.

/// Fraction bits of 2/π, most significant first, 64 bits per limb.
///
/// Eight limbs (512 bits) comfortably cover the largest finite f32: the
/// reduction window never reads past bit ~280.
const TWO_OVER_PI: [u64; 8] = [
    0xa2f9836e4e441529,
    0xfc2757d1f534ddc0,
    0xdb6295993c439041,
    0xfe5163abdebbc561,
    0xb7246e3a424dd2e0,
    0x06492eea09d1921c,
    0xfe1deb1cb129a73e,
    0xe88235f52ebb4484,
];

/// 53 bits of 2/π.
const INV_PIO2: f64 = f64::from_bits(0x3fe45f306dc9c883);
/// First 33 bits of π/2.
const PIO2_1: f64 = f64::from_bits(0x3ff921fb50000000);
/// π/2 − PIO2_1 to full precision.
const PIO2_1T: f64 = f64::from_bits(0x3e5110b4611a6263);
/// π/2 in double precision (for scaling the Payne–Hanek fraction).
const PIO2: f64 = f64::from_bits(0x3ff921fb54442d18);
/// `0x1.8p52`: the round-to-int shifter.
const TOINT: f64 = f64::from_bits(0x4338000000000000);

/// Reduces the float behind `bits`; returns `(n, y)`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn rem_pio2f(bits: u32) -> (i32, f64) {
    let sign = bits >> 31 != 0;
    let ix = bits & 0x7fff_ffff;

    if ix < 0x4dc9_0fdb {
        // |x| ~< 2^28·(π/2): 25+53-bit π/2 is enough.
        let x = f64::from(f32::from_bits(bits));
        let f_n = x * INV_PIO2 + TOINT - TOINT;
        let n = f_n as i64 as i32;
        let y = x - f_n * PIO2_1 - f_n * PIO2_1T;
        return (n, y);
    }
    if ix >= 0x7f80_0000 {
        // inf/nan: the callers have already filtered this; keep it total.
        let x = f64::from(f32::from_bits(bits));
        return (0, x - x);
    }

    let (n, y) = payne_hanek(ix);
    if sign {
        (-n, -y)
    } else {
        (n, y)
    }
}

/// Integer Payne–Hanek for a positive finite f32 with |x| ≥ 2^28.
///
/// With x = m·2^e (m the 24-bit significand), x·(2/π) is assembled from the
/// stored bit expansion: the three bits of its integer part adjacent to the
/// binary point give the quadrant, the next 128 fraction bits give the
/// remainder to far more precision than the kernels need.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn payne_hanek(ix: u32) -> (i32, f64) {
    let m = u64::from((ix & 0x007f_ffff) | 0x0080_0000);
    let e = ((ix >> 23) as i32) - 0x7f - 23; // x = m · 2^e, e > 0 here

    // Window of 2/π starting at fraction bit e+1: three 64-bit limbs.
    let idx = (e >> 6) as usize;
    let shift = (e & 63) as u32;
    let fetch = |i: usize| TWO_OVER_PI.get(i).copied().unwrap_or(0);
    let window = |i: usize| {
        if shift == 0 {
            fetch(i)
        } else {
            fetch(i) << shift | fetch(i + 1) >> (64 - shift)
        }
    };
    let w0 = window(idx);
    let w1 = window(idx + 1);
    let w2 = window(idx + 2);

    // Low three bits of the integer part of (2/π)·2^e: the bits of 2/π just
    // above the window.
    let int3 = if e >= 3 {
        let eu = (e - 3) as usize;
        let i = eu >> 6;
        let sh = (eu & 63) as u32;
        if sh <= 61 {
            (fetch(i) >> (61 - sh)) & 7
        } else {
            (fetch(i) << (sh - 61) | fetch(i + 1) >> (125 - sh)) & 7
        }
    } else {
        // e in 5.. for every caller; keep the expression total anyway.
        (TWO_OVER_PI[0] >> (61 - e as u32)) & 7
    };

    // m × (w0:w1:w2): integer part (24 bits max) and 128 fraction bits.
    let p2 = u128::from(m) * u128::from(w2);
    let p1 = u128::from(m) * u128::from(w1) + (p2 >> 64);
    let p0 = u128::from(m) * u128::from(w0) + (p1 >> 64);
    let int_part = (p0 >> 64) as u64;
    let frac = (p0 << 64) | (p1 & u128::from(u64::MAX));
    let mut n = (m.wrapping_mul(int3).wrapping_add(int_part) & 7) as i32;

    // Round to the nearest multiple of π/2: fraction ≥ 1/2 borrows one.
    let (fneg, fmag) = if frac >> 127 != 0 {
        n = (n + 1) & 7;
        (true, frac.wrapping_neg())
    } else {
        (false, frac)
    };

    // Scale the top of the fraction back to radians.
    let f = (fmag >> 64) as u64;
    let mut y = (f as f64) * (1.0 / 18_446_744_073_709_551_616.0) * PIO2;
    if fneg {
        y = -y;
    }
    (n, y)
}
