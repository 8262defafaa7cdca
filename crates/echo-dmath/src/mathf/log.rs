// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Natural and decimal logarithms.
//!
//! `log` is the ARM-optimized-routines logf: split `x = 2^k · z` into 16
//! subintervals with a per-interval `(1/c, log c)` table and a cubic in
//! `z/c − 1`, evaluated in `f64` with bit-exact constants.
//!
//! `log10` is the msun `log10f`: `s = f/(2+f)` rational reduction with hi/lo
//! split constants, evaluated entirely in the scalar's own arithmetic.

use crate::mathf::host_libm;
use crate::traits::{FloatScalar, FpTraits};

const TABLE_BITS: u32 = 4;

/// Per-interval `(1/c, log c)` pairs.
const TAB: [(u64, u64); 1 << TABLE_BITS] = [
    (0x3ff661ec79f8f3be, 0xbfd57bf7808caade),
    (0x3ff571ed4aaf883d, 0xbfd2bef0a7c06ddb),
    (0x3ff49539f0f010b0, 0xbfd01eae7f513a67),
    (0x3ff3c995b0b80385, 0xbfcb31d8a68224e9),
    (0x3ff30d190c8864a5, 0xbfc6574f0ac07758),
    (0x3ff25e227b0b8ea0, 0xbfc1aa2bc79c8100),
    (0x3ff1bb4a4a1a343f, 0xbfba4e76ce8c0e5e),
    (0x3ff12358f08ae5ba, 0xbfb1973c5a611ccc),
    (0x3ff0953f419900a7, 0xbfa252f438e10c1e),
    (0x3ff0000000000000, 0x0000000000000000),
    (0x3fee608cfd9a47ac, 0x3faaa5aa5df25984),
    (0x3feca4b31f026aa0, 0x3fbc5e53aa362eb4),
    (0x3feb2036576afce6, 0x3fc526e57720db08),
    (0x3fe9c2d163a1aa2d, 0x3fcbc2860d224770),
    (0x3fe886e6037841ed, 0x3fd1058bc8a07ee1),
    (0x3fe767dcf5534862, 0x3fd4043057b6ee09),
];

const LN2: f64 = f64::from_bits(0x3fe62e42fefa39ef);
const POLY: [f64; 3] = [
    f64::from_bits(0xbfd00ea348b88334),
    f64::from_bits(0x3fd5575b0be00b6a),
    f64::from_bits(0xbfdffffef20a4123),
];

/// Natural logarithm; `log(±0) = −∞`, negative arguments yield NaN.
pub fn log<T: FpTraits>(x: T) -> T::Fallback {
    log_impl(x.to_fallback())
}

fn log_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::logf(x.to_f32())));

    let mut ix = x.to_bits();
    // Fix sign of zero with downward rounding when x == 1.
    if ix == 0x3f80_0000 {
        return F::from_f32(0.0);
    }
    if ix.wrapping_sub(0x0080_0000) >= 0x7f80_0000 - 0x0080_0000 {
        if ix << 1 == 0 {
            return F::from_bits(0xff80_0000);
        }
        if ix == 0x7f80_0000 {
            return x;
        }
        if ix >> 31 != 0 || ix << 1 >= 0xff00_0000 {
            return (x - x) / (x - x);
        }
        // Subnormal: scale up by an exact power of two.
        ix = (x * F::from_bits(0x4b00_0000)).to_bits();
        ix = ix.wrapping_sub(23 << 23);
    }

    // x = 2^k z, z in [sqrt(2)/2, sqrt(2)) after the offset trick; the ith
    // subinterval's center c comes from the table.
    let tmp = ix.wrapping_sub(0x3f33_0000);
    let i = ((tmp >> (23 - TABLE_BITS)) % (1 << TABLE_BITS)) as usize;
    #[allow(clippy::cast_possible_wrap)]
    let k = (tmp as i32) >> 23;
    let iz = ix.wrapping_sub(tmp & 0xff80_0000);
    let (invc, logc) = TAB[i];
    let invc = f64::from_bits(invc);
    let logc = f64::from_bits(logc);
    let z = f64::from(f32::from_bits(iz));

    // log(x) = log1p(r) + log(c) + k*ln2.
    let r = z * invc - 1.0;
    let y0 = logc + f64::from(k) * LN2;

    let r2 = r * r;
    let mut y = POLY[1] * r + POLY[2];
    y = POLY[0] * r2 + y;
    y = y * r2 + (y0 + r);
    #[allow(clippy::cast_possible_truncation)]
    F::from_f32(y as f32)
}

const IVLN10_HI: u32 = 0x3ede6000;
const IVLN10_LO: u32 = 0xb804ead9;
const LOG10_2HI: u32 = 0x3e9a2080;
const LOG10_2LO: u32 = 0x355427db;
/// `|log((1+s)/(1−s))/s − poly(s)| < 2^−34.24` coefficient set.
const LG: [u32; 4] = [0x3f2aaaaa, 0x3eccce13, 0x3e91e9ee, 0x3e789e26];

/// Decimal logarithm, in the scalar's own arithmetic.
pub fn log10<T: FpTraits>(x: T) -> T::Fallback {
    log10_impl(x.to_fallback())
}

#[allow(clippy::many_single_char_names)]
fn log10_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::log10f(x.to_f32())));

    let mut x = x;
    let mut ix = x.to_bits();
    let mut k = 0i32;
    if ix < 0x0080_0000 || ix >> 31 != 0 {
        if ix << 1 == 0 {
            // log(±0) = -inf
            return F::from_f32(-1.0) / (x * x);
        }
        if ix >> 31 != 0 {
            return F::from_bits(0x7fc0_0000);
        }
        // Subnormal: scale up.
        k -= 25;
        x = x * F::from_bits(0x4c00_0000);
        ix = x.to_bits();
    } else if ix >= 0x7f80_0000 {
        return x;
    } else if ix == 0x3f80_0000 {
        return F::from_f32(0.0);
    }

    // Reduce into [sqrt(2)/2, sqrt(2)].
    ix = ix.wrapping_add(0x3f80_0000 - 0x3f35_04f3);
    #[allow(clippy::cast_possible_wrap)]
    {
        k += ((ix >> 23) as i32) - 0x7f;
    }
    ix = (ix & 0x007f_ffff).wrapping_add(0x3f35_04f3);
    x = F::from_bits(ix);

    let f = x - F::from_f32(1.0);
    let s = f / (F::from_f32(2.0) + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (F::from_bits(LG[1]) + w * F::from_bits(LG[3]));
    let t2 = z * (F::from_bits(LG[0]) + w * F::from_bits(LG[2]));
    let r = t2 + t1;
    let hfsq = F::from_f32(0.5) * f * f;

    let hi = f - hfsq;
    let hi = F::from_bits(hi.to_bits() & 0xffff_f000);
    let lo = f - hi - hfsq + s * (hfsq + r);
    #[allow(clippy::cast_precision_loss)]
    let dk = F::from_f32(k as f32);
    dk * F::from_bits(LOG10_2LO)
        + (lo + hi) * F::from_bits(IVLN10_LO)
        + lo * F::from_bits(IVLN10_HI)
        + hi * F::from_bits(IVLN10_HI)
        + dk * F::from_bits(LOG10_2HI)
}
