// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Inverse trigonometric functions, msun float versions.
//!
//! These run entirely in the scalar's own arithmetic: the coefficient sets
//! are the single-precision msun ones, stored as binary32 bit patterns.
//! `asin`/`acos` use the degree-3/1 rational kernel on [−½, ½] and the
//! half-angle identity outside; `atan` splits at 7/16, 11/16, 19/16 and
//! 39/16 with per-region hi/lo constants; `atan2` dispatches on the sign
//! bits alone before handing the magnitude to `atan`.

use crate::mathf::host_libm;
use crate::mathf::sqrt::sqrt_impl;
use crate::traits::{FloatScalar, FpTraits};

// atan(0.5), atan(1.0), atan(1.5), atan(inf) — high and low parts.
const ATAN_HI: [u32; 4] = [0x3eed6338, 0x3f490fda, 0x3f7b985e, 0x3fc90fda];
const ATAN_LO: [u32; 4] = [0x31ac3769, 0x33222168, 0x33140fb4, 0x33a22168];
const AT: [u32; 5] = [0x3eaaaaa9, 0xbe4cca98, 0x3e11f50d, 0xbdda1247, 0x3d7cac25];

// asin/acos shared rational kernel.
const P_S0: u32 = 0x3e2aaa75;
const P_S1: u32 = 0xbd2f13ba;
const P_S2: u32 = 0xbc0dd36b;
const Q_S1: u32 = 0xbf34e5ae;

const PIO2_BITS: u32 = 0x3fc90fdb;
const PIO2_HI: u32 = 0x3fc90fda;
const PIO2_LO: u32 = 0x33a22168;
const PI_BITS: u32 = 0x40490fdb;
const PI_LO_BITS: u32 = 0xb3bbbd2e;
/// 2^−120: keeps the "inexact" shape of the msun code, numerically inert.
const TINY: u32 = 0x03800000;

fn kernel_r<F: FloatScalar>(z: F) -> F {
    let p = z * (F::from_bits(P_S0) + z * (F::from_bits(P_S1) + z * F::from_bits(P_S2)));
    let q = F::from_f32(1.0) + z * F::from_bits(Q_S1);
    p / q
}

/// Arc sine; |x| > 1 yields NaN.
pub fn asin<T: FpTraits>(x: T) -> T::Fallback {
    asin_impl(x.to_fallback())
}

fn asin_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::asinf(x.to_f32())));

    let hx = x.to_bits();
    let ix = hx & 0x7fff_ffff;
    if ix >= 0x3f80_0000 {
        if ix == 0x3f80_0000 {
            // asin(±1) = ±π/2.
            return x * F::from_bits(PIO2_BITS) + F::from_bits(TINY);
        }
        return F::from_f32(0.0) / (x - x);
    }
    if ix < 0x3f00_0000 {
        // |x| < 0.5
        if ix < 0x3980_0000 && ix >= 0x0080_0000 {
            return x;
        }
        return x + x * kernel_r(x * x);
    }
    // 0.5 <= |x| < 1
    let z = (F::from_f32(1.0) - abs_bits(x)) * F::from_f32(0.5);
    let s = sqrt_impl(z);
    let r = F::from_bits(PIO2_BITS) - F::from_f32(2.0) * (s + s * kernel_r(z));
    if hx >> 31 != 0 {
        -r
    } else {
        r
    }
}

/// Arc cosine; |x| > 1 yields NaN.
pub fn acos<T: FpTraits>(x: T) -> T::Fallback {
    acos_impl(x.to_fallback())
}

fn acos_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::acosf(x.to_f32())));

    let hx = x.to_bits();
    let ix = hx & 0x7fff_ffff;
    if ix >= 0x3f80_0000 {
        if ix == 0x3f80_0000 {
            if hx >> 31 != 0 {
                // acos(-1) = π.
                return F::from_f32(2.0) * F::from_bits(PIO2_HI) + F::from_bits(TINY);
            }
            return F::from_f32(0.0);
        }
        return F::from_f32(0.0) / (x - x);
    }
    if ix < 0x3f00_0000 {
        if ix <= 0x3280_0000 {
            // |x| < 2^-26: acos(x) = π/2.
            return F::from_bits(PIO2_HI) + F::from_bits(TINY);
        }
        return F::from_bits(PIO2_HI) - (x - (F::from_bits(PIO2_LO) - x * kernel_r(x * x)));
    }
    if hx >> 31 != 0 {
        // x < -0.5
        let z = (F::from_f32(1.0) + x) * F::from_f32(0.5);
        let s = sqrt_impl(z);
        let w = kernel_r(z) * s - F::from_bits(PIO2_LO);
        return F::from_f32(2.0) * (F::from_bits(PIO2_HI) - (s + w));
    }
    // x > 0.5
    let z = (F::from_f32(1.0) - x) * F::from_f32(0.5);
    let s = sqrt_impl(z);
    let df = F::from_bits(s.to_bits() & 0xffff_f000);
    let c = (z - df * df) / (s + df);
    let w = kernel_r(z) * s + c;
    F::from_f32(2.0) * (df + w)
}

/// Arc tangent.
pub fn atan<T: FpTraits>(x: T) -> T::Fallback {
    atan_impl(x.to_fallback())
}

#[allow(clippy::many_single_char_names)]
fn atan_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::atanf(x.to_f32())));

    let bits = x.to_bits();
    let sign = bits >> 31 != 0;
    let ix = bits & 0x7fff_ffff;

    if ix >= 0x4c80_0000 {
        // |x| >= 2^26: atan saturates at ±π/2.
        if x.is_nan() {
            return x;
        }
        let z = F::from_bits(ATAN_HI[3]) + F::from_bits(TINY);
        return if sign { -z } else { z };
    }

    let (id, x) = if ix < 0x3ee0_0000 {
        // |x| < 0.4375
        if ix < 0x3980_0000 {
            return x;
        }
        (None, x)
    } else {
        let x = abs_bits(x);
        if ix < 0x3f98_0000 {
            if ix < 0x3f30_0000 {
                // 7/16 <= |x| < 11/16
                (Some(0), (F::from_f32(2.0) * x - F::from_f32(1.0)) / (F::from_f32(2.0) + x))
            } else {
                // 11/16 <= |x| < 19/16
                (Some(1), (x - F::from_f32(1.0)) / (x + F::from_f32(1.0)))
            }
        } else if ix < 0x401c_0000 {
            // 19/16 <= |x| < 39/16
            (Some(2), (x - F::from_f32(1.5)) / (F::from_f32(1.0) + F::from_f32(1.5) * x))
        } else {
            // 39/16 <= |x| < 2^26
            (Some(3), F::from_f32(-1.0) / x)
        }
    };

    // Odd polynomial split into even/odd halves for parallel evaluation.
    let z = x * x;
    let w = z * z;
    let s1 = z * (F::from_bits(AT[0]) + w * (F::from_bits(AT[2]) + w * F::from_bits(AT[4])));
    let s2 = w * (F::from_bits(AT[1]) + w * F::from_bits(AT[3]));
    match id {
        None => x - x * (s1 + s2),
        Some(id) => {
            let z = F::from_bits(ATAN_HI[id])
                - ((x * (s1 + s2) - F::from_bits(ATAN_LO[id])) - x);
            if sign {
                -z
            } else {
                z
            }
        }
    }
}

/// Quadrant-correct arc tangent of `y/x`.
pub fn atan2<T: FpTraits>(y: T, x: T) -> T::Fallback {
    atan2_impl(y.to_fallback(), x.to_fallback())
}

fn atan2_impl<F: FloatScalar>(y: F, x: F) -> F {
    host_libm!(F, F::from_f32(libm::atan2f(y.to_f32(), x.to_f32())));

    if x.is_nan() || y.is_nan() {
        return x + y;
    }
    let ix = x.to_bits();
    let iy = y.to_bits();
    if ix == 0x3f80_0000 {
        // x = 1.0
        return atan_impl(y);
    }

    // 2*sign(x) + sign(y) selects the quadrant.
    let m = (iy >> 31 & 1) | (ix >> 30 & 2);
    let ix = ix & 0x7fff_ffff;
    let iy = iy & 0x7fff_ffff;

    let pi = F::from_bits(PI_BITS);
    let pi_lo = F::from_bits(PI_LO_BITS);

    if iy == 0 {
        return match m {
            0 | 1 => y,
            2 => pi,
            _ => -pi,
        };
    }
    if ix == 0 {
        let half_pi = pi / F::from_f32(2.0);
        return if m & 1 != 0 { -half_pi } else { half_pi };
    }
    if ix == 0x7f80_0000 {
        if iy == 0x7f80_0000 {
            let quarter_pi = pi / F::from_f32(4.0);
            return match m {
                0 => quarter_pi,
                1 => -quarter_pi,
                2 => F::from_f32(3.0) * quarter_pi,
                _ => F::from_f32(-3.0) * quarter_pi,
            };
        }
        return match m {
            0 => F::from_f32(0.0),
            1 => F::from_f32(-0.0),
            2 => pi,
            _ => -pi,
        };
    }

    // |y/x| beyond 2^26 collapses to ±π/2.
    if ix.wrapping_add(26 << 23) < iy || iy == 0x7f80_0000 {
        let half_pi = pi / F::from_f32(2.0);
        return if m & 1 != 0 { -half_pi } else { half_pi };
    }

    let z = if m & 2 != 0 && iy.wrapping_add(26 << 23) < ix {
        // |y/x| < 2^-26 with x < 0.
        F::from_f32(0.0)
    } else {
        atan_impl(abs_bits(y / x))
    };
    match m {
        0 => z,
        1 => -z,
        2 => pi - (z - pi_lo),
        _ => (z - pi_lo) - pi,
    }
}

#[inline]
fn abs_bits<F: FloatScalar>(x: F) -> F {
    F::from_bits(x.to_bits() & 0x7fff_ffff)
}
