// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sine, cosine and tangent.
//!
//! msun `sinf`/`cosf`/`tanf` structure: small arguments hit the polynomial
//! kernels directly, medium arguments are shifted by split multiples of π/2,
//! large arguments go through the Payne–Hanek reduction in
//! [`super::rem_pio2`]. Kernels are the msun degree-7 (sin), degree-8 (cos)
//! and degree-13-rational (tan) minimax polynomials, evaluated in `f64` with
//! bit-exact coefficients (see the module notes in [`crate::mathf`]).

use crate::mathf::host_libm;
use crate::mathf::rem_pio2::rem_pio2f;
use crate::traits::{FloatScalar, FpTraits};

// |sin(x)/x - s(x)| < 2^-37.5 on [-pi/4, pi/4].
const S1: f64 = f64::from_bits(0xbfc5555554cbac77);
const S2: f64 = f64::from_bits(0x3f811110896efbb2);
const S3: f64 = f64::from_bits(0xbf2a00f9e2cae774);
const S4: f64 = f64::from_bits(0x3ec6cd878c3b46a7);

// |cos(x) - c(x)| < 2^-34.1 on [-pi/4, pi/4].
const C0: f64 = f64::from_bits(0xbfdffffffd0c5e81);
const C1: f64 = f64::from_bits(0x3fa55553e1053a42);
const C2: f64 = f64::from_bits(0xbf56c087e80f1e27);
const C3: f64 = f64::from_bits(0x3ef99342e0ee5069);

// |tan(x)/x - t(x)| < 2^-25.5 on [-pi/4, pi/4].
const T: [f64; 6] = [
    f64::from_bits(0x3fd5554d3418c99f),
    f64::from_bits(0x3fc112fd38999f72),
    f64::from_bits(0x3fab54c91d865afe),
    f64::from_bits(0x3f991df3908c33ce),
    f64::from_bits(0x3f685dadfcecf44e),
    f64::from_bits(0x3f8362b9bf971bcd),
];

/// Multiples of π/2 in double precision for the medium-range shifts.
const PIO2_1X: f64 = f64::from_bits(0x3ff921fb54442d18);
const PIO2_2X: f64 = f64::from_bits(0x400921fb54442d18);
const PIO2_3X: f64 = f64::from_bits(0x4012d97c7f3321d2);
const PIO2_4X: f64 = f64::from_bits(0x401921fb54442d18);

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn k_sindf(x: f64) -> f32 {
    let z = x * x;
    let w = z * z;
    let r = S3 + z * S4;
    let s = z * x;
    ((x + s * (S1 + z * S2)) + s * w * r) as f32
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn k_cosdf(x: f64) -> f32 {
    let z = x * x;
    let w = z * z;
    let r = C2 + z * C3;
    (((1.0 + z * C0) + w * C1) + (w * z) * r) as f32
}

#[allow(clippy::cast_possible_truncation)]
fn k_tandf(x: f64, odd: bool) -> f32 {
    let z = x * x;
    let r = T[4] + z * T[5];
    let t = T[2] + z * T[3];
    let w = z * z;
    let s = z * x;
    let u = T[0] + z * T[1];
    let r = (x + s * u) + (s * w) * (t + w * r);
    (if odd { -1.0 / r } else { r }) as f32
}

/// Sine of `x` radians.
pub fn sin<T: FpTraits>(x: T) -> T::Fallback {
    sin_impl(x.to_fallback())
}

fn sin_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::sinf(x.to_f32())));

    let bits = x.to_bits();
    let sign = bits >> 31 != 0;
    let ix = bits & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        // |x| ~<= pi/4
        if ix < 0x3980_0000 {
            // |x| < 2^-12: sin(x) = x to float precision.
            return x;
        }
        return F::from_f32(k_sindf(f64::from(x.to_f32())));
    }
    let xd = f64::from(x.to_f32());
    if ix <= 0x407b_53d1 {
        // |x| ~<= 5pi/4
        if ix <= 0x4016_cbe3 {
            // |x| ~<= 3pi/4
            return if sign {
                F::from_f32(-k_cosdf(xd + PIO2_1X))
            } else {
                F::from_f32(k_cosdf(xd - PIO2_1X))
            };
        }
        return F::from_f32(k_sindf(if sign { -(xd + PIO2_2X) } else { -(xd - PIO2_2X) }));
    }
    if ix <= 0x40e2_31d5 {
        // |x| ~<= 9pi/4
        if ix <= 0x40af_eddf {
            // |x| ~<= 7pi/4
            return if sign {
                F::from_f32(k_cosdf(xd + PIO2_3X))
            } else {
                F::from_f32(-k_cosdf(xd - PIO2_3X))
            };
        }
        return F::from_f32(k_sindf(if sign { xd + PIO2_4X } else { xd - PIO2_4X }));
    }

    // sin(inf or nan) is nan.
    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = rem_pio2f(bits);
    match n & 3 {
        0 => F::from_f32(k_sindf(y)),
        1 => F::from_f32(k_cosdf(y)),
        2 => F::from_f32(k_sindf(-y)),
        _ => F::from_f32(-k_cosdf(y)),
    }
}

/// Cosine of `x` radians.
pub fn cos<T: FpTraits>(x: T) -> T::Fallback {
    cos_impl(x.to_fallback())
}

fn cos_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::cosf(x.to_f32())));

    let bits = x.to_bits();
    let sign = bits >> 31 != 0;
    let ix = bits & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        if ix < 0x3980_0000 {
            return F::from_f32(1.0);
        }
        return F::from_f32(k_cosdf(f64::from(x.to_f32())));
    }
    let xd = f64::from(x.to_f32());
    if ix <= 0x407b_53d1 {
        if ix > 0x4016_cbe3 {
            return F::from_f32(-k_cosdf(if sign { xd + PIO2_2X } else { xd - PIO2_2X }));
        }
        return if sign {
            F::from_f32(k_sindf(xd + PIO2_1X))
        } else {
            F::from_f32(k_sindf(PIO2_1X - xd))
        };
    }
    if ix <= 0x40e2_31d5 {
        if ix > 0x40af_eddf {
            return F::from_f32(k_cosdf(if sign { xd + PIO2_4X } else { xd - PIO2_4X }));
        }
        return if sign {
            F::from_f32(k_sindf(-xd - PIO2_3X))
        } else {
            F::from_f32(k_sindf(xd - PIO2_3X))
        };
    }

    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = rem_pio2f(bits);
    match n & 3 {
        0 => F::from_f32(k_cosdf(y)),
        1 => F::from_f32(k_sindf(-y)),
        2 => F::from_f32(-k_cosdf(y)),
        _ => F::from_f32(k_sindf(y)),
    }
}

/// Tangent of `x` radians.
pub fn tan<T: FpTraits>(x: T) -> T::Fallback {
    tan_impl(x.to_fallback())
}

fn tan_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::tanf(x.to_f32())));

    let bits = x.to_bits();
    let sign = bits >> 31 != 0;
    let ix = bits & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        if ix < 0x3980_0000 {
            return x;
        }
        return F::from_f32(k_tandf(f64::from(x.to_f32()), false));
    }
    let xd = f64::from(x.to_f32());
    if ix <= 0x407b_53d1 {
        if ix <= 0x4016_cbe3 {
            return F::from_f32(k_tandf(if sign { xd + PIO2_1X } else { xd - PIO2_1X }, true));
        }
        return F::from_f32(k_tandf(if sign { xd + PIO2_2X } else { xd - PIO2_2X }, false));
    }
    if ix <= 0x40e2_31d5 {
        if ix <= 0x40af_eddf {
            return F::from_f32(k_tandf(if sign { xd + PIO2_3X } else { xd - PIO2_3X }, true));
        }
        return F::from_f32(k_tandf(if sign { xd + PIO2_4X } else { xd - PIO2_4X }, false));
    }

    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = rem_pio2f(bits);
    F::from_f32(k_tandf(y, n & 1 != 0))
}
