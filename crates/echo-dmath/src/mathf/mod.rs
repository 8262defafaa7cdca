// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Elementary functions over deterministic scalars.
//!
//! Every function is generic over a scalar implementing
//! [`FpTraits`](crate::traits::FpTraits) and returns the scalar's fallback
//! float type (identity for float kinds; fixed point is widened first, as its
//! grid cannot hold transcendental results).
//!
//! Two determinism regimes, both bit-stable across conformant targets:
//!
//! - `sqrt`, `floor`, `round`, `fmod`, `max`, `abs`, `asin`, `acos`, `atan`,
//!   `atan2`, `log10` run in the scalar's own arithmetic plus payload bit
//!   manipulation, so they hold even for the software emulator's "no host
//!   float instructions" guarantee;
//! - `sin`, `cos`, `tan`, `exp`, `log` follow their msun/ARM originals and
//!   use `f64` intermediates with bit-exact coefficients. Rust guarantees
//!   strict IEEE semantics for each `f64` operation (no contraction, no
//!   reassociation), so these too produce identical bits everywhere.
//!
//! With the `host-libm` feature, kinds that already report
//! `IS_DETERMINISTIC == false` delegate to the pure-Rust `libm` crate
//! instead; deterministic kinds are unaffected.
//!
//! Algorithms follow FreeBSD msun and the ARM optimized routines; every
//! coefficient and table entry is spelled as an integer bit pattern so all
//! targets read identical values.

mod exp;
mod inv_trig;
mod log;
mod rem_pio2;
mod sqrt;
mod trig;

pub use exp::exp;
pub use inv_trig::{acos, asin, atan, atan2};
pub use log::{log, log10};
pub use sqrt::sqrt;
pub use trig::{cos, sin, tan};

use crate::traits::{FloatScalar, FpTraits};

/// Early-return into the `libm` crate under the `host-libm` feature; a no-op
/// for deterministic kinds and for default builds.
macro_rules! host_libm {
    ($f:ty, $call:expr) => {{
        #[cfg(feature = "host-libm")]
        {
            if !<$f>::IS_DETERMINISTIC {
                return $call;
            }
        }
    }};
}

pub(crate) use host_libm;

/// Magnitude of `x`: clears the sign bit, NaN payloads untouched.
pub fn abs<T: FpTraits>(x: T) -> T::Fallback {
    let x = x.to_fallback();
    T::Fallback::from_bits(x.to_bits() & 0x7fff_ffff)
}

/// Largest integer value not above `x`.
pub fn floor<T: FpTraits>(x: T) -> T::Fallback {
    floor_impl(x.to_fallback())
}

fn floor_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::floorf(x.to_f32())));
    let e = x.exponent();
    if e >= 23 {
        // Already integral; NaN and infinity land here too.
        return x;
    }
    let bits = x.to_bits();
    if e >= 0 {
        let mask = F::SIGNIFICAND_MASK >> e;
        if bits & mask == 0 {
            return x;
        }
        let mut bits = bits;
        if x.sign() {
            bits += mask;
        }
        bits &= !mask;
        F::from_bits(bits)
    } else if !x.sign() {
        F::from_bits(0)
    } else if !x.is_zero() {
        F::from_f32(-1.0)
    } else {
        x
    }
}

/// Nearest integer value, halves away from zero.
pub fn round<T: FpTraits>(x: T) -> T::Fallback {
    round_impl(x.to_fallback())
}

fn round_impl<F: FloatScalar>(x: F) -> F {
    host_libm!(F, F::from_f32(libm::roundf(x.to_f32())));
    let e = x.exponent();
    if e >= 23 {
        return x;
    }
    let negative = x.sign();
    let val = if negative { -x } else { x };
    if e < -1 {
        // Rounds to zero; multiply keeps the sign of the input.
        return F::from_f32(0.0) * x;
    }
    // Add-then-subtract against 1/ε forces the fraction out of the
    // significand; the correction below turns ties into away-from-zero.
    let toint = F::from_bits(0x4b00_0000);
    let mut y = val + toint - toint - val;
    if y > F::from_f32(0.5) {
        y = y + val - F::from_f32(1.0);
    } else if y <= F::from_f32(-0.5) {
        y = y + val + F::from_f32(1.0);
    } else {
        y = y + val;
    }
    if negative {
        -y
    } else {
        y
    }
}

/// Remainder of `x/y` with the sign of `x`, computed exactly.
pub fn fmod<T: FpTraits>(x: T, y: T) -> T::Fallback {
    fmod_impl(x.to_fallback(), y.to_fallback())
}

#[allow(clippy::many_single_char_names)]
fn fmod_impl<F: FloatScalar>(x: F, y: F) -> F {
    host_libm!(F, F::from_f32(libm::fmodf(x.to_f32(), y.to_f32())));
    let mut ex = x.exponent() + 0x7f;
    let mut ey = y.exponent() + 0x7f;
    let sx = x.sign();
    let mut ux = x.to_bits();
    let mut uy = y.to_bits();

    if y.is_zero() || y.is_nan() || x.is_inf() {
        return (x * y) / (x * y);
    }
    if ux << 1 <= uy << 1 {
        if ux << 1 == uy << 1 {
            return F::from_f32(0.0) * x;
        }
        return x;
    }

    // Normalize both significands to a common 24-bit form.
    if ex == 0 {
        let mut i = ux << 9;
        while i >> 31 == 0 {
            ex -= 1;
            i <<= 1;
        }
        ux <<= 1 - ex;
    } else {
        ux &= u32::MAX >> 9;
        ux |= 1 << 23;
    }
    if ey == 0 {
        let mut i = uy << 9;
        while i >> 31 == 0 {
            ey -= 1;
            i <<= 1;
        }
        uy <<= 1 - ey;
    } else {
        uy &= u32::MAX >> 9;
        uy |= 1 << 23;
    }

    // Aligned long division on significand bits.
    while ex > ey {
        let i = ux.wrapping_sub(uy);
        if i >> 31 == 0 {
            if i == 0 {
                return F::from_f32(0.0) * x;
            }
            ux = i;
        }
        ux <<= 1;
        ex -= 1;
    }
    let i = ux.wrapping_sub(uy);
    if i >> 31 == 0 {
        if i == 0 {
            return F::from_f32(0.0) * x;
        }
        ux = i;
    }
    while ux >> 23 == 0 {
        ux <<= 1;
        ex -= 1;
    }

    // Repack, degrading to a subnormal when the exponent ran out.
    if ex > 0 {
        ux -= 1 << 23;
        #[allow(clippy::cast_sign_loss)]
        {
            ux |= (ex as u32) << 23;
        }
    } else {
        ux >>= 1 - ex;
    }
    let r = F::from_bits(ux);
    if sx {
        -r
    } else {
        r
    }
}

/// NaN-avoiding maximum: a NaN operand yields the other operand.
pub fn max<T: FpTraits>(a: T, b: T) -> T::Fallback {
    let a = a.to_fallback();
    let b = b.to_fallback();
    if a.is_nan() {
        return b;
    }
    if b.is_nan() {
        return a;
    }
    if a.sign() != b.sign() {
        return if a.sign() { b } else { a };
    }
    if a < b {
        b
    } else {
        a
    }
}
