// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use echo_dmath::serial::AliasRw;
use echo_dmath::{FloatScalar, FpTraits, OpaqueF32, SoftF32, StrictF32};

/// Deterministic input stream so every run and platform sees the same bits.
fn xorshift_bits(count: usize) -> Vec<u32> {
    let mut state = 0x1234_5678u32;
    let mut out = Vec::with_capacity(count + 32);
    // Structured corners first.
    out.extend_from_slice(&[
        0x0000_0000, 0x8000_0000, // ±0
        0x3f80_0000, 0xbf80_0000, // ±1
        0x0000_0001, 0x8000_0001, // smallest subnormals
        0x007f_ffff, 0x807f_ffff, // largest subnormals
        0x0080_0000, 0x8080_0000, // smallest normals
        0x7f7f_ffff, 0xff7f_ffff, // largest finite
        0x7f80_0000, 0xff80_0000, // ±inf
        0x7fc0_0000, 0xffc0_0000, // canonical NaNs
        0x3effffff, 0x3f000000, 0x34000000, 0x4b7fffff, 0x4b800000,
    ]);
    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.push(state);
    }
    out
}

fn ops_bits<F: FloatScalar>(a_bits: u32, b_bits: u32) -> [u32; 5] {
    let a = F::from_bits(a_bits);
    let b = F::from_bits(b_bits);
    [
        (a + b).to_bits(),
        (a - b).to_bits(),
        (a * b).to_bits(),
        (a / b).to_bits(),
        (-a).to_bits(),
    ]
}

/// Every deterministic kind must agree with the software emulator bit for
/// bit, modulo NaN payloads (hardware may pick either quiet payload; we only
/// require "NaN here iff NaN there" in that case).
#[test]
fn deterministic_kinds_agree_with_soft_reference() {
    let inputs = xorshift_bits(4000);
    for pair in inputs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let soft = ops_bits::<SoftF32>(a, b);
        let strict = ops_bits::<StrictF32>(a, b);
        let opaque = ops_bits::<OpaqueF32>(a, b);
        #[cfg(dmath_asm_scalar)]
        let asm = ops_bits::<echo_dmath::AsmF32>(a, b);

        for (i, &s) in soft.iter().enumerate() {
            let nan = f32::from_bits(s).is_nan();
            let check = |other: u32, name: &str| {
                if nan {
                    assert!(
                        f32::from_bits(other).is_nan(),
                        "{name} op {i} not NaN for a={a:#010x} b={b:#010x}: {other:#010x}"
                    );
                } else {
                    assert_eq!(
                        other, s,
                        "{name} op {i} mismatch for a={a:#010x} b={b:#010x}"
                    );
                }
            };
            check(strict[i], "StrictF32");
            check(opaque[i], "OpaqueF32");
            #[cfg(dmath_asm_scalar)]
            check(asm[i], "AsmF32");
        }
    }
}

#[test]
fn capability_flags_are_published() {
    assert!(SoftF32::IS_DETERMINISTIC);
    assert!(StrictF32::IS_DETERMINISTIC);
    assert!(OpaqueF32::IS_DETERMINISTIC);
    assert!(!<f32 as FpTraits>::IS_DETERMINISTIC);
    assert!(!SoftF32::IS_FIXED_POINT);
    assert!(SoftF32::IS_SUPPORTED);
    assert_eq!(SoftF32::DISPLAY_NAME, "SoftF32");
}

#[test]
fn bit_round_trip_is_identity_for_all_patterns() {
    for bits in xorshift_bits(2000) {
        assert_eq!(SoftF32::from_bits(bits).to_bits(), bits);
        assert_eq!(<StrictF32 as FloatScalar>::from_bits(bits).to_bits(), bits);
        assert_eq!(f32::from_bits(bits).to_bits(), bits);
    }
}

#[test]
fn additive_identities_hold() {
    for bits in xorshift_bits(2000) {
        let x = SoftF32::from_bits(bits);
        if FpTraits::is_nan(x) {
            continue;
        }
        // x + 0 == x, except -0 + 0 which is +0 under round-to-nearest.
        let sum = x + SoftF32::new(0.0);
        if bits == 0x8000_0000 {
            assert_eq!(sum.to_bits(), 0);
        } else {
            assert_eq!(sum.to_bits(), bits);
        }
        if x.is_finite() {
            assert!((x - x).is_zero());
        }
    }
}

#[test]
fn comparisons_follow_ieee() {
    let nan = SoftF32::from_bits(0x7fc0_0000);
    let other_nan = SoftF32::from_bits(0x7fc0_0000);
    let one = SoftF32::new(1.0);
    assert!(nan != other_nan);
    assert!(!(nan < one) && !(nan > one) && nan != one);
    assert_eq!(SoftF32::new(0.0), SoftF32::new(-0.0));
    assert!(SoftF32::new(-2.0) < SoftF32::new(-1.0));
    assert!(SoftF32::new(2.0) > SoftF32::new(-3.0));
}

#[test]
fn exponent_and_mantissa_views_agree_across_kinds() {
    for bits in xorshift_bits(1000) {
        let s = SoftF32::from_bits(bits);
        let h = f32::from_bits(bits);
        assert_eq!(s.exponent(), h.exponent());
        assert_eq!(s.mantissa(), h.mantissa());
        assert_eq!(FpTraits::sign(s), FpTraits::sign(h));
        assert_eq!(FpTraits::is_zero(s), FpTraits::is_zero(h));
        assert_eq!(s.set_exponent(3).map(SoftF32::to_bits), h.set_exponent(3).map(f32::to_bits));
    }
}

#[test]
fn trunc_toward_zero_matches_host_cast() {
    for bits in xorshift_bits(2000) {
        let s = SoftF32::from_bits(bits);
        let h = f32::from_bits(bits);
        assert_eq!(s.trunc_i64(), h.trunc_i64(), "bits {bits:#010x}");
    }
}

#[test]
fn alias_hook_round_trips_payloads() {
    for bits in xorshift_bits(500) {
        let s = SoftF32::from_bits(bits);
        assert_eq!(SoftF32::from_alias(s.to_alias()).to_bits(), bits);
        let o = <OpaqueF32 as FloatScalar>::from_bits(bits);
        assert_eq!(OpaqueF32::from_alias(o.to_alias()).to_bits(), bits);
    }
}
