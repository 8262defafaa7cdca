// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! The software emulator is the oracle every other kind is validated
//! against; here the emulator itself is pinned against the host FPU, which
//! on any IEEE-conformant CI machine computes the same correctly rounded
//! binary32 results.

#![allow(missing_docs)]
#![allow(clippy::float_cmp)] // comparing compare-semantics is the point here

use echo_dmath::SoftF32;

fn lcg_stream(count: usize) -> impl Iterator<Item = u32> {
    let mut state = 0x0bad_5eedu64;
    core::iter::repeat_with(move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 32) as u32
    })
    .take(count)
}

fn check_pair(a_bits: u32, b_bits: u32) {
    let ha = f32::from_bits(a_bits);
    let hb = f32::from_bits(b_bits);
    let sa = SoftF32::from_bits(a_bits);
    let sb = SoftF32::from_bits(b_bits);

    let cases = [
        ((sa + sb).to_bits(), (ha + hb).to_bits(), "+"),
        ((sa - sb).to_bits(), (ha - hb).to_bits(), "-"),
        ((sa * sb).to_bits(), (ha * hb).to_bits(), "*"),
        ((sa / sb).to_bits(), (ha / hb).to_bits(), "/"),
    ];
    for (soft, host, op) in cases {
        if f32::from_bits(host).is_nan() {
            assert!(
                f32::from_bits(soft).is_nan(),
                "{a_bits:#010x} {op} {b_bits:#010x}: soft {soft:#010x} vs host NaN"
            );
        } else {
            assert_eq!(
                soft, host,
                "{a_bits:#010x} {op} {b_bits:#010x}"
            );
        }
    }

    assert_eq!(sa == sb, ha == hb, "eq {a_bits:#010x} {b_bits:#010x}");
    assert_eq!(sa < sb, ha < hb, "lt {a_bits:#010x} {b_bits:#010x}");
    assert_eq!(sa <= sb, ha <= hb, "le {a_bits:#010x} {b_bits:#010x}");
    assert_eq!(sa > sb, ha > hb, "gt {a_bits:#010x} {b_bits:#010x}");
    assert_eq!(sa >= sb, ha >= hb, "ge {a_bits:#010x} {b_bits:#010x}");
}

#[test]
fn random_pairs_match_host_exactly() {
    let bits: Vec<u32> = lcg_stream(40_000).collect();
    for pair in bits.chunks_exact(2) {
        check_pair(pair[0], pair[1]);
    }
}

#[test]
fn corner_value_cross_product_matches_host() {
    let corners = [
        0x0000_0000u32, 0x8000_0000, 0x0000_0001, 0x8000_0001, 0x007f_ffff,
        0x0080_0000, 0x3f80_0000, 0xbf80_0000, 0x3f80_0001, 0x4000_0000,
        0x7f7f_ffff, 0xff7f_ffff, 0x7f80_0000, 0xff80_0000, 0x7fc0_0000,
        0x0040_0000, 0x3400_0000, 0x7e80_0000, 0x0100_0000, 0xc0a0_0000,
    ];
    for &a in &corners {
        for &b in &corners {
            check_pair(a, b);
        }
    }
}

/// Rounding edge: results exactly between representables must go to even.
#[test]
fn ties_round_to_even() {
    // 2^24 + 1 is not representable; 16777217 = 16777216 + 1 computed as
    // 16777216 + 1.0 must round to 16777216 (even mantissa).
    let big = SoftF32::new(16_777_216.0);
    let one = SoftF32::new(1.0);
    assert_eq!((big + one).to_bits(), big.to_bits());
    // But +1.5 crosses the tie and lands on 16777218.
    let r = big + SoftF32::new(1.5);
    assert_eq!(r.to_float(), 16_777_218.0);
}

#[test]
fn subnormal_arithmetic_is_gradual() {
    let min_sub = SoftF32::from_bits(1);
    let sum = min_sub + min_sub;
    assert_eq!(sum.to_bits(), 2);
    // Crossing into the normal range.
    let max_sub = SoftF32::from_bits(0x007f_ffff);
    let step = max_sub + min_sub;
    assert_eq!(step.to_bits(), 0x0080_0000);
}

#[test]
fn overflow_saturates_to_infinity() {
    let max = SoftF32::from_bits(0x7f7f_ffff);
    assert_eq!((max + max).to_bits(), 0x7f80_0000);
    assert_eq!((max * SoftF32::new(2.0)).to_bits(), 0x7f80_0000);
    assert_eq!(((-max) - max).to_bits(), 0xff80_0000);
}
