// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use echo_dmath::{Fixed, FpTraits, Fx32};
use proptest::prelude::*;
use typenum::{U30, U32, U59, U61};

type Fx32Wide = Fixed<U32, U30, f32>;

#[test]
fn default_alias_matches_tunables() {
    assert_eq!(echo_dmath::fixed::FIXED_POINT_DEFAULT_NBITS, 31);
    assert_eq!(echo_dmath::fixed::FIXED_POINT_DEFAULT_NORM_BITS, 30);
    // One payload step below 1.0.
    let one = Fx32::from_fallback(1.0);
    assert_eq!(one.raw(), 1 << 29);
}

#[test]
fn half_squared_is_a_quarter_in_the_promoted_grid() {
    let half = Fx32::from_fallback(0.5);
    let q: Fixed<U61, U59, f32> = half * half;
    assert_eq!(q.raw(), 1i64 << 56);
    assert_eq!(q.to_float(), 0.25);
}

#[test]
fn capability_flags() {
    assert!(Fx32::IS_DETERMINISTIC);
    assert!(Fx32::IS_FIXED_POINT);
    assert!(!Fx32::from_fallback(1.0).is_nan());
    assert!(Fx32::from_fallback(-1.0).sign());
    assert!(Fx32::from_fallback(0.0).is_zero());
}

#[test]
fn to_fallback_widens_to_float() {
    let v = Fx32::from_fallback(1.25);
    assert_eq!(v.to_fallback(), 1.25f32);
}

proptest! {
    /// Construction lands on the nearest grid point: converting back differs
    /// from the input by at most half a grid step.
    #[test]
    fn from_fallback_rounds_to_nearest_grid_point(x in -1.999f32..1.999) {
        let v = Fx32::from_fallback(x);
        let grid = f64::from(v.raw()) / f64::from(1u32 << 29);
        let err = (f64::from(x) - grid).abs();
        prop_assert!(err <= 0.5 / f64::from(1u32 << 29));
    }

    /// Addition is exact whenever the result stays in range.
    #[test]
    fn addition_is_exact_in_range(a in -0.9f32..0.9, b in -0.9f32..0.9) {
        let fa = Fx32::from_fallback(a);
        let fb = Fx32::from_fallback(b);
        let sum: Fixed<U32, U30, f32> = fa + fb;
        prop_assert_eq!(i64::from(sum.raw()), i64::from(fa.raw()) + i64::from(fb.raw()));
    }

    /// a + b == b + a on the promoted grid.
    #[test]
    fn addition_commutes(a in -0.9f32..0.9, b in -0.9f32..0.9) {
        let fa = Fx32::from_fallback(a);
        let fb = Fx32::from_fallback(b);
        let left: Fx32Wide = fa + fb;
        let right: Fx32Wide = fb + fa;
        prop_assert_eq!(left.raw(), right.raw());
    }

    /// Multiplication on the promoted grid is the exact integer product.
    #[test]
    fn multiplication_is_exact(a in -1.9f32..1.9, b in -1.9f32..1.9) {
        let fa = Fx32::from_fallback(a);
        let fb = Fx32::from_fallback(b);
        let p: Fixed<U61, U59, f32> = fa * fb;
        prop_assert_eq!(p.raw(), i64::from(fa.raw()) * i64::from(fb.raw()));
    }

    /// Division's rational result reproduces the payload ratio.
    #[test]
    fn division_preserves_the_ratio(a in 0.01f32..1.9, b in 0.01f32..1.9) {
        let fa = Fx32::from_fallback(a);
        let fb = Fx32::from_fallback(b);
        let r = fa / fb;
        let expect = f64::from(fa.raw()) / f64::from(fb.raw());
        let got = f64::from(r.numerator) / f64::from(r.denominator);
        prop_assert!((expect - got).abs() <= 1e-6);
    }

    /// Round-tripping through the float alias stays within one grid ulp.
    #[test]
    fn to_float_round_trip(x in -1.999f32..1.999) {
        let v = Fx32::from_fallback(x);
        let back = Fx32::from_fallback(v.to_float());
        prop_assert!((i64::from(back.raw()) - i64::from(v.raw())).abs() <= 1);
    }
}
