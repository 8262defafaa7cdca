// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Approximate equality for test assertions.
//!
//! Deterministic kinds compare exactly — anything else would hide the very
//! regressions this library exists to prevent. Non-deterministic kinds get
//! an absolute-or-relative epsilon band, and every comparison that was not
//! exactly equal bumps a thread-local counter so a test harness can *report*
//! observed non-determinism without failing the build.

use std::cell::Cell;

use crate::mathf;
use crate::traits::{FloatScalar, FpTraits};

thread_local! {
    static INEXACT_EQ: Cell<u64> = const { Cell::new(0) };
}

/// Number of inexact (epsilon-band) matches taken on this thread.
pub fn inexact_eq_count() -> u64 {
    INEXACT_EQ.with(Cell::get)
}

/// Resets the inexact-match counter for this thread.
pub fn reset_inexact_eq_count() {
    INEXACT_EQ.with(|c| c.set(0));
}

/// Domain equality predicate: exact for deterministic kinds, epsilon-banded
/// (absolute, then relative) within `n` ulps of 1.0 otherwise.
pub fn approximate_eq<T: FpTraits>(left: T, right: T, n: u32) -> bool {
    if T::IS_DETERMINISTIC {
        return left == right;
    }
    let l = left.to_fallback();
    let r = right.to_fallback();

    // Exact comparison first; also the only one that can accept infinities.
    if l == r {
        return true;
    }
    INEXACT_EQ.with(|c| c.set(c.get() + 1));

    #[allow(clippy::cast_precision_loss)]
    let eps = T::Fallback::from_f32(n as f32 * f32::EPSILON);
    let diff = mathf::abs(l - r);
    if diff <= eps {
        return true;
    }
    let scale = mathf::max(mathf::abs(l), mathf::abs(r)) + T::Fallback::from_f32(f32::EPSILON);
    diff / scale <= eps
}
