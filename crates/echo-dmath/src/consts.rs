// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Irrational constants, bit-exact per scalar kind.
//!
//! Stored as binary32 bit patterns (the correctly rounded values), never as
//! decimal text, so every kind on every target reads identical payloads.
//!
//! # Examples
//! ```
//! use echo_dmath::{consts, SoftF32};
//!
//! let pi: SoftF32 = consts::pi();
//! assert_eq!(pi.to_bits(), 0x40490fdb);
//! ```

use crate::traits::FloatScalar;

macro_rules! constant {
    ($(#[$doc:meta])* $name:ident, $bits:literal) => {
        $(#[$doc])*
        pub fn $name<F: FloatScalar>() -> F {
            F::from_bits($bits)
        }
    };
}

constant!(
    /// Euler's number e.
    e, 0x402df854
);
constant!(
    /// log2(e).
    log2_e, 0x3fb8aa3b
);
constant!(
    /// log10(e).
    log10_e, 0x3ede5bd9
);
constant!(
    /// Archimedes' constant π.
    pi, 0x40490fdb
);
constant!(
    /// 1/π.
    inv_pi, 0x3ea2f983
);
constant!(
    /// 1/√π.
    inv_sqrt_pi, 0x3f106ebb
);
constant!(
    /// ln 2.
    ln_2, 0x3f317218
);
constant!(
    /// ln 10.
    ln_10, 0x40135d8e
);
constant!(
    /// √2.
    sqrt_2, 0x3fb504f3
);
constant!(
    /// √3.
    sqrt_3, 0x3fddb3d7
);
constant!(
    /// 1/√3.
    inv_sqrt_3, 0x3f13cd3a
);
constant!(
    /// The Euler–Mascheroni constant γ.
    egamma, 0x3f13c468
);
constant!(
    /// The golden ratio φ.
    phi, 0x3fcf1bbd
);

#[cfg(test)]
mod tests {
    #[test]
    fn constants_match_host_float() {
        assert_eq!(super::pi::<f32>(), core::f32::consts::PI);
        assert_eq!(super::e::<f32>(), core::f32::consts::E);
        assert_eq!(super::ln_2::<f32>(), core::f32::consts::LN_2);
        assert_eq!(super::sqrt_2::<f32>(), core::f32::consts::SQRT_2);
        assert_eq!(super::inv_pi::<f32>(), core::f32::consts::FRAC_1_PI);
    }
}
