// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Build-time capability probes for the scalar backends.
//!
//! Two cfgs are emitted:
//! - `dmath_asm_scalar`: the target ISA has a single-instruction scalar float
//!   form we can fence with inline assembly (`AsmF32` exists).
//! - `dmath_wpo`: whole-program optimization is requested for this build, so
//!   the TU-isolation guarantee of `OpaqueF32` does not hold and its
//!   `IS_SUPPORTED` must report false.

use std::env;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(dmath_asm_scalar)");
    println!("cargo::rustc-check-cfg=cfg(dmath_wpo)");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let asm_capable = match arch.as_str() {
        "x86_64" | "aarch64" => true,
        // Scalar float asm needs the F extension's registers.
        "riscv64" => features.split(',').any(|f| f == "f"),
        _ => false,
    };
    if asm_capable {
        println!("cargo::rustc-cfg=dmath_asm_scalar");
    }

    // Inline-never is only an intra-unit barrier once fat LTO is on; detect it
    // from the flags the build was invoked with.
    let flags = env::var("CARGO_ENCODED_RUSTFLAGS")
        .or_else(|_| env::var("RUSTFLAGS"))
        .unwrap_or_default();
    if flags.contains("lto=fat") || flags.contains("lto=yes") || flags.contains("-Clto\u{1f}") {
        println!("cargo::rustc-cfg=dmath_wpo");
    }

    println!("cargo::rerun-if-env-changed=RUSTFLAGS");
    println!("cargo::rerun-if-env-changed=CARGO_ENCODED_RUSTFLAGS");
}
