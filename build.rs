// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Vigil

// Build script for the Vigil root probe.
// android_logger writes through Android's liblog; link it when the build
// targets Android (checked via the target env var so cross-compiles work).

fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("android") {
        println!("cargo:rustc-link-lib=log");
    }
}
