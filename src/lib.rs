// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Vigil

//! Vigil Root Probe - Rust Implementation
//!
//! Device-integrity probe for the Vigil Android app: answers "has this
//! device's OS-integrity boundary been compromised?" with a single boolean,
//! by running six independent heuristic root checks and OR-combining them.
//! Replaces the Kotlin RootBeer-style checks with native Rust.
//!
//! Every evaluation is fresh: a root manager can be installed or removed
//! while the host process runs, so nothing is cached between calls. The
//! probe holds no state at all, which also makes concurrent calls from any
//! number of threads safe without synchronization.

pub mod checks;
pub mod package_query;
pub mod properties;
pub mod signatures;

use jni::objects::JClass;
use jni::sys::{jboolean, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;

#[cfg(target_os = "android")]
use android_logger::Config;
#[cfg(target_os = "android")]
use log::LevelFilter;

/// Evaluate the six detectors in fixed order, stopping at the first
/// positive. The order is a latency policy, cheapest probes first: the
/// verdict is a plain OR, so the subprocess-heavy package scan only ever
/// runs when every cheaper probe came back clean.
pub fn is_device_rooted() -> bool {
    let detectors: [(&str, fn() -> bool); 6] = [
        ("su binary on disk", checks::su_binary_present),
        ("root-manager artifact", checks::root_manager_artifact_present),
        ("test-keys build", checks::build_has_test_keys),
        ("insecure system properties", checks::insecure_properties_set),
        ("root-hiding mount", checks::mount_table_cloaked),
        ("root-manager package", checks::root_package_installed),
    ];

    for (indicator, detect) in detectors {
        if detect() {
            log::warn!("device reported rooted: {} detected", indicator);
            return true;
        }
    }
    log::debug!("no root indicators found");
    false
}

// ============================================================================
// JNI Bindings
// ============================================================================

/// Initialize logging for Android
#[cfg(target_os = "android")]
#[no_mangle]
pub extern "C" fn Java_com_vigilsec_vigil_core_integrity_RustRootProbe_nativeInit(
    _env: JNIEnv,
    _class: JClass,
) {
    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Info)
            .with_tag("RustRootProbe"),
    );
}

#[cfg(not(target_os = "android"))]
#[no_mangle]
pub extern "C" fn Java_com_vigilsec_vigil_core_integrity_RustRootProbe_nativeInit(
    _env: JNIEnv,
    _class: JClass,
) {
    // No-op for non-Android platforms
}

/// Root verdict - JNI entry point
///
/// Synchronous: evaluates on the caller's thread and returns the fresh
/// boolean verdict, nothing else.
#[no_mangle]
pub extern "C" fn Java_com_vigilsec_vigil_core_integrity_RustRootProbe_nativeIsDeviceRooted(
    _env: JNIEnv,
    _class: JClass,
) -> jboolean {
    if is_device_rooted() {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_is_stable_across_calls() {
        let first = is_device_rooted();
        assert_eq!(is_device_rooted(), first);
    }
}
