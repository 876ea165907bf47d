// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Vigil

//! Fixed detection signatures.
//!
//! Everything in this module is configuration, not logic: ordered, immutable
//! tables consumed read-only by exactly one detector each. Keeping them as
//! named statics lets every detector unit-test against an injected list
//! instead of the live device.

/// Known drop locations for `su` binaries left by rooting tools
/// (Magisk, SuperSU, KingRoot and friends).
pub const SU_BINARY_PATHS: &[&str] = &[
    "/data/local/bin/su",
    "/data/local/su",
    "/sbin/su",
    "/system/bin/su",
    "/system/bin/.ext/su",
    "/system/xbin/su",
    "/system/xbin/mu",
    "/system/xbin/ku",
    "/system/sd/xbin/su",
    "/system/usr/we-need-root/su",
    "/vendor/bin/su",
    "/su/bin/su",
    "/magisk/.core/bin/su",
];

/// Filesystem artifacts left behind by root-management frameworks: Magisk
/// work dirs, KernelSU and APatch data dirs, disable-flag files. Several are
/// directories or special files with no execute bit, so they get probed with
/// an any-entry stat rather than a plain file check.
pub const ROOT_MANAGER_PATHS: &[&str] = &[
    "/sbin/.magisk",
    "/dev/magisk",
    "/dev/.magisk.unblock",
    "/data/adb/magisk",
    "/cache/.disable_magisk",
    "/data/adb/ksu",
    "/data/adb/ap",
    "/data/adb/apd",
];

/// Build-provenance query: (property holding the build signing tags, marker
/// substring that betrays a development signing key).
pub const TEST_KEYS_QUERY: (&str, &str) = ("ro.build.tags", "test-keys");

/// Insecure-configuration queries: (property, exact value that flags the
/// build as debuggable or intentionally non-secure).
pub const INSECURE_PROPERTY_QUERIES: &[(&str, &str)] = &[
    ("ro.debuggable", "1"),
    ("ro.secure", "0"),
];

/// Substrings that betray root-hiding mounts in the process mount table:
/// Magisk itself, its mirrored-core overlays, KernelSU.
pub const MOUNT_CLOAK_MARKERS: &[&str] = &["magisk", "core/mirror", "KSU"];

/// Package identifiers of widespread root-management apps.
pub const ROOT_PACKAGE_IDS: &[&str] = &[
    "com.topjohnwu.magisk",
    "com.kingroot.kinguser",
    "com.kingo.root",
    "me.weishu.kernelsu",
    "me.weishu.superuser",
    "eu.chainfire.supersu",
];

/// `pm path` starts a line with this token when the package is installed.
pub const PACKAGE_INSTALLED_PREFIX: &str = "package:";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_lists_are_nonempty_and_absolute() {
        for list in [SU_BINARY_PATHS, ROOT_MANAGER_PATHS] {
            assert!(!list.is_empty());
            for path in list {
                assert!(path.starts_with('/'), "{path} is not absolute");
            }
        }
    }

    #[test]
    fn package_ids_are_reverse_domain_names() {
        assert!(!ROOT_PACKAGE_IDS.is_empty());
        for id in ROOT_PACKAGE_IDS {
            assert!(id.contains('.'), "{id} is not a package id");
            assert!(!id.contains('/'), "{id} is not a package id");
        }
    }

    #[test]
    fn property_keys_are_wellformed_readonly_keys() {
        let mut keys = vec![TEST_KEYS_QUERY.0];
        keys.extend(INSECURE_PROPERTY_QUERIES.iter().map(|&(name, _)| name));
        for key in keys {
            assert!(key.starts_with("ro."), "{key} is not a system property key");
        }
    }
}
