// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Vigil

//! System-property access.
//!
//! One contract everywhere: a property that is unset, unreadable, or not
//! available on this platform reads as the empty string. Detectors downstream
//! then treat "absent" and "set to a non-matching value" identically, which
//! is exactly the fail-open behavior the probe wants.

/// Read a system property; empty string when unset.
///
/// The Android property store bounds values at `PROP_VALUE_MAX` bytes. The
/// read buffer is sized to exactly that, and only the length reported back by
/// the platform is consumed, so a value shorter than the buffer never drags
/// stale bytes along.
#[cfg(target_os = "android")]
pub fn get(name: &str) -> String {
    use std::ffi::CString;

    let Ok(name) = CString::new(name) else {
        return String::new();
    };
    let mut value = [0u8; libc::PROP_VALUE_MAX as usize];
    let len = unsafe { libc::__system_property_get(name.as_ptr(), value.as_mut_ptr().cast()) };
    if len <= 0 {
        return String::new();
    }
    let len = (len as usize).min(value.len());
    String::from_utf8_lossy(&value[..len]).into_owned()
}

/// Read a system property; empty string when unset.
///
/// Hosts without an Android property store resolve every key as unset, which
/// keeps the detectors compiling and runnable off-device.
#[cfg(not(target_os = "android"))]
pub fn get(_name: &str) -> String {
    String::new()
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    #[test]
    fn hosts_resolve_every_property_as_unset() {
        assert_eq!(super::get("ro.build.tags"), "");
        assert_eq!(super::get("ro.debuggable"), "");
    }
}
