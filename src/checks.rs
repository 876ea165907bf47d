// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Vigil

//! The six root-indicator detectors.
//!
//! Each detector is a pure function from current system state to one boolean,
//! split into a core that runs against injected inputs and a production
//! wrapper bound to the live device. Every OS-level failure along the way
//! (missing file, denied stat, unreadable mount table, dead package query) is
//! folded into `false` for that one probe and scanning moves on: the probe
//! fails open, and the verdict stays an OR across redundant heuristics.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::package_query::{PackageQuery, PmPathQuery};
use crate::properties;
use crate::signatures;

/// The process's own view of the mount table.
const MOUNT_TABLE_PATH: &str = "/proc/self/mounts";

/// Longest mount-table slice matched in one piece. Longer lines are matched
/// chunk by chunk, so an over-long line is truncated for matching purposes
/// instead of failing the scan.
const MOUNT_LINE_MAX: usize = 1024;

// ============================================================================
// Detector cores (injected inputs)
// ============================================================================

/// Existence scan shared by both path detectors: first present entry wins.
fn scan_paths(paths: &[&str], present: impl Fn(&str) -> bool) -> bool {
    paths.iter().copied().any(|path| present(path))
}

/// Build-provenance core: does the queried property carry the marker as a
/// substring? Absent properties read as empty and can never carry it.
fn property_contains(query: (&str, &str), get: impl Fn(&str) -> String) -> bool {
    let (name, marker) = query;
    get(name).contains(marker)
}

/// Insecure-configuration core: does any property read back exactly its
/// flagged value? Every property is read before the verdict forms, so one
/// unset key cannot mask another.
fn any_property_equals(queries: &[(&str, &str)], get: impl Fn(&str) -> String) -> bool {
    let mut hit = false;
    for &(name, flagged) in queries {
        hit |= get(name) == flagged;
    }
    hit
}

/// Mount-table core: first line carrying any marker wins. Lines are read
/// through a bounded window of [`MOUNT_LINE_MAX`] bytes; EOF and read errors
/// both end the scan as clean.
fn scan_mount_table<R: BufRead>(mut table: R, markers: &[&str]) -> bool {
    let mut line = Vec::with_capacity(MOUNT_LINE_MAX);
    loop {
        line.clear();
        match table
            .by_ref()
            .take(MOUNT_LINE_MAX as u64)
            .read_until(b'\n', &mut line)
        {
            Ok(0) => return false,
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                if markers.iter().any(|marker| text.contains(marker)) {
                    return true;
                }
            }
            Err(_) => return false,
        }
    }
}

/// Installed-package core: first identifier whose query output starts a line
/// with the installed prefix wins. An identifier whose query died counts as
/// not installed, and the rest of the list still runs.
fn scan_packages(package_ids: &[&str], query: &dyn PackageQuery) -> bool {
    package_ids.iter().copied().any(|id| match query.query(id) {
        Some(output) => output
            .lines()
            .any(|line| line.starts_with(signatures::PACKAGE_INSTALLED_PREFIX)),
        None => false,
    })
}

// ============================================================================
// Filesystem probes
// ============================================================================

/// Plain existence probe: the path resolves to something that stats. Errors,
/// denied access included, read as "not there".
fn file_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Any-entry probe: an lstat that succeeds for regular files, directories,
/// sockets, and dangling symlinks alike. Root-manager artifacts are often
/// directories or special files with no execute bit, which a plain file
/// check can miss.
fn entry_exists(path: &str) -> bool {
    fs::symlink_metadata(path).is_ok()
}

// ============================================================================
// Production detectors, in aggregation order
// ============================================================================

/// Is a known `su` binary sitting on disk?
pub fn su_binary_present() -> bool {
    scan_paths(signatures::SU_BINARY_PATHS, file_exists)
}

/// Has a root-management framework left its work files behind?
pub fn root_manager_artifact_present() -> bool {
    scan_paths(signatures::ROOT_MANAGER_PATHS, entry_exists)
}

/// Was this build signed with development keys?
pub fn build_has_test_keys() -> bool {
    property_contains(signatures::TEST_KEYS_QUERY, properties::get)
}

/// Is the system flagged debuggable or non-secure?
pub fn insecure_properties_set() -> bool {
    any_property_equals(signatures::INSECURE_PROPERTY_QUERIES, properties::get)
}

/// Is anything root-related mounted over this process?
pub fn mount_table_cloaked() -> bool {
    mount_table_at_cloaked(Path::new(MOUNT_TABLE_PATH))
}

fn mount_table_at_cloaked(table_path: &Path) -> bool {
    match File::open(table_path) {
        Ok(table) => scan_mount_table(BufReader::new(table), signatures::MOUNT_CLOAK_MARKERS),
        Err(_) => false,
    }
}

/// Is a known root-management app installed?
pub fn root_package_installed() -> bool {
    scan_packages(signatures::ROOT_PACKAGE_IDS, &PmPathQuery::new())
}
