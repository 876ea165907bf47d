// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Vigil

//! Package-manager queries.
//!
//! The installed-package detector talks to the platform through the
//! [`PackageQuery`] capability so tests can substitute a deterministic double
//! without spawning anything. The production binding shells out to `pm path`
//! with plain argument-vector semantics; the package identifier is never
//! interpolated into a shell line, so metacharacters in it stay inert.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How long one package query may run before it is killed. A wedged package
/// manager must not block the whole evaluation.
const QUERY_DEADLINE: Duration = Duration::from_secs(2);

/// Poll interval while waiting on a query child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Capability interface over the platform's "where is this package
/// installed" facility.
pub trait PackageQuery {
    /// Raw textual output of the query for `package_id`, or `None` when the
    /// query could not be launched, finished, or read. A `None` is simply
    /// "no evidence for this identifier"; callers decide what the output
    /// text means.
    fn query(&self, package_id: &str) -> Option<String>;
}

/// Production query: `pm path <package>` through the platform package
/// manager.
pub struct PmPathQuery {
    deadline: Duration,
}

impl PmPathQuery {
    pub fn new() -> Self {
        Self {
            deadline: QUERY_DEADLINE,
        }
    }
}

impl Default for PmPathQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageQuery for PmPathQuery {
    fn query(&self, package_id: &str) -> Option<String> {
        let mut command = Command::new("pm");
        command.arg("path").arg(package_id);
        run_with_deadline(command, self.deadline)
    }
}

/// Run `command` to completion and return its stdout.
///
/// Stdout is drained on a companion thread while the exit poll runs; a pipe
/// only buffers so much, and a child with more output than that would block
/// on write and never exit, reading here as a hang. `None` covers every
/// failure the same way: spawn error, deadline expiry (the child is killed
/// and reaped), or an unreadable output pipe. The child handle, its pipe,
/// and the drain thread are all released on every one of those paths.
fn run_with_deadline(mut command: Command, deadline: Duration) -> Option<String> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let mut stdout = child.stdout.take()?;
    let drain = thread::spawn(move || {
        let mut output = Vec::new();
        stdout.read_to_end(&mut output).ok().map(|_| output)
    });

    if !exited_within(&mut child, deadline) {
        log::debug!("package query exceeded {deadline:?}, killing it");
        let _ = child.kill();
        let _ = child.wait();
        // Kill closes the write end, so the drain hits EOF and join returns.
        let _ = drain.join();
        return None;
    }

    let output = drain.join().ok()??;
    Some(String::from_utf8_lossy(&output).into_owned())
}

/// True once the child has exited on its own; false when `deadline` passes
/// first or the status poll itself errors.
fn exited_within(child: &mut Child, deadline: Duration) -> bool {
    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_)) => return true,
            Ok(None) => {
                if started.elapsed() >= deadline {
                    return false;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(_) => return false,
        }
    }
}
