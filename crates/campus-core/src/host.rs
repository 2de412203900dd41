//! Host operating-system facts for the diagnostic demos.
//!
//! Names follow the conventional `type`/`platform`/`release` split: `os_type`
//! is the kernel family (`Linux`, `Darwin`, `Windows_NT`), `platform` the
//! lowercase target OS. Memory and release are read from procfs and are
//! `None` on hosts without it.

use std::fs;
use std::thread;

use serde::Serialize;

const MEMINFO_PATH: &str = "/proc/meminfo";
const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// A snapshot of host facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFacts {
    pub os_type: String,
    pub platform: String,
    pub release: Option<String>,
    pub arch: String,
    pub cpu_count: usize,
    /// Bytes.
    pub total_memory: Option<u64>,
    /// Bytes.
    pub free_memory: Option<u64>,
}

impl HostFacts {
    /// Collects facts about the running host.
    pub fn collect() -> Self {
        let platform = std::env::consts::OS;
        let (total_memory, free_memory) = fs::read_to_string(MEMINFO_PATH)
            .map(|text| parse_meminfo(&text))
            .unwrap_or((None, None));

        HostFacts {
            os_type: os_type(platform).to_string(),
            platform: platform.to_string(),
            release: fs::read_to_string(OSRELEASE_PATH)
                .ok()
                .map(|release| release.trim().to_string())
                .filter(|release| !release.is_empty()),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count: thread::available_parallelism().map_or(1, |n| n.get()),
            total_memory,
            free_memory,
        }
    }

    /// Release string, or `"unknown"`.
    pub fn release_label(&self) -> &str {
        self.release.as_deref().unwrap_or("unknown")
    }
}

fn os_type(platform: &str) -> &str {
    match platform {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows_NT",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        other => other,
    }
}

/// Extracts `(MemTotal, MemAvailable)` in bytes from `/proc/meminfo` text.
///
/// Falls back to `MemFree` on kernels that predate `MemAvailable`.
fn parse_meminfo(text: &str) -> (Option<u64>, Option<u64>) {
    let mut total = None;
    let mut available = None;
    let mut free = None;

    for line in text.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let kib = rest
            .trim()
            .trim_end_matches("kB")
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(|kib| kib.checked_mul(1024));
        match key {
            "MemTotal" => total = kib,
            "MemAvailable" => available = kib,
            "MemFree" => free = kib,
            _ => {}
        }
    }

    (total, available.or(free))
}
