//! Operating system detection and identity probes

use crate::error::{QfetchError, Result};
use crate::utils::command::run_command;
use crate::utils::file::read_first_line;
use std::env;

/// Supported platforms. Detected once at startup and passed explicitly to
/// every probe; Windows is accepted here but fails inside the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
}

impl Os {
    pub fn label(self) -> &'static str {
        match self {
            Os::MacOs => "macOS",
            Os::Linux => "Linux",
            Os::Windows => "Windows",
        }
    }
}

/// Detect the running operating system.
pub fn detect_os() -> Result<Os> {
    classify_os(env::consts::OS)
}

fn classify_os(name: &str) -> Result<Os> {
    match name {
        "macos" => Ok(Os::MacOs),
        "linux" => Ok(Os::Linux),
        "windows" => Ok(Os::Windows),
        other => Err(QfetchError::UnsupportedPlatform(other.to_string())),
    }
}

/// Platform name plus release, e.g. "macOS-14.5" or "Linux-6.8.0-45-generic".
pub fn os_name(os: Os) -> Result<String> {
    match os {
        Os::MacOs => {
            let version = run_command("sw_vers", &["-productVersion"])?;
            Ok(format!("macOS-{}", version))
        }
        Os::Linux => Ok(format!("Linux-{}", kernel_release()?)),
        other => Err(QfetchError::UnsupportedPlatform(other.label().to_string())),
    }
}

/// Kernel release string, also used for the WSL check.
pub fn kernel_release() -> Result<String> {
    read_first_line("/proc/sys/kernel/osrelease")
}

/// Compile-target machine architecture.
pub fn architecture() -> &'static str {
    env::consts::ARCH
}

/// The terminal reported by $TERM, verbatim (empty when unset).
pub fn terminal(os: Os) -> Result<String> {
    match os {
        Os::MacOs | Os::Linux => Ok(env::var("TERM").unwrap_or_default()),
        other => Err(QfetchError::UnsupportedPlatform(other.label().to_string())),
    }
}
