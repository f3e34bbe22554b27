//! qfetch library
//!
//! A simple system information fetch tool for macOS and Linux.

pub mod art;
pub mod cli;
pub mod collectors;
pub mod data;
pub mod display;
pub mod error;
pub mod theme;
pub mod utils;

pub use data::{HostFacts, Uptime};
pub use error::{QfetchError, Result};

use collectors::platform::Os;

/// Gather every host fact for the detected platform.
///
/// Probes run once each, in a fixed order, fully synchronously; the first
/// failure aborts the whole collection.
pub fn collect_host_facts(os: Os) -> Result<HostFacts> {
    Ok(HostFacts {
        os_name: collectors::platform::os_name(os)?,
        architecture: collectors::platform::architecture().to_string(),
        package_count: collectors::packages::package_count(os)?,
        shell_version: collectors::system::shell_version(os)?,
        terminal: collectors::platform::terminal(os)?,
        memory: collectors::hardware::memory_usage(os)?,
        disk: collectors::hardware::disk_usage(os)?,
        uptime: collectors::system::uptime(os)?,
    })
}
