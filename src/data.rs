//! Transient records produced by one collection pass

use crate::utils::parsing::pluralize;

/// Complete set of host facts gathered by qfetch.
///
/// Created fresh each run by querying the OS, never persisted.
#[derive(Debug, Clone)]
pub struct HostFacts {
    pub os_name: String,
    pub architecture: String,
    pub package_count: String,
    pub shell_version: String,
    pub terminal: String,
    pub memory: String,
    pub disk: String,
    pub uptime: Uptime,
}

/// Parsed system uptime, split the way the `uptime` command reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Uptime {
    /// Render as "N Days, N Hours, N Minutes" with singular units for 1.
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {}",
            pluralize(self.days, "Day"),
            pluralize(self.hours, "Hour"),
            pluralize(self.minutes, "Minute")
        )
    }
}
