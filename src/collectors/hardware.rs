//! Memory and disk probes

use crate::collectors::platform::Os;
use crate::error::{QfetchError, Result};
use crate::utils::command::run_command;
use crate::utils::parsing;
use log::warn;

const MIB: u64 = 1024 * 1024;

/// Current memory usage as "usedMiB / totalMiB".
///
/// macOS has no single command for this: total comes from sysctl, used is
/// reconstructed from vm_stat page counts (active + wired + speculative).
/// Linux gets both from the Mem row of `free -m`.
pub fn memory_usage(os: Os) -> Result<String> {
    match os {
        Os::MacOs => {
            let total_bytes: u64 = parse_sysctl_value(&run_command("sysctl", &["-n", "hw.memsize"])?)?;
            let page_size: u64 = parse_sysctl_value(&run_command("sysctl", &["-n", "vm.pagesize"])?)?;
            let vm_stat = run_command("vm_stat", &[])?;

            let active = parsing::vm_stat_pages(&vm_stat, "Pages active")?;
            let wired = parsing::vm_stat_pages(&vm_stat, "Pages wired down")?;
            let speculative = parsing::vm_stat_pages(&vm_stat, "Pages speculative")?;

            let used = (active + wired + speculative) * page_size / MIB;
            let total = total_bytes / MIB;
            Ok(format!("{}MiB / {}MiB", used, total))
        }
        Os::Linux => {
            let output = run_command("free", &["-m"])?;
            let (used, total) = parsing::parse_free_mem(&output)?;
            Ok(format!("{}MiB / {}MiB", used, total))
        }
        other => Err(QfetchError::UnsupportedPlatform(other.label().to_string())),
    }
}

fn parse_sysctl_value(output: &str) -> Result<u64> {
    output
        .trim()
        .parse()
        .map_err(|_| QfetchError::Probe(format!("unexpected sysctl output: '{}'", output.trim())))
}

/// Root filesystem usage as "used / total".
///
/// Unlike the other probes this returns an "N/A" sentinel on unsupported
/// platforms instead of failing.
pub fn disk_usage(os: Os) -> Result<String> {
    match os {
        Os::MacOs | Os::Linux => {
            let output = run_command("df", &["-h", "/"])?;
            parsing::parse_df_usage(&output)
        }
        other => {
            warn!("disk usage not available on {}", other.label());
            Ok("N/A".to_string())
        }
    }
}
