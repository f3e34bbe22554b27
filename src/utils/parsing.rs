//! Pure text parsers for captured command output
//!
//! Every probe splits into "run the command" (utils::command, impure) and
//! "interpret the text" (here, pure). The parsers take the raw output as a
//! string so they can be tested against literal captured samples.

use crate::data::Uptime;
use crate::error::{QfetchError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// "<n> <unit>" for exactly 1, "<n> <unit>s" for everything else (including 0).
pub fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn uptime_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Matches "10:15 up 2 days, 3:45", "10:15 up 3:45", "10:15 up 5 mins".
        // Day count and the HH:MM / "N min" tails are all optional.
        Regex::new(
            r"\d{1,2}:\d{2}\s+up\s+(?:(\d+)\s+day(?:s)?,\s+)?(?:(\d+):(\d+))?(?:(\d+)\s+min(?:ute)?s?)?",
        )
        .expect("static regex")
    })
}

/// Parse the free-text output of the `uptime` command.
///
/// Unmatched optional groups default to zero; a string that doesn't match
/// the pattern at all signals a malformed uptime format.
pub fn parse_uptime(output: &str) -> Result<Uptime> {
    let caps = uptime_pattern().captures(output).ok_or_else(|| {
        QfetchError::Probe(format!("unrecognized uptime format: '{}'", output.trim()))
    })?;

    let group = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    let days = group(1);
    // Minutes come from the HH:MM tail when present, otherwise from "N mins".
    let (hours, minutes) = if caps.get(2).is_some() {
        (group(2), group(3))
    } else {
        (0, group(4))
    };

    Ok(Uptime { days, hours, minutes })
}

/// Extract a labeled page count from `vm_stat` output, e.g. "Pages active".
pub fn vm_stat_pages(output: &str, label: &str) -> Result<u64> {
    let pattern = Regex::new(&format!(r"{}:\s+(\d+)", regex::escape(label))).expect("static regex");
    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| QfetchError::Probe(format!("'{}' not found in vm_stat output", label)))
}

/// Pull (used, total) MiB out of the Mem row of `free -m` output.
pub fn parse_free_mem(output: &str) -> Result<(u64, u64)> {
    let row = output
        .lines()
        .find(|line| line.starts_with("Mem:"))
        .ok_or_else(|| QfetchError::Probe("no Mem row in free output".to_string()))?;

    let fields: Vec<&str> = row.split_whitespace().collect();
    let total = fields.get(1).and_then(|v| v.parse().ok());
    let used = fields.get(2).and_then(|v| v.parse().ok());
    match (used, total) {
        (Some(used), Some(total)) => Ok((used, total)),
        _ => Err(QfetchError::Probe(format!(
            "couldn't parse Mem row of free output: '{}'",
            row
        ))),
    }
}

/// Pull "used / total" out of the root-mount row of `df -h /` output.
pub fn parse_df_usage(output: &str) -> Result<String> {
    let row = output
        .lines()
        .nth(1)
        .ok_or_else(|| QfetchError::Probe("df output is missing the filesystem row".to_string()))?;

    let fields: Vec<&str> = row.split_whitespace().collect();
    match (fields.get(2), fields.get(1)) {
        (Some(used), Some(total)) => Ok(format!("{} / {}", used, total)),
        _ => Err(QfetchError::Probe(format!(
            "couldn't parse df output row: '{}'",
            row
        ))),
    }
}

/// Take a whitespace-separated token at a fixed position.
///
/// Shell version banners put the version at a known index (1 for zsh,
/// 3 for bash), which is fragile but matches what the banners print.
pub fn version_token(output: &str, index: usize) -> Result<String> {
    output
        .split_whitespace()
        .nth(index)
        .map(|token| token.to_string())
        .ok_or_else(|| {
            QfetchError::Probe(format!(
                "version output has no token at position {}: '{}'",
                index,
                output.trim()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_one_is_singular() {
        assert_eq!(pluralize(1, "Day"), "1 Day");
    }

    #[test]
    fn pluralize_zero_is_plural() {
        assert_eq!(pluralize(0, "Day"), "0 Days");
    }

    #[test]
    fn pluralize_many_is_plural() {
        assert_eq!(pluralize(5, "Minute"), "5 Minutes");
    }

    #[test]
    fn uptime_with_days_and_hhmm() {
        let up = parse_uptime("10:15 up 2 days, 3:45, 2 users, load averages: 1.85 2.10 2.21")
            .unwrap();
        assert_eq!(up, Uptime { days: 2, hours: 3, minutes: 45 });
    }

    #[test]
    fn uptime_minutes_only() {
        let up = parse_uptime("10:15 up 5 mins, 1 user, load average: 0.52").unwrap();
        assert_eq!(up, Uptime { days: 0, hours: 0, minutes: 5 });
    }

    #[test]
    fn uptime_single_day() {
        let up = parse_uptime("22:01 up 1 day, 11:42, 3 users, load averages: 2.03").unwrap();
        assert_eq!(up, Uptime { days: 1, hours: 11, minutes: 42 });
    }

    #[test]
    fn uptime_hhmm_without_days() {
        let up = parse_uptime("09:30 up 4:07, 2 users, load average: 0.11").unwrap();
        assert_eq!(up, Uptime { days: 0, hours: 4, minutes: 7 });
    }

    #[test]
    fn uptime_garbage_is_an_error() {
        assert!(parse_uptime("no uptime here").is_err());
    }

    #[test]
    fn vm_stat_extracts_page_counts() {
        let sample = "Mach Virtual Memory Statistics: (page size of 16384 bytes)\n\
                      Pages free:                              135543.\n\
                      Pages active:                            411056.\n\
                      Pages inactive:                          397321.\n\
                      Pages speculative:                         9611.\n\
                      Pages wired down:                        109485.\n";
        assert_eq!(vm_stat_pages(sample, "Pages active").unwrap(), 411056);
        assert_eq!(vm_stat_pages(sample, "Pages wired down").unwrap(), 109485);
        assert_eq!(vm_stat_pages(sample, "Pages speculative").unwrap(), 9611);
    }

    #[test]
    fn vm_stat_missing_field_is_an_error() {
        assert!(vm_stat_pages("Pages free: 10.", "Pages active").is_err());
    }

    #[test]
    fn free_mem_row_parses() {
        let sample = "               total        used        free      shared  buff/cache   available\n\
                      Mem:           15895        4726        7364         290        4302       10868\n\
                      Swap:           2047           0        2047\n";
        assert_eq!(parse_free_mem(sample).unwrap(), (4726, 15895));
    }

    #[test]
    fn free_without_mem_row_is_an_error() {
        assert!(parse_free_mem("Swap: 2047 0 2047").is_err());
    }

    #[test]
    fn df_root_row_parses() {
        let sample = "Filesystem      Size  Used Avail Use% Mounted on\n\
                      /dev/nvme0n1p2  234G   67G  155G  31% /\n";
        assert_eq!(parse_df_usage(sample).unwrap(), "67G / 234G");
    }

    #[test]
    fn df_single_line_is_an_error() {
        assert!(parse_df_usage("Filesystem Size Used Avail Use% Mounted on").is_err());
    }

    #[test]
    fn zsh_version_token() {
        let banner = "zsh 5.9 (x86_64-apple-darwin23.0)";
        assert_eq!(version_token(banner, 1).unwrap(), "5.9");
    }

    #[test]
    fn bash_version_token() {
        let banner = "GNU bash, version 5.2.21(1)-release (x86_64-pc-linux-gnu)\n\
                      Copyright (C) 2022 Free Software Foundation, Inc.";
        assert_eq!(version_token(banner, 3).unwrap(), "5.2.21(1)-release");
    }

    #[test]
    fn missing_version_token_is_an_error() {
        assert!(version_token("zsh", 1).is_err());
    }
}
