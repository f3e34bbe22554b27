//! Package count probe

use crate::collectors::platform::Os;
use crate::error::{QfetchError, Result};
use crate::utils::command::run_command;
use std::fs;

const HOMEBREW_CELLAR: &str = "/opt/homebrew/Cellar";

/// Count installed packages: Homebrew cellar entries on macOS, dpkg
/// selections on Linux. The package manager name is baked into the result.
pub fn package_count(os: Os) -> Result<String> {
    match os {
        Os::MacOs => {
            let entries = fs::read_dir(HOMEBREW_CELLAR).map_err(|err| {
                QfetchError::Probe(format!(
                    "couldn't read the Homebrew cellar at {}: {}",
                    HOMEBREW_CELLAR, err
                ))
            })?;
            Ok(format!("{} (brew)", entries.count()))
        }
        Os::Linux => {
            let output = run_command("dpkg", &["--get-selections"])?;
            let count = output.lines().filter(|line| !line.is_empty()).count();
            Ok(format!("{} (apt)", count))
        }
        other => Err(QfetchError::UnsupportedPlatform(other.label().to_string())),
    }
}
