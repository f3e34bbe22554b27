//! Shell and uptime probes

use crate::collectors::platform::{kernel_release, Os};
use crate::data::Uptime;
use crate::error::{QfetchError, Result};
use crate::utils::command::run_command;
use crate::utils::parsing;
use std::env;

/// Version of the login shell reported by $SHELL.
///
/// Only zsh and bash are recognized; their version banners put the version
/// token at different positions. WSL short-circuits the bash lookup since
/// `bash --version` inside WSL reports the Windows-side build oddly.
pub fn shell_version(os: Os) -> Result<String> {
    if !matches!(os, Os::MacOs | Os::Linux) {
        return Err(QfetchError::UnsupportedPlatform(os.label().to_string()));
    }

    let shell = env::var("SHELL").unwrap_or_default();
    if shell.contains("zsh") {
        let banner = run_command("zsh", &["--version"])?;
        parsing::version_token(&banner, 1)
    } else if shell.contains("bash") {
        if is_wsl(os) {
            return Ok("bash (WSL)".to_string());
        }
        let banner = run_command("bash", &["--version"])?;
        Ok(format!("bash {}", parsing::version_token(&banner, 3)?))
    } else {
        Err(QfetchError::UnsupportedShell(shell))
    }
}

fn is_wsl(os: Os) -> bool {
    os == Os::Linux
        && kernel_release()
            .map(|release| release.to_lowercase().contains("microsoft"))
            .unwrap_or(false)
}

/// How long the system has been up, parsed from the `uptime` command.
pub fn uptime(os: Os) -> Result<Uptime> {
    match os {
        Os::MacOs | Os::Linux => {
            let output = run_command("uptime", &[])?;
            parsing::parse_uptime(&output)
        }
        other => Err(QfetchError::UnsupportedPlatform(other.label().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_probes_fail() {
        assert!(shell_version(Os::Windows).is_err());
        assert!(uptime(Os::Windows).is_err());
    }
}
