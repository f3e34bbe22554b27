//! Command line surface

use crate::art::ArtChoice;
use crate::display::InfoStyle;
use crate::theme::Theme;
use clap::Parser;

const ABOUT: &str = "qfetch is a simple, no-fuss CLI tool that gives you a clean snapshot of \
your system info on Linux and macOS. It shows details like your OS, architecture, packages, \
shell version, terminal type, memory usage, disk usage, uptime, and even throws in some fun \
ASCII art for good measure.\n\n(Designed/Tested for Ubuntu, Debian, and MacOS)";

#[derive(Parser, Debug)]
#[clap(name = "qfetch", version, about = ABOUT)]
pub struct Cli {
    /// Select the ASCII art you want qfetch to use
    #[clap(long, short = 'a', value_enum)]
    pub art: Option<ArtChoice>,

    /// Select how you want qfetch to present your sysinfo
    #[clap(long = "sys-info", short = 's', value_enum)]
    pub sys_info: Option<InfoStyle>,

    /// Select a color theme for side bars and symbols
    #[clap(long, short = 't', value_enum)]
    pub theme: Option<Theme>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_with_their_documented_values() {
        let cli = Cli::try_parse_from([
            "qfetch",
            "--art",
            "Playboy-Bunny",
            "--sys-info",
            "sys_info_no_nerd_font",
            "--theme",
            "cyan",
        ])
        .unwrap();
        assert_eq!(cli.art, Some(ArtChoice::PlayboyBunny));
        assert_eq!(cli.sys_info, Some(InfoStyle::NoNerdFont));
        assert_eq!(cli.theme, Some(Theme::Cyan));
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from(["qfetch", "-a", "Random-Art", "-t", "red"]).unwrap();
        assert_eq!(cli.art, Some(ArtChoice::RandomArt));
        assert_eq!(cli.theme, Some(Theme::Red));
        assert_eq!(cli.sys_info, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["qfetch", "--art", "Ferris"]).is_err());
        assert!(Cli::try_parse_from(["qfetch", "--theme", "octarine"]).is_err());
    }
}
