//! Info line construction and side-by-side rendering

use crate::art::ArtBlock;
use crate::collectors::platform::Os;
use crate::data::HostFacts;
use crate::theme::{self, Theme};
use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

/// How the fact list is presented: nerd-font glyphs with a themed side bar,
/// or plain labels for terminals without a patched font.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoStyle {
    #[default]
    #[value(name = "sys_info_default")]
    Default,
    #[value(name = "sys_info_no_nerd_font")]
    NoNerdFont,
}

/// Build the full list of info lines: the eight facts in the chosen style,
/// a separator blank, then the two palette preview rows.
pub fn info_lines(facts: &HostFacts, os: Os, style: InfoStyle, theme: Theme) -> Vec<String> {
    let mut lines = match style {
        InfoStyle::Default => {
            let bar = theme::bar(theme);
            let symbol = |glyph: &str| theme::colorize(glyph, theme);
            let os_glyph = if os == Os::MacOs { "\u{f8ff}" } else { "\u{f31a}" };
            vec![
                format!("{}  {}  {}", symbol(os_glyph), bar, facts.os_name),
                format!("{}  {}  {}", symbol("\u{ec19}"), bar, facts.architecture),
                format!("{}  {}  {}", symbol("\u{eb29}"), bar, facts.package_count),
                format!("{}  {}  {}", symbol("\u{e614}"), bar, facts.shell_version),
                format!("{}  {}  {}", symbol("\u{f489}"), bar, facts.terminal),
                format!("{}  {}  {}", symbol("\u{efc5}"), bar, facts.memory),
                format!("{}  {}  {}", symbol("\u{f0a0}"), bar, facts.disk),
                format!("{}  {}  {}", symbol("\u{e641}"), bar, facts.uptime.formatted()),
            ]
        }
        InfoStyle::NoNerdFont => vec![
            format!("OS: {}", facts.os_name),
            format!("Arch: {}", facts.architecture),
            format!("Packages: {}", facts.package_count),
            format!("Shell: {}", facts.shell_version),
            format!("Term: {}", facts.terminal),
            format!("Memory: {}", facts.memory),
            format!("Disk: {}", facts.disk),
            format!("Uptime: {}", facts.uptime.formatted()),
        ],
    };

    lines.push(String::new());
    lines.extend(theme::palette_rows());
    lines
}

/// Merge art and info lines side by side.
///
/// The left column is the themed art line (empty when the art runs out),
/// right-padded to the art's column width; the right column is appended
/// as-is. Nothing is ever truncated or wrapped.
pub fn render(art: &ArtBlock, info: &[String], theme: Theme) -> Vec<String> {
    let width = art.column_width();
    let rows = art.lines.len().max(info.len());

    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let art_line = art.lines.get(i).copied().unwrap_or("");
        let spacing = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(art_line)));
        let info_line = info.get(i).map(String::as_str).unwrap_or("");
        out.push(format!(
            "{}{}{}",
            theme::colorize(art_line, theme),
            spacing,
            info_line
        ));
    }
    out
}
