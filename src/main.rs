use clap::Parser;
use log::debug;
use qfetch::cli::Cli;
use qfetch::collectors::platform::{self, Os};
use qfetch::{art, collect_host_facts, display};
use std::process;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("[!] {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> qfetch::Result<()> {
    let os = platform::detect_os()?;
    if os == Os::Windows {
        println!("[!] Oops! qfetch doesn't support Windows yet.");
    }

    let theme = cli.theme.unwrap_or_default();
    let style = cli.sys_info.unwrap_or_default();
    let art_block = art::select_art(cli.art);

    debug!("collecting host facts for {}", os.label());
    let facts = collect_host_facts(os)?;

    let info = display::info_lines(&facts, os, style, theme);
    for line in display::render(&art_block, &info, theme) {
        println!("{}", line);
    }
    Ok(())
}
