use anyhow::Result;
use colored::*;

use qinfo::cli::build_cli;
use qinfo::commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(commands::exit_code(&e));
    }
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    qinfo::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("no-color") || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    match matches.subcommand() {
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version::execute(),
        _ => commands::info::execute(&matches),
    }
}
