use crate::commands::info;
use crate::core::Config;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("path", sub_matches)) => handle_path(sub_matches),
        Some(("show", sub_matches)) => handle_show(sub_matches),
        Some(("init", sub_matches)) => handle_init(sub_matches),
        _ => {
            println!("Use 'qinfo config --help' for more information.");
            Ok(())
        }
    }
}

fn target_path(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::get_config_path()?),
    }
}

fn handle_path(matches: &ArgMatches) -> Result<()> {
    let path = target_path(matches)?;
    println!("{}", path.display());
    Ok(())
}

/// Print the configuration as loaded
fn handle_show(matches: &ArgMatches) -> Result<()> {
    let config = info::resolve_config(matches)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn handle_init(matches: &ArgMatches) -> Result<()> {
    let path = target_path(matches)?;
    let force = matches.get_flag("force");

    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    println!(
        "{} {}",
        "Wrote default configuration to".green(),
        path.display().to_string().cyan().bold()
    );
    Ok(())
}
