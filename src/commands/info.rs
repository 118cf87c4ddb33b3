use crate::core::config::{Config, SectionSelection};
use crate::core::system_info::collector;
use crate::platform::detect_provider;
use crate::ui::system_formatters;
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io;
use std::path::PathBuf;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let provider = detect_provider()?;

    let facts = collector::collect_system_info(provider.as_ref(), &config)?;
    let lines = system_formatters::build_report(&facts, &config);

    let stdout = io::stdout();
    system_formatters::print_report(&mut stdout.lock(), &lines)
        .context("Failed to write report")?;

    Ok(())
}

/// Load the config file (default location or `--config`) and apply flag
/// overrides on top.
pub fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let selection = SectionSelection {
        cpu: flag(matches, "cpu"),
        extra_cpu: flag(matches, "extra-cpu"),
        memory: flag(matches, "memory"),
        hostname: flag(matches, "hostname"),
        os: flag(matches, "os"),
        kernel: flag(matches, "kernel"),
        uptime: flag(matches, "uptime"),
        rootfs: flag(matches, "rootfs"),
    };
    config.apply_selection(&selection);

    if flag(matches, "kilobytes") {
        config.use_gigabytes = false;
    } else if flag(matches, "gigabytes") {
        config.use_gigabytes = true;
    }

    if flag(matches, "iso-dates") {
        config.dates_as_iso = true;
    }

    Ok(config)
}

// Flags that are not defined on this command read as false
fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
