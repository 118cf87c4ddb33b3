use anyhow::{bail, Context, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell_str = matches
        .get_one::<String>("shell")
        .context("shell argument is required")?;
    let shell = parse_shell(shell_str)?;

    generate(shell, cli, "qinfo", &mut io::stdout());
    Ok(())
}

pub fn parse_shell(name: &str) -> Result<Shell> {
    let shell = match name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => bail!(
            "Unsupported shell: {} (supported: bash, zsh, fish, powershell, elvish)",
            name
        ),
    };
    Ok(shell)
}
