// Command-line definition

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn section_flag(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("qinfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Quickly fetch and display system information")
        .long_about(
            "Quickly fetch and display system information\n\n\
             Without section flags, the sections enabled in the config file are shown.\n\
             With one or more section flags, only those sections are shown.\n\n\
             The rootfs line is on by default and is required: when the root filesystem\n\
             does not record a birth time, qinfo exits with code 2. Set\n\
             display_rootfs_birthday = false in the config file, or pick sections with\n\
             flags, to run on such filesystems.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Use this config file instead of the default location")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored labels")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(section_flag("cpu", "Show the CPU model"))
        .arg(section_flag(
            "extra-cpu",
            "Show the CPU model with core and thread counts",
        ))
        .arg(section_flag("memory", "Show used and total memory"))
        .arg(section_flag("hostname", "Show the hostname"))
        .arg(section_flag("os", "Show the operating system name"))
        .arg(section_flag("kernel", "Show the kernel name and release"))
        .arg(section_flag("uptime", "Show time since boot"))
        .arg(section_flag(
            "rootfs",
            "Show the root filesystem creation date",
        ))
        .arg(
            Arg::new("kilobytes")
                .short('k')
                .long("kilobytes")
                .help("Show memory in kilobytes")
                .action(ArgAction::SetTrue)
                .conflicts_with("gigabytes"),
        )
        .arg(
            Arg::new("gigabytes")
                .short('g')
                .long("gigabytes")
                .help("Show memory in gigabytes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("iso-dates")
                .long("iso-dates")
                .help("Show dates as YYYY-MM-DD")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the config file")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(Command::new("show").about("Print the loaded configuration"))
                .subcommand(
                    Command::new("init")
                        .about("Write a config file with default settings")
                        .arg(
                            Arg::new("force")
                                .short('f')
                                .long("force")
                                .help("Overwrite an existing config file")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}
