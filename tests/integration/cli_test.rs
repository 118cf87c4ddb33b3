// Tests for command-line parsing and flag overrides

use qinfo::cli::build_cli;
use qinfo::commands::info::resolve_config;
use std::fs;
use tempfile::TempDir;

fn config_file(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    let path = path.to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_no_flags_keeps_file_toggles() {
    let (_dir, path) = config_file("display_kernel = false\n");
    let matches = build_cli().get_matches_from(["qinfo", "--config", path.as_str()]);
    let config = resolve_config(&matches).unwrap();

    assert!(!config.display_kernel);
    assert!(config.display_cpu);
}

#[test]
fn test_section_flags_select_only_those_sections() {
    let (_dir, path) = config_file("");
    let matches =
        build_cli().get_matches_from(["qinfo", "--config", path.as_str(), "--memory", "--uptime"]);
    let config = resolve_config(&matches).unwrap();

    assert!(config.display_memory);
    assert!(config.display_uptime);
    assert!(!config.display_cpu);
    assert!(!config.display_hostname);
    assert!(!config.display_rootfs_birthday);
}

#[test]
fn test_unit_and_date_flags_override_file() {
    let (_dir, path) = config_file("use_gigabytes = true\n");
    let matches = build_cli().get_matches_from(["qinfo", "-c", path.as_str(), "-k", "--iso-dates"]);
    let config = resolve_config(&matches).unwrap();

    assert!(!config.use_gigabytes);
    assert!(config.dates_as_iso);

    let (_dir, path) = config_file("use_gigabytes = false\n");
    let matches = build_cli().get_matches_from(["qinfo", "-c", path.as_str(), "--gigabytes"]);
    assert!(resolve_config(&matches).unwrap().use_gigabytes);
}

#[test]
fn test_config_subcommand_sees_global_config_flag() {
    let (_dir, path) = config_file("dates_as_iso = true\n");
    let matches = build_cli().get_matches_from(["qinfo", "config", "show", "--config", path.as_str()]);

    let (_, config_matches) = matches.subcommand().unwrap();
    let (name, show_matches) = config_matches.subcommand().unwrap();
    assert_eq!(name, "show");
    assert!(resolve_config(show_matches).unwrap().dates_as_iso);
}

#[test]
fn test_bad_config_file_is_reported() {
    let (_dir, path) = config_file("display_gpu = true\n");
    let matches = build_cli().get_matches_from(["qinfo", "--config", path.as_str()]);
    let err = resolve_config(&matches).unwrap_err();

    assert_eq!(qinfo::commands::exit_code(&err), qinfo::commands::EXIT_FAILURE);
}
