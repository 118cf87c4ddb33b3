use qinfo::core::system_info::types::MemoryUnit;
use qinfo::{Config, QinfoError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.display_cpu);
    assert!(config.display_rootfs_birthday);
    assert!(!config.dates_as_iso);
    assert_eq!(config.memory_unit(), MemoryUnit::Gigabytes);
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "\n  \n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        display_hostname: false,
        use_gigabytes: false,
        dates_as_iso: true,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_config_malformed_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "display_cpu = \"yes please\"\n").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(QinfoError::Config(_))));
}

fn run_config_command(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["qinfo", "config"];
    argv.extend_from_slice(args);
    let matches = qinfo::cli::build_cli().get_matches_from(argv);
    let (_, config_matches) = matches.subcommand().unwrap();
    qinfo::commands::config::execute(config_matches)
}

#[test]
fn test_config_init_writes_commented_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("qinfo").join("config.toml");
    let path_arg = path.to_string_lossy().to_string();

    run_config_command(&["init", "--config", &path_arg]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("# qinfo configuration"));
    assert!(contents.contains("# Show the CPU model\ndisplay_cpu = true\n"));
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let path_arg = path.to_string_lossy().to_string();
    fs::write(&path, "display_kernel = false\n").unwrap();

    let err = run_config_command(&["init", "--config", &path_arg]).unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "display_kernel = false\n");

    run_config_command(&["init", "--force", "--config", &path_arg]).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}
