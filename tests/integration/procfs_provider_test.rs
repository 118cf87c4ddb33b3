// Tests for the procfs provider against fake /proc and /etc trees

use qinfo::platform::{FactsProvider, LinuxProvider};
use qinfo::QinfoError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CPUINFO: &str = "processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz
siblings\t: 12
cpu cores\t: 6

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz
siblings\t: 12
cpu cores\t: 6
";

const MEMINFO: &str = "MemTotal:       16303464 kB
MemFree:         1021840 kB
MemAvailable:    9876540 kB
";

const OS_RELEASE: &str = "NAME=\"Fedora Linux\"
VERSION=\"40 (Workstation Edition)\"
PRETTY_NAME=\"Fedora Linux 40 (Workstation Edition)\"
";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fake_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "proc/cpuinfo", CPUINFO);
    write(root, "proc/meminfo", MEMINFO);
    write(root, "etc/os-release", OS_RELEASE);
    write(root, "proc/sys/kernel/hostname", "buildbox\n");
    write(root, "proc/sys/kernel/ostype", "Linux\n");
    write(root, "proc/sys/kernel/osrelease", "6.8.9-300.fc40.x86_64\n");
    write(root, "proc/uptime", "93784.52 180000.11\n");
    dir
}

#[test]
fn test_reads_every_fact_from_fake_root() {
    let dir = fake_root();
    let provider = LinuxProvider::with_root(dir.path());

    assert_eq!(provider.core_count().unwrap(), 6);
    assert_eq!(provider.thread_count().unwrap(), 12);
    assert_eq!(
        provider.cpu_model().unwrap().as_str(),
        "Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz"
    );
    assert_eq!(provider.total_memory().unwrap(), 16303464);
    assert_eq!(provider.available_memory().unwrap(), 9876540);
    assert_eq!(provider.hostname().unwrap().as_str(), "buildbox");
    assert_eq!(
        provider.os_name().unwrap().as_str(),
        "Fedora Linux 40 (Workstation Edition)"
    );
    assert_eq!(
        provider.kernel_version().unwrap().as_str(),
        "Linux 6.8.9-300.fc40.x86_64"
    );
    assert_eq!(provider.uptime().unwrap(), 93784);
}

#[test]
fn test_missing_label_returns_field_not_found() {
    let dir = fake_root();
    write(dir.path(), "proc/meminfo", "MemTotal:       16303464 kB\n");
    let provider = LinuxProvider::with_root(dir.path());

    assert!(matches!(
        provider.available_memory(),
        Err(QinfoError::FieldNotFound { .. })
    ));
    assert_eq!(provider.total_memory().unwrap(), 16303464);
}

#[test]
fn test_unopenable_source_is_distinct_from_zero() {
    let dir = fake_root();
    write(dir.path(), "proc/cpuinfo", "cpu cores\t: 0\nsiblings\t: 0\n");
    let provider = LinuxProvider::with_root(dir.path());
    assert_eq!(provider.core_count().unwrap(), 0);

    fs::remove_file(dir.path().join("proc/cpuinfo")).unwrap();
    assert!(matches!(
        provider.core_count(),
        Err(QinfoError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_long_hostname_is_truncated() {
    let dir = fake_root();
    write(dir.path(), "proc/sys/kernel/hostname", &"h".repeat(300));
    let provider = LinuxProvider::with_root(dir.path());

    let hostname = provider.hostname().unwrap();
    assert_eq!(hostname.as_str().len(), 256);
    assert!(hostname.is_truncated());
}
