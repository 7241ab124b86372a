use std::fs;

use hexwatch_common::error::ConfigError;
use hexwatch_common::network::target::Target;
use hexwatch_core::loader;

#[test]
fn default_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");

    loader::write_default(&path).unwrap();
    let targets = loader::load_targets(&path).unwrap();

    assert_eq!(
        targets,
        vec![
            Target::new("1", "Google DNS", "8.8.8.8", 53, "DNS"),
            Target::new("2", "Cloudflare DNS", "1.1.1.1", 80, "Portal"),
        ]
    );
}

#[test]
fn truncated_file_fails_without_targets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");
    fs::write(&path, "1\nGoogle DNS\n8.8.8.8\n53\n").unwrap();

    let result = loader::load_targets(&path);

    assert!(matches!(result, Err(ConfigError::Malformed { .. })));
}

#[test]
fn directory_in_place_of_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();

    let result = loader::load_targets(dir.path());

    assert!(matches!(result, Err(ConfigError::Io { .. })), "got {result:?}");
}
