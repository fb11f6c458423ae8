use std::path::PathBuf;

use ember::config::Config;

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    list.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn test_config_default_directory() {
    let cfg = Config::from_args(args(&[]));
    assert_eq!(cfg.directory, PathBuf::from("."));
}

#[test]
fn test_config_directory_flag() {
    let cfg = Config::from_args(args(&["--directory", "/tmp/data"]));
    assert_eq!(cfg.directory, PathBuf::from("/tmp/data"));
}

#[test]
fn test_config_directory_flag_among_other_args() {
    let cfg = Config::from_args(args(&["--verbose", "--directory", "/srv/files", "extra"]));
    assert_eq!(cfg.directory, PathBuf::from("/srv/files"));
}

#[test]
fn test_config_trailing_directory_flag_without_value() {
    let cfg = Config::from_args(args(&["--directory"]));
    assert_eq!(cfg.directory, PathBuf::from("."));
}

#[test]
fn test_config_listen_addr_from_env() {
    // Set and restore in one test to avoid racing parallel tests
    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::from_args(args(&[]));
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::from_args(args(&["--directory", "/tmp"]));
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.directory, cfg2.directory);
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}
