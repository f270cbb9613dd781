//! Target directory resolution against a fake environment.

use ide_config_installer::platform::{
    folder_name, resolve_target_directory, Environment, OsFamily, PlatformTarget,
};
use std::collections::HashMap;
use std::path::PathBuf;

struct FakeEnv {
    host: String,
    vars: HashMap<String, String>,
}

impl FakeEnv {
    fn new(host: &str, vars: &[(&str, &str)]) -> Self {
        Self {
            host: host.to_string(),
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Environment for FakeEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn host_name(&self) -> String {
        self.host.clone()
    }
}

#[test]
fn test_folder_name_formatting() {
    assert_eq!(folder_name("WebIde", "8"), "WebIde08");
    assert_eq!(folder_name("WebIde", "12"), "WebIde12");
    assert_eq!(folder_name("WebIde", ""), "WebIde08");
}

#[test]
fn test_linux_uses_hidden_folder_in_home() {
    let env = FakeEnv::new("Linux", &[("HOME", "/home/dev")]);
    let dir = resolve_target_directory(&env, "8").expect("resolve linux target");
    assert_eq!(dir, PathBuf::from("/home/dev/.WebIde08"));
    assert!(!dir.to_string_lossy().contains('~'));
}

#[test]
fn test_macos_uses_library_preferences() {
    let env = FakeEnv::new("Darwin", &[("HOME", "/Users/dev")]);
    let target = PlatformTarget::detect(&env, "WebIde", "10").expect("resolve mac target");
    assert_eq!(target.os_family, OsFamily::MacOs);
    assert_eq!(
        target.install_directory,
        PathBuf::from("/Users/dev/Library/Preferences/WebIde10")
    );
}

#[test]
fn test_unknown_unix_follows_mac_layout() {
    let env = FakeEnv::new("FreeBSD", &[("HOME", "/usr/home/dev")]);
    let target = PlatformTarget::detect(&env, "WebIde", "9").expect("resolve other target");
    assert_eq!(target.os_family, OsFamily::Other);
    assert_eq!(
        target.install_directory,
        PathBuf::from("/usr/home/dev/Library/Preferences/WebIde09")
    );
}

#[test]
fn test_windows_ignores_home() {
    let env = FakeEnv::new(
        "Windows NT",
        &[
            ("HOME", "/should/not/be/used"),
            ("HOMEDRIVE", "D:"),
            ("HOMEPATH", "\\Users\\dev"),
        ],
    );
    let target = PlatformTarget::detect(&env, "WebIde", "8").expect("resolve windows target");
    assert_eq!(target.os_family, OsFamily::Windows);
    assert_eq!(
        target.install_directory,
        PathBuf::from("D:\\Users\\dev\\.WebIde08")
    );
}

#[test]
fn test_windows_without_homepath_fails() {
    let env = FakeEnv::new("windows", &[("HOMEDRIVE", "C:")]);
    let err = resolve_target_directory(&env, "8").unwrap_err();
    assert!(err.to_string().contains("HOMEPATH"));
}

#[test]
fn test_custom_prefix() {
    let env = FakeEnv::new("linux", &[("HOME", "/home/dev")]);
    let target = PlatformTarget::detect(&env, "PhpStorm", "2").expect("resolve target");
    assert_eq!(target.install_directory, PathBuf::from("/home/dev/.PhpStorm02"));
}
