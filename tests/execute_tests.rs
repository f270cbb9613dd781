//! The application shell with an injected environment.

use ide_config_installer::args::parse;
use ide_config_installer::commands::{execute, Outcome};
use ide_config_installer::platform::Environment;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct HomeEnv<'a> {
    home: &'a Path,
}

impl Environment for HomeEnv<'_> {
    fn var(&self, key: &str) -> Option<String> {
        (key == "HOME").then(|| self.home.display().to_string())
    }

    fn host_name(&self) -> String {
        "Linux".to_string()
    }
}

#[test]
fn test_usage_does_not_install() {
    let home = TempDir::new().expect("create home tempdir");
    let env = HomeEnv { home: home.path() };

    for tokens in [vec![], vec!["foo"], vec!["foo", "install"]] {
        let outcome = execute(&parse(tokens), &env).expect("usage is not an error");
        assert_eq!(outcome, Outcome::ShowedUsage);
    }
    assert_eq!(fs::read_dir(home.path()).expect("read home").count(), 0);
}

#[test]
fn test_install_from_discovered_local_source() {
    let home = TempDir::new().expect("create home tempdir");
    let source = TempDir::new().expect("create source tempdir");
    fs::create_dir_all(source.path().join("config/codestyles")).expect("create source dirs");
    fs::write(source.path().join("config/codestyles/SMS.xml"), "<code_scheme/>")
        .expect("write style");
    let target = home.path().join(".WebIde09");
    fs::create_dir(&target).expect("create target");

    let env = HomeEnv { home: home.path() };
    let args = parse([
        "install",
        "-i",
        "9",
        "--source",
        source.path().to_str().expect("utf-8 temp path"),
    ]);

    let Outcome::Installed(report) = execute(&args, &env).expect("install should succeed")
    else {
        panic!("expected an install");
    };

    assert_eq!(report.files_written, 1);
    assert_eq!(
        report.lines,
        vec![format!(
            "config/codestyles/SMS.xml => {}/config/codestyles/SMS.xml",
            target.display()
        )]
    );
    assert_eq!(
        fs::read_to_string(target.join("config/codestyles/SMS.xml")).expect("read installed"),
        "<code_scheme/>"
    );
}

#[test]
fn test_missing_target_stops_before_loading() {
    let home = TempDir::new().expect("create home tempdir");
    let env = HomeEnv { home: home.path() };

    // The source does not exist either; the target check comes first
    let args = parse(["install", "--source", "/nonexistent/res"]);
    let err = execute(&args, &env).unwrap_err();

    assert!(err.to_string().contains("Target directory does not exist"));
}
