//! Binary-level tests for the xibugo command
//!
//! Each test runs the built binary with a cleared environment and a
//! scratch configuration home, so nothing on the host leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn xibugo(home: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xibugo"));
    cmd.env_clear()
        .env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run xibugo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_whoami_without_configuration_fails() {
    let home = TempDir::new().unwrap();
    let output = xibugo(home.path(), &["whoami"], &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("account id is required"));
}

#[test]
fn test_whoami_prints_resolved_configuration() {
    let home = TempDir::new().unwrap();
    let output = xibugo(
        home.path(),
        &["whoami", "--account", "1010"],
        &[("XIBUGO_ACCESS_TOKEN", "env-token"), ("XIBUGO_SANDBOX", "true")],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("account: 1010"));
    assert!(out.contains("access-token: env-token"));
    assert!(out.contains("base-url: https://api.sandbox.xibugo.com"));
    assert!(out.contains("sandbox: true"));
}

#[test]
fn test_profile_file_is_discovered() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("xibugo");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("staging.yaml"),
        "account: \"7\"\naccess-token: file-token\nbase-url: http://localhost:9000\n",
    )
    .unwrap();

    let output = xibugo(
        home.path(),
        &["webhooks", "list"],
        &[("XIBUGO_PROFILE", "staging")],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("base-url: http://localhost:9000"));
}

#[test]
fn test_show_unknown_property_is_not_found() {
    let home = TempDir::new().unwrap();
    let output = xibugo(home.path(), &["config", "show", "bogus"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Not found"));
}

#[test]
fn test_base_url_and_sandbox_conflict() {
    let home = TempDir::new().unwrap();
    let output = xibugo(
        home.path(),
        &["whoami", "--base-url", "http://localhost", "--sandbox"],
        &[],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot be used with"));
}

#[test]
fn test_set_then_show_round_trip() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("custom.yaml");
    let file_arg = file.to_str().unwrap();

    let output = xibugo(home.path(), &["-c", file_arg, "config", "set", "sandbox", "true"], &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = xibugo(home.path(), &["-c", file_arg, "config", "show", "sandbox"], &[]);
    assert_eq!(stdout(&output).trim(), "true");

    let output = xibugo(home.path(), &["-c", file_arg, "config", "set", "sandbox", "maybe"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not a boolean"));

    let output = xibugo(home.path(), &["-c", file_arg, "config", "show", "sandbox"], &[]);
    assert_eq!(stdout(&output).trim(), "true");
}

#[test]
fn test_set_without_configuration_file_fails() {
    let home = TempDir::new().unwrap();
    let output = xibugo(home.path(), &["config", "set", "base-url", "http://x"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no configuration file in use"));
}

#[test]
fn test_version_needs_no_configuration() {
    let home = TempDir::new().unwrap();
    let output = xibugo(home.path(), &["version"], &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("https://api.xibugo.com"));
    assert!(out.contains("v2"));
}

#[test]
fn test_init_refuses_without_terminal() {
    let home = TempDir::new().unwrap();
    let output = xibugo(home.path(), &["config", "init"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("interactive terminal"));
    assert!(!home.path().join("xibugo").exists());
}

#[test]
fn test_set_leaves_unparseable_file_alone() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("broken.yaml");
    let original = "account: \"1010\"\naccess-token: secret-token\nbase-url: [oops\n";
    fs::write(&file, original).unwrap();
    let file_arg = file.to_str().unwrap();

    let output = xibugo(home.path(), &["-c", file_arg, "config", "set", "sandbox", "true"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}
