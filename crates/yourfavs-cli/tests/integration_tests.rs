//! Integration tests for yourfavs-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `yourfavs` command isolated from the caller's config and environment.
fn yourfavs(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yourfavs").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("YOURFAVS__REDIRECT__DEFAULT_PATH")
        .env_remove("YOURFAVS__OUTPUT__FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("redirect"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_resolve_accepts_internal_path() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["resolve", "  /lists/42?sort=new  "])
        .assert()
        .success()
        .stdout("/lists/42?sort=new\n");
}

#[test]
fn test_resolve_falls_back_to_dashboard() {
    let temp = TempDir::new().unwrap();
    for hostile in [
        "//evil.com",
        "https://evil.com",
        "javascript:alert(1)",
        "/%2f%2fevil.com",
        "/?next=data:text/html,x",
    ] {
        yourfavs(&temp)
            .args(["resolve", hostile])
            .assert()
            .success()
            .stdout("/dashboard\n");
    }
}

#[test]
fn test_resolve_without_candidate_uses_default() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["resolve", "--flow", "signup"])
        .assert()
        .success()
        .stdout("/dashboard\n");
}

#[test]
fn test_suspicious_fallback_is_logged() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["resolve", "//evil.com", "--flow", "password-reset"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Rejected redirect target"))
        .stderr(predicate::str::contains("protocol-relative"));
}

#[test]
fn test_default_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".yourfavs.toml"),
        "[redirect]\ndefault_path = \"/home\"\n",
    )
    .unwrap();

    yourfavs(&temp)
        .args(["resolve", "//evil.com"])
        .assert()
        .success()
        .stdout("/home\n");

    yourfavs(&temp)
        .args(["resolve", "//evil.com", "--default", "/welcome"])
        .assert()
        .success()
        .stdout("/welcome\n");
}

#[test]
fn test_environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".yourfavs.toml"),
        "[redirect]\ndefault_path = \"/home\"\n",
    )
    .unwrap();

    yourfavs(&temp)
        .env("YOURFAVS__REDIRECT__DEFAULT_PATH", "/from-env")
        .args(["resolve"])
        .assert()
        .success()
        .stdout("/from-env\n");
}

#[test]
fn test_resolve_json_output() {
    let temp = TempDir::new().unwrap();
    let output = yourfavs(&temp)
        .args(["--output-format", "json", "resolve", "/%2F/evil.com"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["flow"], "login");
    assert_eq!(json["status"], "fallback");
    assert_eq!(json["reason"], "protocol-relative");
    assert_eq!(json["location"], "/dashboard");
}

#[test]
fn test_config_json_format_applies_to_logs() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".yourfavs.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = yourfavs(&temp).args(["resolve", "//evil.com"]).output().unwrap();
    assert!(output.status.success());

    let decision: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(decision["location"], "/dashboard");

    let stderr = String::from_utf8(output.stderr).unwrap();
    let line = stderr.lines().find(|l| !l.trim().is_empty()).unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "WARN");
    assert_eq!(event["fields"]["message"], "Rejected redirect target");
}

#[test]
fn test_check_reports_each_candidate() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["check", "/dashboard", "//evil.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/dashboard\""))
        .stdout(predicate::str::contains("protocol-relative"))
        .stdout(predicate::str::contains("2 checked, 1 rejected"));
}

#[test]
fn test_quiet_check_prints_every_verdict() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["-q", "check", "/ok", "//evil.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{2713} \"/ok\"\n"))
        .stdout(predicate::str::contains("\u{2717} \"//evil.com\" (protocol-relative"))
        .stdout(predicate::str::contains("checked").not());
}

#[test]
fn test_check_reads_stdin() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .arg("check")
        .write_stdin("/a\n/b\n/\\evil.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("backslash-authority"))
        .stdout(predicate::str::contains("3 checked, 1 rejected"));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    let output = yourfavs(&temp)
        .args(["--output-format", "json", "check", " /x ", "/%zz"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["valid"], true);
    assert_eq!(json[0]["target"], "/x");
    assert_eq!(json[1]["valid"], false);
    assert_eq!(json[1]["reason"], "malformed-encoding");
}

#[test]
fn test_quiet_still_prints_location() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["-q", "resolve", "/lists"])
        .assert()
        .success()
        .stdout("/lists\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_init_local_then_config_get() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = fs::read_to_string(temp.path().join(".yourfavs.toml")).unwrap();
    assert!(written.contains("default_path = \"/dashboard\""));

    yourfavs(&temp)
        .args(["config", "get", "redirect.default_path"])
        .assert()
        .success()
        .stdout("/dashboard\n");
}

#[test]
fn test_init_global_writes_platform_config() {
    let temp = TempDir::new().unwrap();
    let written = temp.path().join("config").join("yourfavs").join("config.toml");
    assert!(!written.exists());

    yourfavs(&temp).arg("init").assert().success();

    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains("default_path = \"/dashboard\""));

    yourfavs(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", written.display()));

    yourfavs(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_list_shows_every_key() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redirect.default_path = \"/dashboard\""))
        .stdout(predicate::str::contains("output.no_color"))
        .stdout(predicate::str::contains("output.format"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    yourfavs(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yourfavs"));
}
