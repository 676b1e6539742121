//! Integration tests for the `bigip` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! error handling, and a few end-to-end runs against a mock device.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `bigip` binary with env isolation.
///
/// Clears all `BIGIP_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn bigip_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("bigip");
    cmd.env("HOME", "/tmp/bigip-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/bigip-cli-test-nonexistent")
        .env_remove("BIGIP_PROFILE")
        .env_remove("BIGIP_HOST")
        .env_remove("BIGIP_USERNAME")
        .env_remove("BIGIP_PASSWORD")
        .env_remove("BIGIP_OUTPUT")
        .env_remove("BIGIP_INSECURE")
        .env_remove("BIGIP_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// A `bigip` command pointed at a mock device with basic credentials.
fn device_cmd(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = bigip_cmd();
    cmd.args(["--host", &server.uri(), "--username", "admin"])
        .env("BIGIP_PASSWORD", "admin-pass");
    cmd
}

/// Write `contents` as the config file under a fresh home directory and
/// point the command at it.
fn with_config(cmd: &mut assert_cmd::Command, contents: &str) -> tempfile::TempDir {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("bigip");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), contents).unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path());
    home
}

/// Run a blocking command without stalling the mock server's runtime.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = bigip_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    bigip_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("BIG-IP")
            .and(predicate::str::contains("data-groups"))
            .and(predicate::str::contains("virtual-addresses"))
            .and(predicate::str::contains("monitors"))
            .and(predicate::str::contains("folders"))
            .and(predicate::str::contains("policies")),
    );
}

#[test]
fn test_version_flag() {
    bigip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bigip"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    bigip_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    bigip_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = bigip_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_data_groups_list_no_config() {
    bigip_cmd()
        .args(["data-groups", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("host")),
        );
}

#[test]
fn test_host_without_credentials() {
    let output = bigip_cmd()
        .args(["--host", "10.0.0.10", "folders", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(text.contains("credentials"), "{text}");
}

#[test]
fn test_unknown_profile() {
    let output = bigip_cmd()
        .args(["--profile", "nope", "folders", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("nope"));
}

#[test]
fn test_config_show_no_config() {
    // A missing config file loads as defaults.
    bigip_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_invalid_output_format() {
    let output = bigip_cmd()
        .args(["--output", "invalid", "folders", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_monitor_kind() {
    let output = bigip_cmd()
        .args(["monitors", "list", "smtp-ish"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_virtual_address_set_rejects_non_boolish() {
    let output = bigip_cmd()
        .args(["virtual-addresses", "set", "/Common/10.0.0.10", "--arp", "maybe"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_virtual_addresses_subcommands_exist() {
    bigip_cmd()
        .args(["virtual-addresses", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("set")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    bigip_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles")),
        );
}

// ── Against a mock device ───────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_folders_list_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/folder"))
        .and(basic_auth("admin", "admin-pass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "name": "Common", "fullPath": "/Common", "hidden": "false", "noRefCheck": "false" },
                { "name": "app", "partition": "Common", "fullPath": "/Common/app", "hidden": "true" }
            ]
        })))
        .mount(&server)
        .await;

    let mut cmd = device_cmd(&server);
    cmd.args(["--output", "json", "folders", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body[1]["fullPath"], "/Common/app");
    assert_eq!(body[1]["hidden"], "true");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_data_groups_plain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/data-group/internal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "name": "allowed_hosts", "fullPath": "/Common/allowed_hosts", "type": "string" },
                { "name": "blocked_nets", "fullPath": "/Common/blocked_nets", "type": "ip" }
            ]
        })))
        .mount(&server)
        .await;

    let mut cmd = device_cmd(&server);
    cmd.args(["-o", "plain", "data-groups", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "/Common/allowed_hosts\n/Common/blocked_nets\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_virtual_address_set_sends_literals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/virtual-address/~Common~10.0.0.10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "10.0.0.10",
            "fullPath": "/Common/10.0.0.10",
            "arp": "enabled",
            "enabled": "yes",
            "icmpEcho": "enabled",
            "floating": "disabled"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/mgmt/tm/ltm/virtual-address/~Common~10.0.0.10"))
        .and(body_partial_json(json!({
            "arp": "enabled",
            "enabled": "no",
            "icmpEcho": "enabled",
            "floating": "disabled"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "10.0.0.10",
            "fullPath": "/Common/10.0.0.10",
            "arp": "enabled",
            "enabled": "no"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = device_cmd(&server);
    cmd.args([
        "-o",
        "json-compact",
        "virtual-addresses",
        "set",
        "/Common/10.0.0.10",
        "--enabled",
        "no",
    ]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["enabled"], "no");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/policy/~Common~missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "message": "01020036:3: The requested policy (/Common/missing) was not found."
        })))
        .mount(&server)
        .await;

    let mut cmd = device_cmd(&server);
    cmd.args(["policies", "get", "/Common/missing"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("policies list"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unrecognized_literal_exits_general() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/monitor/http"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "name": "http_app", "manualResume": "sometimes" }]
        })))
        .mount(&server)
        .await;

    let mut cmd = device_cmd(&server);
    cmd.args(["monitors", "list", "http"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("sometimes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_profile_logs_in_and_out() {
    let server = MockServer::start().await;
    let mut cmd = bigip_cmd();
    let _home = with_config(
        &mut cmd,
        &format!(
            "default_profile = \"lab\"\n\n\
             [profiles.lab]\n\
             host = \"{}\"\n\
             username = \"netops\"\n\
             password_env = \"LAB_BIGIP_PW\"\n\
             auth_mode = \"token\"\n",
            server.uri()
        ),
    );

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .and(body_partial_json(json!({
            "username": "netops",
            "password": "lab-pass",
            "loginProviderName": "tmos"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": { "token": "LABTOKEN", "timeout": 1200 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/folder"))
        .and(wiremock::matchers::header("X-F5-Auth-Token", "LABTOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "name": "Common", "fullPath": "/Common", "hidden": "false" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/mgmt/shared/authz/tokens/LABTOKEN"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cmd.env("LAB_BIGIP_PW", "lab-pass")
        .args(["-o", "plain", "folders", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "/Common\n");
}

#[test]
fn test_malformed_config_is_reported() {
    let mut cmd = bigip_cmd();
    let _home = with_config(&mut cmd, "[profiles.lab\nhost = \"10.0.0.10\"\n");
    let output = cmd.args(["folders", "list"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(text.contains("config loading failed"), "{text}");
    assert!(!text.contains("Configuration file not found"), "{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_output_default_from_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/folder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "name": "Common", "fullPath": "/Common" }]
        })))
        .mount(&server)
        .await;

    let mut cmd = device_cmd(&server);
    let _home = with_config(&mut cmd, "[defaults]\noutput = \"plain\"\n");
    cmd.args(["folders", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "/Common\n");
}
