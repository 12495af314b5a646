use std::io::Write;
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run `skygate` in an empty directory with no user config.
fn skygate(home: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_skygate"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("SKYGATE_LOG")
        .env_remove("SKYGATE_API__BASE_URL")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn skygate");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for skygate")
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    format!("http://127.0.0.1:{port}")
}

#[test]
fn schema_prints_json_schema() {
    let home = TempDir::new().unwrap();
    let output = skygate(&home, &["schema", "audit-request"], "");
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(schema["title"], "AuditRequest");
}

#[test]
fn failed_audit_prints_message_and_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let api_url = closed_port_url();
    let output = skygate(
        &home,
        &[
            "--api-url",
            &api_url,
            "audit",
            "--business-id",
            "b1",
            "--url",
            "https://example.com",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Audit failed\n");
}

#[test]
fn failed_audit_json_carries_cause() {
    let home = TempDir::new().unwrap();
    let api_url = closed_port_url();
    let output = skygate(
        &home,
        &[
            "--format",
            "json",
            "--api-url",
            &api_url,
            "audit",
            "--business-id",
            "b1",
            "--url",
            "https://example.com",
        ],
        "",
    );

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(state["phase"], "failed");
    assert_eq!(state["result"]["error"], "Audit failed");
    assert_eq!(state["result"]["cause"]["kind"], "network");
}

#[test]
fn unreachable_checklist_lists_nothing() {
    let home = TempDir::new().unwrap();
    let api_url = closed_port_url();
    let output = skygate(
        &home,
        &["--api-url", &api_url, "checklist", "list", "--business-id", "b1"],
        "",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Tasks\n-----\n(no tasks)\n"
    );
}

#[test]
fn malformed_consent_template_fails_without_network() {
    let home = TempDir::new().unwrap();
    let output = skygate(
        &home,
        &[
            "--api-url",
            &closed_port_url(),
            "consent",
            "--business-id",
            "b1",
            "--template",
            "not json",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Consent save failed\n"
    );
}

#[test]
fn invalid_api_url_is_rejected() {
    let home = TempDir::new().unwrap();
    let output = skygate(&home, &["--api-url", "localhost:5000", "health"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("skygate error"));
}

#[test]
fn open_session_reads_commands_from_stdin() {
    let home = TempDir::new().unwrap();
    let output = skygate(
        &home,
        &["--api-url", &closed_port_url(), "open", "/audit"],
        "set business_id b1\nbogus\nquit\n",
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Loading...\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown command 'bogus'"));
}
