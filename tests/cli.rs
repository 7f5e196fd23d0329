#![forbid(unsafe_code)]
mod common;

use assert_cmd::Command;
use common::{calendarific_body, OneShotServer};
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("preavis-cli").unwrap();
    cmd.current_dir(dir);
    for var in [
        "PREAVIS_API_KEY",
        "PREAVIS_HOLIDAY_API_URL",
        "PREAVIS_SMTP_HOST",
        "PREAVIS_SMTP_PORT",
        "PREAVIS_SMTP_USERNAME",
        "PREAVIS_SMTP_PASSWORD",
        "PREAVIS_MAIL_FROM",
        "HTTP_PROXY",
        "http_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn calculate_usa_offline() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--country",
            "usa",
            "--offline",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your Last Working Day is: Monday, 08 January 2024",
        ));
}

#[test]
fn calculate_uae_offline() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--country",
            "uae",
            "--offline",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday, 07 January 2024"));
}

#[test]
fn custom_holiday_and_malformed_list() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-03-01",
            "--notice-period",
            "10",
            "--holidays",
            "2024-03-11",
            "--offline",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tuesday, 12 March 2024"));

    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-03-01",
            "--notice-period",
            "10",
            "--holidays",
            "11/03/2024",
            "--offline",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid custom holiday list"))
        .stdout(predicate::str::contains("Monday, 11 March 2024"));
}

#[test]
fn missing_api_key_is_only_a_warning() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--country",
            "usa",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("holiday API key is not configured"))
        .stdout(predicate::str::contains("Monday, 08 January 2024"));
}

#[test]
fn export_json_document() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("result.json");
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--offline",
            "--export",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary written to"));
    let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["last_working_day"], "2024-01-08");
    assert_eq!(v["country_code"], "IN");
}

#[test]
fn email_without_relay_config_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--offline",
            "--email",
            "alice@example.com",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Monday, 08 January 2024"))
        .stderr(predicate::str::contains("email delivery is not configured"));
}

#[test]
fn zero_notice_period_is_rejected() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args(["calculate", "--notice-period", "0", "--offline"])
        .assert()
        .failure();
}

#[test]
fn countries_lists_weekends() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .arg("countries")
        .assert()
        .success()
        .stdout(predicate::str::contains("UAE | AE | Fri, Sat"))
        .stdout(predicate::str::contains("Other | US | Sat, Sun"));
}

#[test]
fn bad_smtp_port_keeps_holiday_settings() {
    let dir = tempdir().unwrap();
    let server = OneShotServer::start("200 OK", &calendarific_body(&["2024-01-08"]));
    cli(dir.path())
        .env("PREAVIS_API_KEY", "realkey")
        .env("PREAVIS_HOLIDAY_API_URL", &server.url)
        .env("PREAVIS_SMTP_PORT", "abc")
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--country",
            "usa",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("API key is not configured").not())
        .stdout(predicate::str::contains("Tuesday, 09 January 2024"));
    assert!(server.request_line().contains("api_key=realkey"));
}

#[test]
fn bad_smtp_port_only_fails_the_email() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .env("PREAVIS_SMTP_HOST", "smtp.example.com")
        .env("PREAVIS_MAIL_FROM", "hr@example.com")
        .env("PREAVIS_SMTP_PORT", "abc")
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--offline",
            "--email",
            "alice@example.com",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Monday, 08 January 2024"))
        .stderr(predicate::str::contains("reading SMTP configuration"));
}

#[test]
fn country_code_override_is_labelled_in_document() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("result.txt");
    cli(dir.path())
        .args([
            "calculate",
            "--resignation-date",
            "2024-01-01",
            "--notice-period",
            "5",
            "--country-code",
            "fr",
            "--offline",
            "--export",
        ])
        .arg(&out)
        .assert()
        .success();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Country:            FR\n"), "{text}");
    assert!(!text.contains("India"));
}
