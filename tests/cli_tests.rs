// Binary-level tests for the one-shot subcommands and the piped
// interactive session.

use assert_cmd::Command;
use predicates::prelude::*;

fn credentry() -> Command {
    Command::cargo_bin("credentry").unwrap()
}

#[test]
fn test_generate_emits_a_password_of_the_requested_length() {
    credentry()
        .args(["generate", "--min", "12", "--max", "12"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^.{12}\n$").unwrap());
}

#[test]
fn test_generate_zero_maximum_behaves_as_forty_five() {
    credentry()
        .args(["generate", "--min", "3", "--max", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^.{3,45}\n$").unwrap());
}

#[test]
fn test_generate_rejects_inverted_bounds() {
    credentry()
        .args(["generate", "--min", "9", "--max", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum 9 exceeds maximum 3"));
}

#[test]
fn test_generate_minimum_above_the_default_cap_fails() {
    credentry()
        .args(["generate", "--min", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum 50 exceeds maximum 45"));
}

#[test]
fn test_generate_json_reports_the_length() {
    credentry()
        .args(["generate", "--min", "6", "--max", "6", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"length\": 6"));
}

#[test]
fn test_encode_prints_the_numeric_form() {
    credentry()
        .args(["encode", "ab"])
        .assert()
        .success()
        .stdout("9798\n");
}

#[test]
fn test_encode_handles_inputs_beyond_machine_integers() {
    let text = "a".repeat(45);
    let expected = format!("{}\n", "97".repeat(45));
    credentry()
        .args(["encode", &text])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_encode_json_carries_the_value_as_a_string() {
    credentry()
        .args(["encode", "ab", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"encoded\": \"9798\""))
        .stdout(predicate::str::contains("\"digits\": 4"));
}

#[test]
fn test_encode_rejects_empty_input() {
    credentry()
        .args(["encode", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_check_url_accepts_and_exits_zero() {
    credentry()
        .args(["check-url", "https://example.com"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_check_url_rejects_and_exits_one() {
    credentry()
        .args(["check-url", "example.com"])
        .assert()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn test_check_url_rejects_hostless_schemes() {
    credentry()
        .args(["check-url", "mailto:user@example.com"])
        .assert()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn test_check_url_json_output() {
    credentry()
        .args(["check-url", "ftp://x", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn test_piped_session_builds_a_record_and_ends_at_eof() {
    // website, skipped URL, username, password, end of questions; the
    // command loop then sees EOF and the process exits cleanly.
    credentry()
        .write_stdin("GitHub\n\noctocat\nhunter2\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account record created"));
}

#[test]
fn test_piped_session_aborts_when_input_ends_mid_flow() {
    credentry()
        .write_stdin("GitHub\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input stream closed"));
}
