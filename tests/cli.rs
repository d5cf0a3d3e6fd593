//! Command-line tests for the crib binary

use assert_cmd::Command;
use predicates::prelude::*;

fn crib() -> Command {
    let mut cmd = Command::cargo_bin("crib").unwrap();
    cmd.env_remove("CRIB_YEAR").env_remove("RUST_LOG").arg("--no-color");
    cmd
}

const AUDIT_ARGS: &[&str] = &[
    "--variant",
    "audit",
    "--given-name",
    "Juan",
    "--family-name",
    "Perez",
    "--identifier",
    "12345678A",
    "--pet-name",
    "Rex",
    "--postal-code",
    "11500",
];

#[test]
fn test_audit_from_flags() {
    crib()
        .args(AUDIT_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Generated candidates: "))
        .stdout(predicate::str::contains(". juanperez12345678\n"))
        .stdout(predicate::str::contains(". ju@np3r3z\n"))
        .stdout(predicate::str::contains(". rex11500\n"))
        .stdout(predicate::str::contains("Audit tool. Use it responsibly."));
}

#[test]
fn test_audit_quiet_respects_floor() {
    let output = crib().args(AUDIT_ARGS).arg("--quiet").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l.chars().count() >= 8));

    let mut sorted = lines.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(lines, sorted);
}

#[test]
fn test_invalid_dni_is_rejected() {
    crib()
        .args([
            "--given-name",
            "Juan",
            "--family-name",
            "Perez",
            "--identifier",
            "1234",
            "--pet-name",
            "Rex",
            "--postal-code",
            "11500",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "identifier must be exactly 8 digits followed by a single letter",
        ));
}

#[test]
fn test_name_with_digits_is_rejected() {
    crib()
        .args([
            "--given-name",
            "Juan",
            "--family-name",
            "Perez2",
            "--identifier",
            "12345678A",
            "--pet-name",
            "Rex",
            "--postal-code",
            "11500",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("surname cannot contain digits"));
}

#[test]
fn test_simple_prompts_for_missing_fields() {
    crib()
        .args(["--variant", "simple", "--quiet"])
        .write_stdin("Ana\n42\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Full name"))
        .stderr(predicate::str::contains("ID number"))
        .stdout(predicate::str::starts_with("2024ana\n"))
        .stdout(predicate::str::contains("\nana2024\n"))
        .stdout(predicate::str::contains("\nana42\n").not());
}

#[test]
fn test_quiet_output_is_only_candidates() {
    let output = crib()
        .args(["--variant", "simple", "--quiet"])
        .write_stdin("Ana\n42\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(!lines.is_empty());
    for line in &lines {
        assert!(line.chars().count() >= 6, "{:?}", line);
        assert!(!line.contains(": "), "{:?}", line);
        assert!(!line.chars().any(char::is_whitespace), "{:?}", line);
    }
    assert!(lines.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_full_name_flag_with_digits_is_rejected() {
    crib()
        .args(["--variant", "simple", "--given-name", "Ana3", "--identifier", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot contain digits"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_prompt_repeats_until_valid() {
    crib()
        .args(["--variant", "extended", "--quiet"])
        .write_stdin("Ana3\nAna\n42\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("name cannot contain digits"))
        .stdout(predicate::str::contains("\nana42*\n"));
}

#[test]
fn test_closed_input_fails() {
    crib()
        .args(["--variant", "simple"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));
}

#[test]
fn test_year_from_environment() {
    crib()
        .env("CRIB_YEAR", "1999")
        .args(["--variant", "simple", "--given-name", "Ana", "--identifier", "42", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ana1999\n"))
        .stdout(predicate::str::contains("2024").not());
}

#[test]
fn test_no_year() {
    crib()
        .args([
            "--variant",
            "extended",
            "--given-name",
            "Ana",
            "--identifier",
            "42",
            "--no-year",
            "-q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024").not())
        .stdout(predicate::str::contains("ana42!\n"));
}

#[test]
fn test_empty_result_message() {
    crib()
        .args(AUDIT_ARGS)
        .args(["--min-length", "64"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No valid candidates could be generated. Check the inputs.",
        ));
}
