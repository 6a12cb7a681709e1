//! CLI integration tests for alphabase
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn alphabase() -> Command {
    Command::cargo_bin("alphabase").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    alphabase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom alphabets"));
}

#[test]
fn test_version() {
    alphabase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("alphabase"));
}

#[test]
fn test_list_alphabets() {
    alphabase()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"))
        .stdout(predicate::str::contains("base32hex"))
        .stdout(predicate::str::contains("crockford"));
}

// ============================================================================
// Encode/Decode Round-trips
// ============================================================================

#[test]
fn test_encode_default_is_base64() {
    alphabase()
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_decode_base64() {
    alphabase()
        .args(["--decode", "--alphabet", "base64"])
        .write_stdin("aGVsbG8gd29ybGQ=\n")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_roundtrip_base32() {
    let encoded = alphabase()
        .args(["-a", "base32"])
        .write_stdin("hello")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(encoded, b"NBSWY3DP\n");

    alphabase()
        .args(["-a", "base32", "-d"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn test_roundtrip_hex() {
    alphabase()
        .args(["-a", "hex"])
        .write_stdin("ABC")
        .assert()
        .success()
        .stdout("414243\n");

    alphabase()
        .args(["-a", "hex", "-d"])
        .write_stdin("4142 43")
        .assert()
        .success()
        .stdout("ABC");
}

#[test]
fn test_custom_alphabet() {
    alphabase()
        .args(["--custom", "ab", "--padding", "."])
        .write_stdin("A")
        .assert()
        .success()
        .stdout("abaaaaab\n");

    alphabase()
        .args(["--custom", "AB", "--case-insensitive", "-d"])
        .write_stdin("abaaaaab")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn test_file_input_and_output() {
    let dir = std::env::temp_dir().join(format!("alphabase-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("input.bin");
    let output = dir.join("output.txt");
    std::fs::write(&input, [0x00u8, 0xFF]).unwrap();

    alphabase()
        .args(["-a", "hex", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "00ff\n");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_extra_config_file() {
    let dir = std::env::temp_dir().join(format!("alphabase-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("extra.toml");
    std::fs::write(
        &config,
        "[alphabets.dna]\nchars = \"ACGT\"\ndescription = \"nucleotides\"\n",
    )
    .unwrap();

    alphabase()
        .args(["-a", "dna", "--config"])
        .arg(&config)
        .write_stdin("A")
        .assert()
        .success()
        .stdout("CAAC\n");

    alphabase()
        .args(["--list", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("nucleotides"));

    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_character() {
    alphabase()
        .args(["-a", "base64", "-d"])
        .write_stdin("Zm9v*mFy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '*' at position 4"));
}

#[test]
fn test_invalid_padding() {
    alphabase()
        .arg("-d")
        .write_stdin("Zm9=")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid padding"));
}

#[test]
fn test_unknown_alphabet_suggestion() {
    alphabase()
        .args(["-a", "bas64"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}

#[test]
fn test_invalid_custom_alphabet() {
    alphabase()
        .args(["--custom", "0123456789"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("10 symbols"));
}

#[test]
fn test_quiet_still_reports_errors() {
    alphabase()
        .args(["-q", "-d"])
        .write_stdin("A")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid length"));
}
