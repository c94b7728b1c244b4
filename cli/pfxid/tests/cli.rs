use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DEFAULT_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A command isolated from the user's config directory and environment.
fn pfxid(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pfxid"));
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"));
    for var in [
        "PFXID_CONFIG",
        "PFXID_ALPHABET",
        "PFXID_SIZE",
        "PFXID_ENTROPY",
        "PFXID_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn assert_id(id: &str, prefix: &str, alphabet: &str) {
    let suffix = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or_else(|| panic!("{id} should start with {prefix}_"));
    assert!(!suffix.is_empty());
    assert!(suffix.chars().all(|c| alphabet.contains(c)), "{id}");
}

#[test]
fn generate_defaults_to_user_prefix() {
    let home = TempDir::new().unwrap();
    let output = pfxid(&home).args(["generate", "user"]).output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_id(&lines[0], "u", DEFAULT_ALPHABET);
}

#[test]
fn generate_count_produces_distinct_ids() {
    let home = TempDir::new().unwrap();
    let output = pfxid(&home)
        .args(["generate", "user", "--count", "200"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 200);
    let unique: std::collections::HashSet<_> = lines.iter().collect();
    assert_eq!(unique.len(), 200);
}

#[test]
fn generate_with_flag_prefixes_and_alphabet() {
    let home = TempDir::new().unwrap();
    let output = pfxid(&home)
        .args([
            "--prefix",
            "customer=cus",
            "--prefix",
            "payment=pi",
            "--alphabet",
            "0123456789",
            "--entropy",
            "thread",
            "generate",
            "payment",
            "-n",
            "5",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    for line in stdout_lines(&output) {
        assert_id(&line, "pi", "0123456789");
    }
}

#[test]
fn generate_json_format() {
    let home = TempDir::new().unwrap();
    let output = pfxid(&home)
        .args(["--format", "json", "generate", "user", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let ids: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids.len(), 3);
    for id in &ids {
        assert_id(id, "u", DEFAULT_ALPHABET);
    }
}

#[test]
fn bytes_override_changes_length() {
    let home = TempDir::new().unwrap();
    let short = pfxid(&home)
        .args(["generate", "user", "--bytes", "4"])
        .output()
        .unwrap();
    let long = pfxid(&home)
        .args(["generate", "user", "--bytes", "32"])
        .output()
        .unwrap();

    let short = &stdout_lines(&short)[0];
    let long = &stdout_lines(&long)[0];
    assert!(short.len() < long.len(), "{short} vs {long}");
}

#[test]
fn unknown_kind_fails_with_hint() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["generate", "invoice"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown identifier kind: invoice"))
        .stderr(predicate::str::contains("pfxid kinds"));
}

#[test]
fn ambiguous_alphabet_is_rejected() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["--alphabet", "abca", "generate", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'a' is ambiguous"));
}

#[test]
fn zero_size_is_rejected() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["--size", "0", "generate", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 byte"));
}

#[test]
fn malformed_prefix_flag_is_rejected() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["--prefix", "user", "generate", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KIND=PREFIX"));
}

#[test]
fn encode_leading_zeroes() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["--alphabet", "0123456789", "encode", "0000ff"])
        .assert()
        .success()
        .stdout("00255\n");
}

#[test]
fn encode_golden_buffer() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["encode", "0x00000102030405060708090a0b0c0d0e"])
        .assert()
        .success()
        .stdout("11NVSVezva3bAQdzTQGD\n");
}

#[test]
fn encode_rejects_bad_hex() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["encode", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex input"));
}

#[test]
fn config_file_supplies_prefixes() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ids.toml");
    std::fs::write(
        &path,
        "alphabet = \"01\"\nsize = 2\n\n[prefixes]\norg = \"o\"\nteam = \"t\"\n",
    )
    .unwrap();

    let output = pfxid(&home)
        .arg("--config")
        .arg(&path)
        .args(["generate", "team"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = &stdout_lines(&output)[0];
    assert_id(id, "t", "01");
    assert!(id.len() <= 2 + 16, "{id}");

    pfxid(&home)
        .arg("--config")
        .arg(&path)
        .arg("kinds")
        .assert()
        .success()
        .stdout("org   o\nteam  t\n");
}

#[test]
fn flags_override_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ids.toml");
    std::fs::write(&path, "alphabet = \"01\"\n\n[prefixes]\norg = \"o\"\n").unwrap();

    let output = pfxid(&home)
        .env("PFXID_CONFIG", &path)
        .args(["--alphabet", "abc", "generate", "org"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_id(&stdout_lines(&output)[0], "o", "abc");
}

#[test]
fn env_overrides_apply() {
    let home = TempDir::new().unwrap();
    let output = pfxid(&home)
        .env("PFXID_ALPHABET", "0123456789abcdef")
        .args(["generate", "user"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_id(&stdout_lines(&output)[0], "u", "0123456789abcdef");
}

#[test]
fn missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    pfxid(&home)
        .args(["--config"])
        .arg(home.path().join("absent.toml"))
        .args(["generate", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn kinds_json() {
    let home = TempDir::new().unwrap();
    let output = pfxid(&home)
        .args(["--format", "json", "kinds"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows, serde_json::json!([{ "kind": "user", "prefix": "u" }]));
}
