/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("termlife"),
        "Help output should mention termlife"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = Command::new("cargo")
        .args(["run", "--", "nonexistent-command"])
        .output()
        .expect("Failed to execute cargo run");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    // Should show helpful error, not a panic backtrace
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn patterns_lists_the_builtin_shapes() {
    let output = Command::new("cargo")
        .args(["run", "--", "patterns"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Glider"));
    assert!(stdout.contains("Pulsar"));
}

#[test]
fn advance_returns_a_blinker_to_its_phase() {
    let input = std::env::temp_dir().join("termlife_smoke_blinker.cells");
    std::fs::write(&input, "0,0-1,0-2,0-").expect("write temp pattern");

    let output = Command::new("cargo")
        .args(["run", "--", "advance"])
        .arg(&input)
        .args(["--generations", "2"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "advance failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "0,0-1,0-2,0-");

    let _ = std::fs::remove_file(&input);
}

#[test]
fn advance_rejects_a_malformed_file() {
    let input = std::env::temp_dir().join("termlife_smoke_malformed.cells");
    std::fs::write(&input, "abc-def").expect("write temp pattern");

    let output = Command::new("cargo")
        .args(["run", "--", "advance"])
        .arg(&input)
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not well formatted"));
    assert!(!stderr.contains("panicked at"));

    let _ = std::fs::remove_file(&input);
}
