//! Integration tests for the `reprint` command-line interface.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE: &str = "// greeting helpers\nfn greet(name: &str) {\n    println!(\"hi {name}\");   // loud\n}\n";

fn setup_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lib.rs"), SOURCE).unwrap();
    dir
}

fn run_reprint(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reprint"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run reprint binary")
}

#[test]
fn rename_prints_to_stdout() {
    let dir = setup_workspace();
    let output = run_reprint(dir.path(), &["rename", "lib.rs", "--from", "name", "--to", "who"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    // Identifiers inside the format string are not tree nodes.
    assert_eq!(
        stdout,
        "// greeting helpers\nfn greet(who: &str) {\n    println!(\"hi {name}\");   // loud\n}\n"
    );
    // The file is untouched without --write.
    assert_eq!(fs::read_to_string(dir.path().join("lib.rs")).unwrap(), SOURCE);
}

#[test]
fn rename_with_write_updates_file() {
    let dir = setup_workspace();
    let output = run_reprint(
        dir.path(),
        &["rename", "lib.rs", "--from", "greet", "--to", "welcome", "--write"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let content = fs::read_to_string(dir.path().join("lib.rs")).unwrap();
    assert_eq!(content, SOURCE.replace("fn greet", "fn welcome"));
}

#[test]
fn rename_rejects_keyword_target() {
    let dir = setup_workspace();
    let output = run_reprint(dir.path(), &["rename", "lib.rs", "--from", "name", "--to", "fn"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--to is not a Rust identifier"), "stderr: {stderr}");
}

#[test]
fn annotate_before_with_escapes() {
    let dir = setup_workspace();
    let output = run_reprint(
        dir.path(),
        &[
            "annotate",
            "lib.rs",
            "--item",
            "function_item",
            "--name",
            "greet",
            "--text",
            "#[inline]\\n",
            "--write",
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let content = fs::read_to_string(dir.path().join("lib.rs")).unwrap();
    assert_eq!(content, SOURCE.replace("fn greet", "#[inline]\nfn greet"));
}

#[test]
fn annotate_producing_invalid_syntax_is_refused() {
    let dir = setup_workspace();
    let args = [
        "annotate",
        "lib.rs",
        "--item",
        "function_item",
        "--name",
        "greet",
        "--text",
        " {",
        "--after",
        "--write",
    ];
    let output = run_reprint(dir.path(), &args);

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("lib.rs")).unwrap(), SOURCE);

    let mut forced = args.to_vec();
    forced.push("--no-validate");
    let output = run_reprint(dir.path(), &forced);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let content = fs::read_to_string(dir.path().join("lib.rs")).unwrap();
    assert!(content.ends_with("// loud\n} {\n"));
}

#[test]
fn diff_shows_changed_lines() {
    let dir = setup_workspace();
    let output = run_reprint(
        dir.path(),
        &["rename", "lib.rs", "--from", "greet", "--to", "hello", "--diff"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-fn greet(name: &str) {"));
    assert!(stdout.contains("+fn hello(name: &str) {"));
}

#[test]
fn config_file_is_loaded() {
    let dir = setup_workspace();
    fs::write(
        dir.path().join("reprint.toml"),
        "reject_overlapping = true\nreject_out_of_bounds = true\n",
    )
    .unwrap();
    let output = run_reprint(
        dir.path(),
        &[
            "--config",
            "reprint.toml",
            "rename",
            "lib.rs",
            "--from",
            "name",
            "--to",
            "who",
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    fs::write(dir.path().join("bad.toml"), "reject_everything = true\n").unwrap();
    let output = run_reprint(
        dir.path(),
        &["--config", "bad.toml", "rename", "lib.rs", "--from", "a", "--to", "b"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse reprint config TOML"), "stderr: {stderr}");
}
