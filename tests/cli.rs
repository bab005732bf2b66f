//! End-to-end tests for the `phpdoc-source` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_phpdoc-source"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = bin()
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn phpdoc-source");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait on child")
}

const MESSY: &str = concat!(
    "/**\r\n",
    " *   Fetch   a widget\r\n",
    " * @return   Widget the widget\r\n",
    " * @see Elsewhere\r\n",
    " * @param int  $id   the widget id\r\n",
    " */\r\n",
);

#[test]
fn normalises_from_stdin() {
    let out = run_with_stdin(&[], MESSY);
    assert!(out.status.success());
    let expected = concat!(
        "\n/**\n",
        " * Fetch a widget\n",
        " *\n",
        " * @param int $id the widget id\n",
        " * @return Widget the widget\n",
        " */\n",
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), expected);
}

#[test]
fn reads_file_argument() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("doc.txt");
    fs::write(&path, " * @throws \\SoapFault\n").expect("failed to write input");

    let out = bin().arg(&path).output().expect("failed to run");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "\n/**\n * @throws \\SoapFault\n */\n"
    );
}

#[test]
fn json_output() {
    let out = run_with_stdin(&["--json"], MESSY);
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["params"][0]["name"], "id");
    assert_eq!(value["return"]["type_name"], "Widget");
}

#[test]
fn malformed_tag_fails_unless_lenient() {
    let input = " * @param int\n * @return bool\n";

    let strict = run_with_stdin(&[], input);
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("malformed @param tag"));

    let lenient = run_with_stdin(&["--lenient"], input);
    assert!(lenient.status.success());
    assert_eq!(
        String::from_utf8_lossy(&lenient.stdout),
        "\n/**\n * @return bool\n */\n"
    );
}

#[test]
fn missing_file_is_an_error() {
    let out = bin()
        .arg("/nonexistent/phpdoc-source-input")
        .output()
        .expect("failed to run");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read"));
}
