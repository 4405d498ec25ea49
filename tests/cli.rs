use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

fn monoglyph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_monoglyph"))
}

fn write_program(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("program.mg");
    fs::write(&path, source).unwrap();
    path
}

fn run_program(source: &str, flags: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let path = write_program(&dir, source);

    monoglyph().args(flags).arg(&path).output().unwrap()
}

#[test]
fn prints_the_result() {
    let output = run_program("{ ! x #41 ; x }", &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "65\n");
}

#[test]
fn reads_program_input_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_program(&dir, "{ + ~ I _ ~ I _ }");

    let mut child = monoglyph().arg(&path)
                               .stdin(Stdio::piped())
                               .stdout(Stdio::piped())
                               .spawn()
                               .unwrap();
    child.stdin.take().unwrap().write_all(b"3 4").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7\n");
}

#[test]
fn bad_arguments_are_a_usage_error() {
    let output = monoglyph().output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = monoglyph().arg("--no-such-flag").arg("x.mg").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = monoglyph().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_program_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = monoglyph().arg(dir.path().join("missing.mg")).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_programs_do_not_run() {
    let output = run_program("{ @ }", &[]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Malformed input"));

    let output = run_program("{ ! 1 2 }", &[]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not allowed here"));
}

#[test]
fn runtime_errors_have_their_own_exit_code() {
    let output = run_program("{ y }", &[]);

    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unbound variable 'y'"));
}

#[test]
fn check_only_validates() {
    let output = run_program("{ y }", &["--check"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let output = run_program("{ ! 1 2 }", &["-c"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn tree_prints_the_outline() {
    let output = run_program("{ ! x 1 }", &["--tree", "--check"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{\n !\n  x\n  1\n }\n");

    let output = run_program("{ x }", &["-t"]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{\n x\n }\n");
}

#[test]
fn failing_to_write_the_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_program(&dir, "{ : ~ S _ N }");

    let mut child = monoglyph().arg(&path)
                               .stdin(Stdio::piped())
                               .stdout(Stdio::piped())
                               .stderr(Stdio::null())
                               .spawn()
                               .unwrap();

    // Nothing reads the output, and the program cannot finish before its input
    // arrives.
    drop(child.stdout.take());
    let word = "x".repeat(1_000_000);
    let _ = child.stdin.take().unwrap().write_all(word.as_bytes());

    assert_eq!(child.wait().unwrap().code(), Some(4));
}
