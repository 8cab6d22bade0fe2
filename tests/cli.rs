use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("test_input_data.json")
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_petition-words"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn scratch_with_input() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::copy(fixture(), dir.path().join("data").join("input_data.json")).unwrap();
    dir
}

#[test]
fn writes_default_output_file() {
    let dir = scratch_with_input();
    let output = run_in(dir.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let written = fs::read_to_string(dir.path().join("data").join("output_data.csv")).unwrap();
    assert!(written.starts_with("petition_id,government,heavymetal,gover,ignore\n"));
}

#[test]
fn failures_after_loading_name_the_input() {
    let dir = scratch_with_input();
    // a directory in place of the output file makes the final stage fail
    fs::create_dir(dir.path().join("data").join("output_data.csv")).unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("processing data/input_data.json"), "{stderr}");
}

#[test]
fn missing_input_reports_loading() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading data/input_data.json"), "{stderr}");
}
