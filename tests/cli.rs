//! Black-box tests for the `piperwav` binary's argument and error contracts.
//!
//! Real synthesis needs a voice model on disk, so these only exercise the
//! paths reachable without one: argument-count handling and the model-load
//! failure report.

use std::process::{Command, Output};

fn piperwav(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_piperwav"))
        .args(args)
        .output()
        .expect("failed to run piperwav binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn no_arguments_prints_usage_to_stdout() {
    let out = piperwav(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = stdout(&out);
    assert!(stdout.contains("Usage:"), "stdout was: {stdout}");
    assert!(stdout.contains("<voice_path> <output_path> <text>"));
}

#[test]
fn too_few_arguments_prints_usage() {
    let out = piperwav(&["voice.onnx", "out.wav"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("Usage:"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let out = piperwav(&["voice.onnx", "out.wav", "hello", "extra"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("Usage:"));
}

#[test]
fn missing_voice_model_reports_error() {
    let missing = std::env::temp_dir().join("piperwav-no-such-voice.onnx");
    let out_wav = std::env::temp_dir().join("piperwav-cli-test.wav");

    let out = piperwav(&[
        missing.to_str().unwrap(),
        out_wav.to_str().unwrap(),
        "hello",
    ]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR"), "stderr was: {stderr}");
    // The failure names the offending path.
    assert!(stderr.contains("piperwav-no-such-voice"), "stderr was: {stderr}");
    // Load fails before the output file is ever created.
    assert!(!out_wav.exists());
}
