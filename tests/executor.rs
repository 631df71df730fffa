#![cfg(unix)]

use std::time::Duration;

use flightscript::{execute, exit_code_for_script_error, ExecuteOptions, Execution, ScriptError};

mod common;

fn write_script(dir: &std::path::Path) -> std::path::PathBuf {
    let script = dir.join("script_out.txt");
    std::fs::write(&script, "START_SOLVER\nCLOSE_FLIGHTSTREAM\n").unwrap();
    script
}

#[test]
fn hidden_flag_precedes_script_argument() {
    let td = tempfile::tempdir().expect("tempdir");
    let exe = common::fake_flightstream(td.path(), "exit 0");
    let script = write_script(td.path());

    let options = ExecuteOptions {
        hidden: true,
        ..ExecuteOptions::default()
    };
    let outcome = execute(&exe, &script, &options).unwrap();
    assert!(outcome.success());
    assert_eq!(
        common::recorded_args(td.path()),
        ["-hidden", "-script", script.to_str().unwrap()]
    );
}

#[test]
fn exit_status_and_output_are_reported() {
    let td = tempfile::tempdir().expect("tempdir");
    let exe = common::fake_flightstream(td.path(), "echo converged; echo warn >&2; exit 3");
    let script = write_script(td.path());

    let outcome = execute(&exe, &script, &ExecuteOptions::default()).unwrap();
    assert_eq!(outcome.exit_code(), Some(3));
    assert!(!outcome.success());
    match outcome {
        Execution::Finished { stdout, stderr, .. } => {
            assert_eq!(stdout.trim(), "converged");
            assert_eq!(stderr.trim(), "warn");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(common::recorded_args(td.path()), ["-script", script.to_str().unwrap()]);
}

#[test]
fn no_wait_returns_a_pid() {
    let td = tempfile::tempdir().expect("tempdir");
    let exe = common::fake_flightstream(td.path(), "exit 0");
    let script = write_script(td.path());

    let options = ExecuteOptions {
        wait: false,
        ..ExecuteOptions::default()
    };
    match execute(&exe, &script, &options).unwrap() {
        Execution::Started { pid } => assert!(pid > 0),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn timeout_kills_the_tool() {
    let td = tempfile::tempdir().expect("tempdir");
    let exe = common::fake_flightstream(td.path(), "sleep 5");
    let script = write_script(td.path());

    let options = ExecuteOptions {
        timeout: Some(Duration::from_millis(200)),
        ..ExecuteOptions::default()
    };
    match execute(&exe, &script, &options) {
        Err(e @ ScriptError::Launch { .. }) => {
            assert!(e.to_string().contains("timed out"), "{e}");
            assert_eq!(exit_code_for_script_error(&e), 1);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_script_is_reported_before_launch() {
    let td = tempfile::tempdir().expect("tempdir");
    let exe = common::fake_flightstream(td.path(), "exit 0");
    let missing = td.path().join("absent.txt");

    match execute(&exe, &missing, &ExecuteOptions::default()) {
        Err(e @ ScriptError::Io { .. }) => assert_eq!(exit_code_for_script_error(&e), 127),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(common::recorded_args(td.path()).is_empty(), "tool must not start");
}
