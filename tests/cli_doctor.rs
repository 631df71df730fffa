mod common;

#[test]
fn doctor_exits_zero_and_reports_resolution() {
    let td = tempfile::tempdir().expect("tempdir");
    let out = common::flightscript(td.path())
        .env("FS_EXE", "/from/env/FlightStream")
        .arg("doctor")
        .output()
        .expect("failed to run flightscript doctor");
    common::assert_success(&out, "flightscript doctor");
    let err = common::stderr(&out);
    assert!(err.contains("flightscript doctor"), "{err}");
    assert!(err.contains("executable: /from/env/FlightStream"), "{err}");
    assert!(err.contains("script:  script_out.txt"), "{err}");
}

#[test]
fn version_includes_build_metadata() {
    let td = tempfile::tempdir().expect("tempdir");
    let out = common::flightscript(td.path())
        .arg("--version")
        .output()
        .expect("failed to run flightscript --version");
    common::assert_success(&out, "flightscript --version");
    assert!(common::stdout(&out).contains(env!("CARGO_PKG_VERSION")));
}
