mod common;

#[test]
fn show_json_prints_lines_as_array() {
    let td = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        td.path().join("script_out.txt"),
        "OPEN\nwing.fsm\nLOAD_SOLVER_INITIALIZATION DISABLE\n",
    )
    .unwrap();

    let out = common::flightscript(td.path())
        .args(["show", "--json"])
        .output()
        .expect("failed to run flightscript show --json");
    common::assert_success(&out, "flightscript show --json");

    let lines: Vec<String> =
        serde_json::from_str(&common::stdout(&out)).expect("stdout is a JSON array");
    assert_eq!(lines, ["OPEN", "wing.fsm", "LOAD_SOLVER_INITIALIZATION DISABLE"]);
}

#[test]
fn show_plain_echoes_the_file() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("custom.txt");
    std::fs::write(&path, "START_SOLVER\n").unwrap();

    let out = common::flightscript(td.path())
        .arg("show")
        .arg(&path)
        .output()
        .expect("failed to run flightscript show");
    common::assert_success(&out, "flightscript show");
    assert_eq!(common::stdout(&out), "START_SOLVER\n");
}

#[test]
fn show_missing_file_exits_127() {
    let td = tempfile::tempdir().expect("tempdir");
    let out = common::flightscript(td.path())
        .arg("show")
        .output()
        .expect("failed to run flightscript show");
    common::assert_exit_code(&out, 127, "flightscript show (missing file)");
    assert!(common::stderr(&out).contains("script_out.txt"));
}
