use flightscript::{Script, ScriptError};

mod common;

#[test]
fn write_overwrites_existing_file_and_keeps_buffer() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("out.txt");
    std::fs::write(&path, "stale contents\nfrom an earlier run\n").unwrap();

    let mut script = Script::with_banners(false);
    script.print_message("hello").unwrap().start_solver().unwrap();
    script.write_to_file(&path).unwrap();
    assert_eq!(common::read_lines(&path), ["PRINT hello", "START_SOLVER"]);
    assert_eq!(script.len(), 2);

    // writing again after more commands replaces, never appends
    script.close_flightstream().unwrap();
    script.write_to_file(&path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "PRINT hello\nSTART_SOLVER\nCLOSE_FLIGHTSTREAM\n"
    );
}

#[test]
fn write_leaves_no_temp_files_behind() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("script_out.txt");
    let mut script = Script::new();
    script.new_simulation().unwrap();
    script.write_to_file(&path).unwrap();
    let names: Vec<String> = std::fs::read_dir(td.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["script_out.txt"]);
}

#[test]
fn hard_reset_removes_file_and_clears_buffer() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("script_out.txt");
    let mut script = Script::new();
    script.start_solver().unwrap();
    script.write_to_file(&path).unwrap();

    script.hard_reset(&path).unwrap();
    assert!(script.is_empty());
    assert!(!path.exists());
    script.hard_reset(&path).unwrap();
}

#[cfg(unix)]
#[test]
fn hard_reset_reports_failures_other_than_missing() {
    let td = tempfile::tempdir().expect("tempdir");
    // a non-empty directory cannot be removed as a file
    let path = td.path().join("busy");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("inner"), "x").unwrap();

    let mut script = Script::new();
    script.start_solver().unwrap();
    match script.hard_reset(&path) {
        Err(ScriptError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(script.is_empty(), "buffer is cleared even when removal fails");
}
