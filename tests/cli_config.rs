mod common;

use std::path::Path;

fn write_config(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn dry_run_preview(out: &std::process::Output) -> String {
    common::assert_success(out, "flightscript run --dry-run");
    common::stderr(out)
}

#[test]
fn config_file_executable_beats_fs_exe() {
    let td = tempfile::tempdir().expect("tempdir");
    let cfg = write_config(td.path(), "fs.yaml", "executable: /from/config/FlightStream\n");

    let out = common::flightscript(td.path())
        .env("FS_EXE", "/from/env/FlightStream")
        .arg("--config")
        .arg(&cfg)
        .args(["run", "--dry-run"])
        .output()
        .expect("failed to run flightscript");
    let err = dry_run_preview(&out);
    assert!(err.contains("/from/config/FlightStream -script"), "{err}");
}

#[test]
fn explicit_exe_beats_config_file() {
    let td = tempfile::tempdir().expect("tempdir");
    let cfg = write_config(td.path(), "fs.yaml", "executable: /from/config/FlightStream\n");

    let out = common::flightscript(td.path())
        .arg("--config")
        .arg(&cfg)
        .args(["run", "--dry-run", "--exe", "/explicit/FlightStream"])
        .output()
        .expect("failed to run flightscript");
    let err = dry_run_preview(&out);
    assert!(err.contains("/explicit/FlightStream -script"), "{err}");
}

#[test]
fn fs_exe_used_without_config() {
    let td = tempfile::tempdir().expect("tempdir");
    let out = common::flightscript(td.path())
        .env("FS_EXE", "/from/env/FlightStream")
        .args(["run", "--dry-run"])
        .output()
        .expect("failed to run flightscript");
    let err = dry_run_preview(&out);
    assert!(err.contains("/from/env/FlightStream -script script_out.txt"), "{err}");
}

#[test]
fn config_env_and_home_default_are_found() {
    let td = tempfile::tempdir().expect("tempdir");
    let cfg_dir = td.path().join(".config").join("flightscript");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    write_config(&cfg_dir, "config.yaml", "executable: /home/FlightStream\nhidden: true\n");

    let out = common::flightscript(td.path())
        .args(["run", "--dry-run"])
        .output()
        .expect("failed to run flightscript");
    let err = dry_run_preview(&out);
    assert!(err.contains("/home/FlightStream -hidden -script"), "{err}");

    let other = write_config(td.path(), "other.yaml", "executable: /other/FlightStream\n");
    let out = common::flightscript(td.path())
        .env("FLIGHTSCRIPT_CONFIG", &other)
        .args(["run", "--dry-run"])
        .output()
        .expect("failed to run flightscript");
    let err = dry_run_preview(&out);
    assert!(err.contains("/other/FlightStream -script"), "{err}");
}

#[test]
fn dotenv_file_supplies_environment() {
    let td = tempfile::tempdir().expect("tempdir");
    std::fs::write(td.path().join(".env"), "FS_EXE=/dotenv/FlightStream\n").unwrap();
    let out = common::flightscript(td.path())
        .args(["run", "--dry-run"])
        .output()
        .expect("failed to run flightscript");
    let err = dry_run_preview(&out);
    assert!(err.contains("/dotenv/FlightStream -script"), "{err}");
}

#[test]
fn malformed_config_fails() {
    let td = tempfile::tempdir().expect("tempdir");
    let cfg = write_config(td.path(), "bad.yaml", "executable: [unterminated\n");
    let out = common::flightscript(td.path())
        .arg("--config")
        .arg(&cfg)
        .args(["run", "--dry-run", "--exe", "/x/FlightStream"])
        .output()
        .expect("failed to run flightscript");
    common::assert_exit_code(&out, 1, "flightscript with malformed config");
    assert!(common::stderr(&out).contains("bad.yaml"));
}
