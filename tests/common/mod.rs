#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variables that would let the host leak into a test run.
const SCRUBBED_ENV: &[&str] = &[
    "FS_EXE",
    "FLIGHTSCRIPT_CONFIG",
    "FLIGHTSCRIPT_SCRIPT",
    "FLIGHTSCRIPT_HIDDEN",
    "FLIGHTSCRIPT_TIMEOUT",
    "FLIGHTSCRIPT_BANNERS",
    "FLIGHTSCRIPT_COLOR",
    "FLIGHTSCRIPT_LOG",
    "RUST_LOG",
];

/// `flightscript` running in `dir` with `HOME` pointed at `dir` and a clean environment.
pub fn flightscript(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flightscript"));
    cmd.current_dir(dir).env("HOME", dir).env("NO_COLOR", "1");
    for key in SCRUBBED_ENV {
        cmd.env_remove(key);
    }
    cmd
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

pub fn assert_success(out: &Output, what: &str) {
    assert!(
        out.status.success(),
        "{what} exited non-zero: {:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        stdout(out),
        stderr(out)
    );
}

pub fn assert_exit_code(out: &Output, code: i32, what: &str) {
    assert_eq!(
        out.status.code(),
        Some(code),
        "{what}: unexpected exit status\nstdout:\n{}\nstderr:\n{}",
        stdout(out),
        stderr(out)
    );
}

/// A stand-in for FlightStream: records its arguments (one per line) to
/// `args.log` next to itself, then runs `body`.
#[cfg(unix)]
pub fn fake_flightstream(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let exe = dir.join("FlightStream");
    let log = dir.join("args.log");
    let script = format!(
        "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\"; done > '{}'\n{body}\n",
        log.display()
    );
    std::fs::write(&exe, script).expect("write fake FlightStream");
    let mut perms = std::fs::metadata(&exe).expect("stat").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&exe, perms).expect("chmod");
    exe
}

/// Arguments recorded by [`fake_flightstream`].
pub fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}
