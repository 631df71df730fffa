//! Launch FlightStream against a written script.
//!
//! Command line: `<exe> [-hidden] -script <script_path>`. Success of the
//! tool itself is reported only through its exit status.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::Duration;

#[cfg(feature = "trace")]
use tracing::instrument;

use crate::errors::ScriptError;
use crate::util::exec::{ExecRequest, ExecService};

/// Environment variable naming the FlightStream executable.
pub const EXE_ENV: &str = "FS_EXE";
/// Program looked up on `PATH` when nothing else names the executable.
pub const DEFAULT_PROGRAM: &str = "FlightStream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Run without the GUI.
    pub hidden: bool,
    /// Block until the tool exits.
    pub wait: bool,
    /// Kill the tool after this long; only applies when waiting.
    pub timeout: Option<Duration>,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            hidden: false,
            wait: true,
            timeout: None,
        }
    }
}

#[derive(Debug)]
pub enum Execution {
    /// The tool ran to completion.
    Finished {
        status: ExitStatus,
        duration: Duration,
        stdout: String,
        stderr: String,
    },
    /// The tool was started in the background.
    Started { pid: u32 },
}

impl Execution {
    /// Exit code of a finished run; `None` while running or when killed by a signal.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Execution::Finished { status, .. } => status.code(),
            Execution::Started { .. } => None,
        }
    }

    pub fn success(&self) -> bool {
        match self {
            Execution::Finished { status, .. } => status.success(),
            Execution::Started { .. } => true,
        }
    }
}

/// Arguments passed to the executable, in order.
pub fn script_args(script: &Path, hidden: bool) -> Vec<OsString> {
    let mut args = Vec::with_capacity(3);
    if hidden {
        args.push(OsString::from("-hidden"));
    }
    args.push(OsString::from("-script"));
    args.push(script.as_os_str().to_owned());
    args
}

/// Human-readable command line, for dry runs and logs.
pub fn describe_command(exe: &Path, script: &Path, hidden: bool) -> String {
    let mut parts = vec![exe.display().to_string()];
    parts.extend(
        script_args(script, hidden)
            .iter()
            .map(|a| a.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

#[cfg_attr(
    feature = "trace",
    instrument(
        level = "info",
        err,
        skip(exe, script, options),
        fields(
            flightscript_exe = %exe.display(),
            flightscript_script = %script.display(),
            flightscript_hidden = options.hidden,
            flightscript_wait = options.wait
        )
    )
)]
pub fn execute(
    exe: &Path,
    script: &Path,
    options: &ExecuteOptions,
) -> Result<Execution, ScriptError> {
    if !script.is_file() {
        return Err(ScriptError::io(
            script,
            io::Error::new(io::ErrorKind::NotFound, "script file does not exist"),
        ));
    }
    if has_path_component(exe) && !exe.exists() {
        return Err(ScriptError::Launch {
            program: exe.to_path_buf(),
            reason: "executable does not exist".to_string(),
            source: Some(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        });
    }

    let request = ExecRequest::new(exe.as_os_str())
        .args(script_args(script, options.hidden))
        .timeout(options.timeout)
        .capture_output(true);
    let service = ExecService;

    if !options.wait {
        let pid = service.start(request).map_err(|e| launch_error(exe, e))?;
        return Ok(Execution::Started { pid });
    }
    let out = service.run(request).map_err(|e| launch_error(exe, e))?;
    Ok(Execution::Finished {
        status: out.status,
        duration: out.duration,
        stdout: out.stdout,
        stderr: out.stderr,
    })
}

fn has_path_component(p: &Path) -> bool {
    p.components().count() > 1 || p.is_absolute()
}

fn launch_error(exe: &Path, e: anyhow::Error) -> ScriptError {
    let reason = format!("{e:#}");
    ScriptError::Launch {
        program: exe.to_path_buf(),
        reason,
        source: e.downcast::<io::Error>().ok(),
    }
}

/// Pick the executable: explicit path, then the configured one, then
/// `FS_EXE`, then `FlightStream` on `PATH`.
pub fn resolve_executable(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<PathBuf, ScriptError> {
    resolve_executable_with(explicit, configured, std::env::var_os(EXE_ENV))
}

pub(crate) fn resolve_executable_with(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    env_value: Option<OsString>,
) -> Result<PathBuf, ScriptError> {
    if let Some(p) = explicit.or(configured) {
        return Ok(p.to_path_buf());
    }
    if let Some(v) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(v));
    }
    which::which(DEFAULT_PROGRAM).map_err(|e| ScriptError::Launch {
        program: PathBuf::from(DEFAULT_PROGRAM),
        reason: format!("not found on PATH ({e}); pass --exe or set {EXE_ENV}"),
        source: Some(io::Error::new(io::ErrorKind::NotFound, e.to_string())),
    })
}
