use std::ffi::OsString;
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use wait_timeout::ChildExt;

/// Structured process launches with optional timeouts and output capture.
#[derive(Debug, Clone, Default)]
pub struct ExecService;

impl ExecService {
    fn command(&self, request: &ExecRequest) -> Command {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args);
        cmd
    }

    fn spawn(&self, request: &ExecRequest, mut cmd: Command) -> Result<Child> {
        cmd.spawn().with_context(|| {
            format!(
                "failed to spawn {:?} with args {:?}",
                request.program, request.args
            )
        })
    }

    /// Start the process and return its id without waiting for it.
    ///
    /// A detached thread waits on the child so it is reaped when it exits
    /// while this process is still alive.
    pub fn start(&self, request: ExecRequest) -> Result<u32> {
        let mut cmd = self.command(&request);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let mut child = self.spawn(&request, cmd)?;
        let pid = child.id();
        std::thread::Builder::new()
            .name(format!("reap-{pid}"))
            .spawn(move || {
                let _ = child.wait();
            })
            .context("failed to start the process waiter thread")?;
        Ok(pid)
    }

    /// Run to completion, killing the child when the timeout elapses.
    pub fn run(&self, request: ExecRequest) -> Result<ExecOutput> {
        let mut cmd = self.command(&request);
        if request.capture_output {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        }
        let started = Instant::now();
        let mut child = self.spawn(&request, cmd)?;

        // Drain pipes concurrently so a chatty child cannot block on a full pipe.
        let stdout_reader = child.stdout.take().map(read_stream);
        let stderr_reader = child.stderr.take().map(read_stream);

        let status = match request.timeout {
            None => child.wait().context("failed to wait for process")?,
            Some(timeout) => match child
                .wait_timeout(timeout)
                .context("failed to wait with timeout")?
            {
                Some(status) => status,
                None => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(anyhow!(
                        "command {:?} timed out after {}",
                        request.program,
                        humantime::format_duration(timeout)
                    ));
                }
            },
        };

        let duration = started.elapsed();
        let stdout = join_stream(stdout_reader)?;
        let stderr = join_stream(stderr_reader)?;

        Ok(ExecOutput {
            status,
            duration,
            stdout,
            stderr,
        })
    }
}

fn read_stream<R: io::Read + Send + 'static>(mut reader: R) -> JoinHandle<io::Result<String>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

fn join_stream(handle: Option<JoinHandle<io::Result<String>>>) -> Result<String> {
    match handle {
        None => Ok(String::new()),
        Some(h) => h
            .join()
            .map_err(|_| anyhow!("output reader thread panicked"))?
            .context("failed to read process output"),
    }
}

#[derive(Debug, Default)]
pub struct ExecRequest {
    program: OsString,
    args: Vec<OsString>,
    timeout: Option<Duration>,
    capture_output: bool,
}

impl ExecRequest {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }
}

#[derive(Debug)]
pub struct ExecOutput {
    pub status: std::process::ExitStatus,
    pub duration: Duration,
    pub stdout: String,
    pub stderr: String,
}
