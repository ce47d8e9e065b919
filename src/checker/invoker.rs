//! Subprocess execution
//!
//! Checkers are spawned behind the narrow [`CommandRunner`] interface so
//! tests can substitute a mock instead of real processes.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How often a running child is polled for completion
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured output of one subprocess run
#[derive(Debug, Clone, Default)]
pub struct RawOutput {
    /// Everything the process wrote to stdout
    pub stdout: String,
    /// Everything the process wrote to stderr
    pub stderr: String,
    /// Exit code, if the process exited normally
    pub status: Option<i32>,
}

/// Low-level failures of the runner itself
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The process could not be started (typically a missing binary)
    #[error("failed to launch process: {0}")]
    Spawn(#[source] std::io::Error),

    /// The process exceeded its wall-clock bound and was killed
    #[error("process timed out")]
    TimedOut,

    /// I/O error while waiting on the process
    #[error("i/o error while running process: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs an external command with a wall-clock bound
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout and stderr separately,
    /// waiting at most `timeout`.
    fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<RawOutput, RunError>;
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<RawOutput, RunError> {
        log::debug!("running: {program} {}", args.join(" "));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(RunError::Spawn)?;

        // Drain both pipes on threads so a chatty child cannot deadlock
        // against a full pipe buffer while we poll for completion.
        let stdout_handle = drain(child.stdout.take());
        let stderr_handle = drain(child.stderr.take());

        let deadline = Instant::now() + timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RunError::TimedOut);
            }
            std::thread::sleep(POLL_INTERVAL);
        };

        Ok(RawOutput {
            stdout: join_drained(stdout_handle),
            stderr: join_drained(stderr_handle),
            status: status.code(),
        })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<std::thread::JoinHandle<Vec<u8>>> {
    pipe.map(|mut r| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = r.read_to_end(&mut buf);
            buf
        })
    })
}

fn join_drained(handle: Option<std::thread::JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}
