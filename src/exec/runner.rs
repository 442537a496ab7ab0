// ABOUTME: Spawns the management tool as a subprocess.
// ABOUTME: run() captures everything; stream() yields lines lazily.

use std::process::Stdio;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::{Notify, mpsc};

use super::error::ExecError;
use super::spec::CommandSpec;
use super::stream::{LineStream, LogLine, LogSource};

/// Maximum lines buffered between the reader tasks and the consumer.
/// When full, reads pause (backpressure) rather than dropping lines.
const LINE_BUFFER: usize = 256;

/// Captured result of one one-shot invocation.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// Process exit code; `-1` when terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the tool to completion and capture both output pipes.
///
/// Stdin is closed. Both pipes are drained concurrently while awaiting
/// exit, so output larger than a pipe buffer cannot deadlock the child.
/// A non-zero exit is returned as data, not as an error.
pub async fn run(spec: &CommandSpec) -> Result<ExecOutput, ExecError> {
    ensure_present(spec)?;

    let output = Command::new(spec.program())
        .args(spec.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| classify_spawn_error(spec, source))?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Spawn the tool and stream its output line by line.
///
/// Lines from both pipes are sequenced and delivered in write order per
/// pipe. The stream ends on process exit regardless of exit code; partial
/// output already emitted stays valid. Cancelling the returned stream
/// kills the child before the cancel call returns.
pub fn stream(spec: &CommandSpec) -> Result<LineStream, ExecError> {
    ensure_present(spec)?;

    let mut child = Command::new(spec.program())
        .args(spec.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| classify_spawn_error(spec, source))?;

    let stdout = child.stdout.take().ok_or_else(|| ExecError::OutputCapture {
        source: std::io::Error::other("stdout pipe was not captured"),
    })?;
    let stderr = child.stderr.take().ok_or_else(|| ExecError::OutputCapture {
        source: std::io::Error::other("stderr pipe was not captured"),
    })?;

    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    let sequence = Arc::new(AtomicU64::new(0));

    let out_task = tokio::spawn(pump_lines(
        stdout,
        LogSource::Stdout,
        sequence.clone(),
        tx.clone(),
    ));
    let err_task = tokio::spawn(pump_lines(stderr, LogSource::Stderr, sequence, tx));
    let reader_aborts = [out_task.abort_handle(), err_task.abort_handle()];

    let child_slot = Arc::new(Mutex::new(Some(child)));
    let killed = Arc::new(Notify::new());

    // Reaps the child once both pipes are drained, or immediately after a
    // cancel kill. Waking on `killed` keeps the reap independent of pipe
    // EOF, which descendants of the child may hold open.
    let reap_slot = child_slot.clone();
    let reap_killed = killed.clone();
    tokio::spawn(async move {
        let readers = async {
            let _ = out_task.await;
            let _ = err_task.await;
        };
        tokio::select! {
            _ = readers => {}
            _ = reap_killed.notified() => {}
        }
        let taken = reap_slot.lock().take();
        if let Some(mut child) = taken
            && let Err(e) = child.wait().await
        {
            tracing::debug!("failed to reap tool process: {}", e);
        }
    });

    Ok(LineStream::new(rx, child_slot, killed, reader_aborts))
}

/// Read newline-delimited lines from one pipe into the shared channel.
/// A trailing partial line is flushed when the pipe reaches EOF.
async fn pump_lines(
    pipe: impl AsyncRead + Unpin,
    source: LogSource,
    sequence: Arc<AtomicU64>,
    tx: mpsc::Sender<LogLine>,
) {
    let mut lines = BufReader::new(pipe).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(text)) => {
                let line = LogLine {
                    text,
                    sequence: sequence.fetch_add(1, std::sync::atomic::Ordering::Relaxed),
                    source,
                };
                // Consumer gone; stop reading.
                if tx.send(line).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::debug!("tool output pipe read error: {}", e);
                break;
            }
        }
    }
}

fn ensure_present(spec: &CommandSpec) -> Result<(), ExecError> {
    if spec.program().is_file() {
        Ok(())
    } else {
        Err(ExecError::ToolNotFound(spec.program().to_path_buf()))
    }
}

fn classify_spawn_error(spec: &CommandSpec, source: std::io::Error) -> ExecError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ExecError::ToolNotFound(spec.program().to_path_buf())
    } else {
        ExecError::LaunchFailure {
            program: spec.program().display().to_string(),
            source,
        }
    }
}
