// ABOUTME: Integration tests for the command runner.
// ABOUTME: Exercise run/stream against stub executables.

#![cfg(unix)]

mod support;

use std::time::Duration;

use futures::StreamExt;
use kivotos::exec::{self, CommandSpec, ExecError, LogSource};
use support::StubTool;

/// Test: run returns stdout exactly as written, beyond one pipe buffer.
#[tokio::test]
async fn run_captures_large_stdout_exactly() {
    support::init_tracing();
    let stub = StubTool::new(
        "i=0\nwhile [ $i -lt 4000 ]; do echo 0123456789012345678901234567890123456789; i=$((i+1)); done",
    );

    let output = exec::run(&CommandSpec::new(stub.path()))
        .await
        .expect("run should succeed");

    let expected = "0123456789012345678901234567890123456789\n".repeat(4000);
    assert!(output.success());
    assert_eq!(output.stdout, expected);
    assert_eq!(output.stderr, "");
}

/// Test: a non-zero exit is returned as data, not a runner error.
#[tokio::test]
async fn nonzero_exit_is_data_not_error() {
    let stub = StubTool::new("echo out\necho err >&2\nexit 3");

    let output = exec::run(&CommandSpec::new(stub.path()))
        .await
        .expect("run should succeed even on non-zero exit");

    assert!(!output.success());
    assert_eq!(output.exit_code, 3);
    assert_eq!(output.stdout, "out\n");
    assert_eq!(output.stderr, "err\n");
}

/// Test: a nonexistent executable fails with ToolNotFound, for both paths.
#[tokio::test]
async fn missing_tool_fails_without_spawning() {
    let spec = CommandSpec::new("/nonexistent/kivotos-test-tool");

    let run_err = exec::run(&spec).await.expect_err("run should fail");
    assert!(matches!(run_err, ExecError::ToolNotFound(_)));

    let stream_err = exec::stream(&spec).expect_err("stream should fail");
    assert!(matches!(stream_err, ExecError::ToolNotFound(_)));
}

/// Test: stream handles are debug-formattable, so assertion helpers that
/// render the Ok variant keep compiling.
#[tokio::test]
async fn stream_handle_is_debug_formattable() {
    let stub = StubTool::new("printf 'x\\n'");
    let mut stream = exec::stream(&CommandSpec::new(stub.path())).expect("stream should start");
    let rendered = format!("{stream:?}");
    assert!(rendered.contains("LineStream"));
    stream.cancel();
}

/// Test: streamed lines preserve write order and sequence monotonically.
#[tokio::test]
async fn stream_preserves_write_order() {
    let stub = StubTool::new("printf 'alpha\\nbeta\\ngamma\\n'");

    let mut stream = exec::stream(&CommandSpec::new(stub.path())).expect("stream should start");
    let mut lines = Vec::new();
    while let Some(line) = stream.next_line().await {
        lines.push(line);
    }

    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["alpha", "beta", "gamma"]);
    assert!(lines.windows(2).all(|w| w[0].sequence < w[1].sequence));
    assert!(lines.iter().all(|l| l.source == LogSource::Stdout));
}

/// Test: a trailing partial line is flushed when the process exits.
#[tokio::test]
async fn stream_flushes_trailing_partial_line() {
    let stub = StubTool::new("printf 'complete\\npartial'");

    let mut stream = exec::stream(&CommandSpec::new(stub.path())).expect("stream should start");
    let mut texts = Vec::new();
    while let Some(line) = stream.next_line().await {
        texts.push(line.text);
    }

    assert_eq!(texts, ["complete", "partial"]);
}

/// Test: the stream ends normally on a non-zero exit; emitted lines stay valid.
#[tokio::test]
async fn stream_ends_normally_on_nonzero_exit() {
    let stub = StubTool::new("echo only\nexit 7");

    let mut stream = exec::stream(&CommandSpec::new(stub.path())).expect("stream should start");
    let first = stream.next_line().await.expect("one line expected");
    assert_eq!(first.text, "only");
    assert!(stream.next_line().await.is_none());
}

/// Test: stderr lines are streamed alongside stdout.
#[tokio::test]
async fn stream_carries_both_pipes() {
    let stub = StubTool::new("echo out\necho err >&2");

    let stream = exec::stream(&CommandSpec::new(stub.path())).expect("stream should start");
    let lines: Vec<_> = stream.collect().await;

    assert_eq!(lines.len(), 2);
    assert!(lines
        .iter()
        .any(|l| l.source == LogSource::Stdout && l.text == "out"));
    assert!(lines
        .iter()
        .any(|l| l.source == LogSource::Stderr && l.text == "err"));
}

/// Test: cancelling mid-stream yields no further lines and the process is
/// confirmed terminated.
#[tokio::test]
async fn cancel_terminates_the_process() {
    let stub = StubTool::new("echo $$ > \"$1\"\necho started\nexec sleep 60");
    let pidfile = stub.scratch("pid");

    let spec = CommandSpec::new(stub.path()).arg(pidfile.display().to_string());
    let mut stream = exec::stream(&spec).expect("stream should start");

    let first = stream.next_line().await.expect("startup line expected");
    assert_eq!(first.text, "started");

    let pid = wait_for_pidfile(&pidfile).await;

    stream.cancel();
    assert!(stream.next_line().await.is_none());

    // The kill is issued before cancel returns; reaping completes
    // asynchronously, so poll for the process entry to disappear.
    for _ in 0..100 {
        if !std::path::Path::new(&format!("/proc/{pid}")).exists() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("stub process {pid} still running after cancel");
}

async fn wait_for_pidfile(path: &std::path::Path) -> String {
    for _ in 0..100 {
        if let Ok(contents) = std::fs::read_to_string(path) {
            let pid = contents.trim().to_string();
            if !pid.is_empty() {
                return pid;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("stub never wrote its pidfile");
}
