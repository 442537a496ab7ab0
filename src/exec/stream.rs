// ABOUTME: Cancellable line stream over a live tool subprocess.
// ABOUTME: Owns the child handle and guarantees single termination.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;
use tokio::process::Child;
use tokio::sync::{Notify, mpsc};
use tokio::task::AbortHandle;

/// One line of tool output, consumed and discarded by the reader.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub text: String,
    /// Monotonic among lines from the same pipe. Sequences from the two
    /// pipes interleave without a total-order guarantee.
    pub sequence: u64,
    pub source: LogSource,
}

/// Which pipe a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    Stdout,
    Stderr,
}

/// A live, cancellable, line-oriented read of a tool subprocess.
///
/// Single-pass: the stream ends when the process exits, and re-streaming
/// means spawning a new process. The child is terminated exactly once —
/// on natural exit, on [`cancel`](Self::cancel), or on drop.
pub struct LineStream {
    rx: mpsc::Receiver<LogLine>,
    child: Arc<Mutex<Option<Child>>>,
    killed: Arc<Notify>,
    reader_aborts: [AbortHandle; 2],
    cancelled: bool,
}

impl LineStream {
    pub(crate) fn new(
        rx: mpsc::Receiver<LogLine>,
        child: Arc<Mutex<Option<Child>>>,
        killed: Arc<Notify>,
        reader_aborts: [AbortHandle; 2],
    ) -> Self {
        Self {
            rx,
            child,
            killed,
            reader_aborts,
            cancelled: false,
        }
    }

    /// Next line, or `None` once the process has exited and the buffer is
    /// drained. Suspends while the child is quiet.
    pub async fn next_line(&mut self) -> Option<LogLine> {
        self.rx.recv().await
    }

    /// Stop the stream and terminate the child.
    ///
    /// The kill is issued to the OS before this returns; reaping completes
    /// asynchronously. No further lines are yielded. Idempotent.
    pub fn cancel(&mut self) {
        self.shutdown();
        self.rx.close();
        // Discard anything already buffered; cancelled means no further
        // lines, not "whatever was in flight".
        while self.rx.try_recv().is_ok() {}
    }

    fn shutdown(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        if let Some(child) = self.child.lock().as_mut()
            && let Err(e) = child.start_kill()
        {
            tracing::debug!("failed to signal tool process: {}", e);
        }
        for handle in &self.reader_aborts {
            handle.abort();
        }
        self.killed.notify_one();
    }
}

// Manual impl: the receiver and abort handles carry no useful state to
// print, so only expose the cancellation flag.
impl std::fmt::Debug for LineStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineStream")
            .field("cancelled", &self.cancelled)
            .finish_non_exhaustive()
    }
}

impl Stream for LineStream {
    type Item = LogLine;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl Drop for LineStream {
    fn drop(&mut self) {
        self.shutdown();
    }
}
