// ABOUTME: Stateful wrapper around one live log-follow invocation.
// ABOUTME: Idle -> Streaming -> {Completed | Cancelled | Failed}; restart is clean.

use super::ServiceError;
use crate::exec::{self, CommandSpec, LineStream, LogLine};

/// State of a streamed log view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSessionState {
    Idle,
    Streaming,
    Completed,
    Cancelled,
    Failed,
}

/// A restartable log view over one invocation spec.
///
/// Holds at most one live stream. Starting from any terminal state
/// discards the previous process and output; there are no resume
/// semantics.
pub struct LogSession {
    spec: CommandSpec,
    state: LogSessionState,
    stream: Option<LineStream>,
}

impl LogSession {
    pub(crate) fn new(spec: CommandSpec) -> Self {
        Self {
            spec,
            state: LogSessionState::Idle,
            stream: None,
        }
    }

    pub fn state(&self) -> LogSessionState {
        self.state
    }

    /// Begin (or restart) streaming. Any previous stream is cancelled
    /// first, so the old process never outlives the restart.
    pub fn start(&mut self) -> Result<(), ServiceError> {
        if let Some(mut old) = self.stream.take() {
            old.cancel();
        }
        match exec::stream(&self.spec) {
            Ok(stream) => {
                self.stream = Some(stream);
                self.state = LogSessionState::Streaming;
                Ok(())
            }
            Err(e) => {
                self.state = LogSessionState::Failed;
                Err(e.into())
            }
        }
    }

    /// Next line, or `None` once the stream has ended. Natural process
    /// exit moves the session to `Completed`.
    pub async fn next_line(&mut self) -> Option<LogLine> {
        let stream = self.stream.as_mut()?;
        match stream.next_line().await {
            Some(line) => Some(line),
            None => {
                self.stream = None;
                if self.state == LogSessionState::Streaming {
                    self.state = LogSessionState::Completed;
                }
                None
            }
        }
    }

    /// Stop streaming and terminate the process. No effect when not
    /// streaming.
    pub fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.cancel();
            self.state = LogSessionState::Cancelled;
        }
    }
}
