// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

use thiserror::Error;

/// Everything that can stop the harness before the user dismisses the results screen.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The user closed the window or pressed Escape. This is a cancellation, not a failure.
    #[error("exit requested")]
    ExitRequested,
    /// The results phase was reached without a single recorded test.
    #[error("no tests were run")]
    NoResults,
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Os(#[from] winit::error::OsError),
    #[error("display surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
    /// The event loop stopped before a window was ever created.
    #[error("window is not available")]
    WindowUnavailable,
}

impl BenchError {
    /// Process exit code for this error. Exit requests count as a normal quit.
    pub fn exit_code(&self) -> u8 {
        match self {
            BenchError::ExitRequested => 0,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exit_request_is_a_normal_quit() {
        assert_eq!(BenchError::ExitRequested.exit_code(), 0);
    }

    #[test]
    fn no_results_is_a_failure() {
        assert_eq!(BenchError::NoResults.exit_code(), 1);
        assert_eq!(BenchError::WindowUnavailable.exit_code(), 1);
    }
}
