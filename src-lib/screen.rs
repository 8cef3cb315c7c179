// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! The display surface and event source the harness drives

use crate::canvas::Canvas;
use crate::error::BenchError;

/// A display surface paired with its event source.
///
/// Drawing happens on the [`Canvas`] returned by [`Screen::frame`], which keeps its size for the
/// lifetime of the screen. Nothing becomes visible until [`Screen::present`].
pub trait Screen {
    fn frame(&mut self) -> &mut Canvas;

    /// Show the current frame.
    fn present(&mut self) -> Result<(), BenchError>;

    fn set_title(&mut self, title: &str);

    /// Drain pending input events. Once the user has asked to quit this returns
    /// [`BenchError::ExitRequested`], and keeps returning it on every later call.
    fn pump_events(&mut self) -> Result<(), BenchError>;

    fn width(&mut self) -> u32 {
        self.frame().width()
    }

    fn height(&mut self) -> u32 {
        self.frame().height()
    }
}
