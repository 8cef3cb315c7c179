// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! A [`Screen`] with no window behind it, for tests and benchmarks

use crate::canvas::Canvas;
use crate::error::BenchError;
use crate::screen::Screen;

pub struct HeadlessScreen {
    frame: Canvas,
    title: String,
    presented: usize,
    pumped: usize,
    /// number of successful pumps before an exit request is simulated
    exit_after: Option<usize>,
}

impl HeadlessScreen {
    pub fn new(width: u32, height: u32) -> Self {
        HeadlessScreen {
            frame: Canvas::new(width, height),
            title: String::new(),
            presented: 0,
            pumped: 0,
            exit_after: None,
        }
    }

    /// Simulate the user pressing Escape once `pumps` event pumps have gone by.
    pub fn exit_after(mut self, pumps: usize) -> Self {
        self.exit_after = Some(pumps);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn pumped(&self) -> usize {
        self.pumped
    }

    pub fn canvas(&self) -> &Canvas {
        &self.frame
    }
}

impl Screen for HeadlessScreen {
    fn frame(&mut self) -> &mut Canvas {
        &mut self.frame
    }

    fn present(&mut self) -> Result<(), BenchError> {
        self.presented += 1;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn pump_events(&mut self) -> Result<(), BenchError> {
        if self.exit_after.is_some_and(|limit| self.pumped >= limit) {
            return Err(BenchError::ExitRequested);
        }
        self.pumped += 1;
        Ok(())
    }
}
