// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! This library is used by the draw-bench application. It is split out of the binary so that
//! criterion can benchmark the drawing primitives and workloads, and so the timing harness can be
//! tested without opening a window.
//!
//! **This library will not be following semantic-versioning** as it is not intended to be public
//! API.

pub mod canvas;
pub mod error;
pub mod font;
#[cfg(any(test, feature = "benchmark"))]
pub mod headless;
pub mod results;
pub mod runner;
pub mod screen;
pub mod settings;
pub mod util;
pub mod workload;
