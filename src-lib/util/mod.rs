// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! Various utilities

pub mod custom_serializer;
pub mod frame_limiter;
pub mod numeric;
