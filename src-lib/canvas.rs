// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! Software frame buffer and the drawing primitives the workloads are built from

use crate::font::{Font, Glyph, GLYPH_SIZE};

/// A packed color in the `0x00RRGGBB` layout softbuffer presents.
pub type Color = u32;

pub const BLACK: Color = 0x00000000;
pub const WHITE: Color = 0x00FFFFFF;

#[inline(always)]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    u32::from_le_bytes([b, g, r, 0]) // BE XRGB == LE BGRX
}

/// A fixed-size pixel buffer. Every primitive clips against the buffer bounds, so callers may pass
/// coordinates that are partially or entirely off-screen.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Zero dimensions are bumped to 1, as there is no such thing as an empty surface.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Canvas {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index_of(x as i64, y as i64).map(|index| self.pixels[index])
    }

    #[inline(always)]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel_wide(x as i64, y as i64, color);
    }

    #[inline(always)]
    fn set_pixel_wide(&mut self, x: i64, y: i64, color: Color) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x = x as i64;
        let y = y as i64;
        let row_start = y.clamp(0, self.height as i64);
        let row_end = (y + height as i64).clamp(0, self.height as i64);
        for row in row_start..row_end {
            self.fill_span(row, x, x + width as i64, color);
        }
    }

    /// Fill the half-open span `[x_start, x_end)` of a single row.
    #[inline(always)]
    fn fill_span(&mut self, row: i64, x_start: i64, x_end: i64, color: Color) {
        if row < 0 || row >= self.height as i64 {
            return;
        }
        let x_start = x_start.clamp(0, self.width as i64) as usize;
        let x_end = x_end.clamp(0, self.width as i64) as usize;
        if x_start >= x_end {
            return;
        }
        let row_offset = row as usize * self.width as usize;
        self.pixels[row_offset + x_start..row_offset + x_end].fill(color);
    }

    /// Filled disc, drawn as one horizontal span per row.
    pub fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: u32, color: Color) {
        let radius = radius as i64;
        let center_x = center_x as i64;
        let center_y = center_y as i64;
        let radius_squared = radius * radius;
        for dy in -radius..=radius {
            let half_width = ((radius_squared - dy * dy) as f64).sqrt() as i64;
            self.fill_span(center_y + dy, center_x - half_width, center_x + half_width + 1, color);
        }
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let step_x = if x < x1 { 1 } else { -1 };
        let step_y = if y < y1 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.set_pixel_wide(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let doubled_error = 2 * error;
            if doubled_error >= dy {
                error += dy;
                x += step_x;
            }
            if doubled_error <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Blit one glyph with its top-left corner at (`x`, `y`). When a `background` is given the whole
    /// glyph cell is painted first, otherwise unset glyph bits stay transparent.
    pub fn draw_glyph(
        &mut self,
        x: i32,
        y: i32,
        glyph: &Glyph,
        scale: u32,
        color: Color,
        background: Option<Color>,
    ) {
        let cell = GLYPH_SIZE.saturating_mul(scale);
        if let Some(background) = background {
            self.fill_rect(x, y, cell, cell, background);
        }

        let scale_wide = scale as i64;
        for (row_index, row) in glyph.iter().enumerate() {
            let pixel_y = y as i64 + row_index as i64 * scale_wide;
            for column in 0..GLYPH_SIZE {
                // bit 0 is the leftmost column
                if row & (1 << column) != 0 {
                    let pixel_x = x as i64 + column as i64 * scale_wide;
                    let row_start = pixel_y.clamp(0, self.height as i64);
                    let row_end = (pixel_y + scale_wide).clamp(0, self.height as i64);
                    for pixel_row in row_start..row_end {
                        self.fill_span(pixel_row, pixel_x, pixel_x + scale_wide, color);
                    }
                }
            }
        }
    }

    /// Draw a single line of text. Returns the x coordinate just past the last glyph.
    pub fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: &Font,
        color: Color,
        background: Option<Color>,
    ) -> i32 {
        let advance = font.cell_width() as i32;
        let mut cursor = x;
        for character in text.chars() {
            self.draw_glyph(cursor, y, &font.glyph(character), font.scale(), color, background);
            cursor = cursor.saturating_add(advance);
        }
        cursor
    }

    /// Copy this canvas into a destination buffer of possibly different dimensions, such as a window
    /// surface that has been resized. Anything outside the canvas is painted black.
    pub fn copy_to(&self, destination: &mut [Color], destination_width: u32, destination_height: u32) {
        debug_assert_eq!(
            destination.len(),
            destination_width as usize * destination_height as usize,
            "copy_to() passed buffer of wrong size"
        );

        if destination_width == self.width && destination_height == self.height {
            destination.copy_from_slice(&self.pixels);
            return;
        }

        let copy_width = self.width.min(destination_width) as usize;
        let source_stride = self.width as usize;
        let destination_stride = destination_width as usize;
        for (row, destination_row) in destination.chunks_exact_mut(destination_stride).enumerate() {
            if row < self.height as usize {
                let source_row = &self.pixels[row * source_stride..row * source_stride + copy_width];
                destination_row[..copy_width].copy_from_slice(source_row);
                destination_row[copy_width..].fill(BLACK);
            } else {
                destination_row.fill(BLACK);
            }
        }
    }
}
