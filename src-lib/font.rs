// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! Bitmap glyph lookup and text layout

use std::mem;

use font8x8::{UnicodeFonts, BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS};

/// Side length of an unscaled glyph, in pixels
pub const GLYPH_SIZE: u32 = 8;

/// Largest accepted scale. One glyph cell is then 512 pixels square.
pub const MAX_SCALE: u32 = 64;

/// One byte per row, bit 0 is the leftmost column.
pub type Glyph = [u8; 8];

const BLANK: Glyph = [0; 8];

/// Hollow box shown for characters none of the embedded tables cover
const PLACEHOLDER: Glyph = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// An embedded 8x8 bitmap font, blown up by an integer `scale`. The scale plays the role of a point
/// size: every glyph cell is `8 * scale` pixels square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    scale: u32,
}

impl Font {
    pub fn new(scale: u32) -> Self {
        Font {
            scale: scale.clamp(1, MAX_SCALE),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn cell_width(&self) -> u32 {
        GLYPH_SIZE * self.scale
    }

    pub fn cell_height(&self) -> u32 {
        GLYPH_SIZE * self.scale
    }

    pub fn glyph(&self, character: char) -> Glyph {
        BASIC_FONTS
            .get(character)
            .or_else(|| LATIN_FONTS.get(character))
            .or_else(|| GREEK_FONTS.get(character))
            .or_else(|| BOX_FONTS.get(character))
            .or_else(|| BLOCK_FONTS.get(character))
            .unwrap_or(if character.is_whitespace() { BLANK } else { PLACEHOLDER })
    }
}

/// The two faces the harness draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fonts {
    /// status text, banners and the results screen
    pub ui: Font,
    /// the tiny face the glyph workloads stress
    pub test: Font,
}

/// Greedy word wrap into lines of at most `columns` characters. Runs of whitespace collapse to a
/// single space. A word longer than a whole line is split across as many lines as it needs.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_length = 0;

    for word in text.split_whitespace() {
        let mut characters: Vec<char> = word.chars().collect();

        while characters.len() > columns {
            if line_length > 0 {
                lines.push(mem::take(&mut line));
                line_length = 0;
            }
            let rest = characters.split_off(columns);
            lines.push(characters.into_iter().collect());
            characters = rest;
        }

        let needed = if line_length == 0 {
            characters.len()
        } else {
            line_length + 1 + characters.len()
        };
        if needed > columns {
            lines.push(mem::take(&mut line));
            line_length = 0;
        }
        if line_length > 0 {
            line.push(' ');
            line_length += 1;
        }
        line.extend(characters.iter());
        line_length += characters.len();
    }

    if line_length > 0 {
        lines.push(line);
    }
    lines
}
