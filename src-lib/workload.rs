// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! The drawing workloads and the suites that sequence them

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canvas::{rgb, Color};
use crate::error::BenchError;
use crate::font::{self, Fonts};
use crate::screen::Screen;

/// Preamble of the Universal Declaration of Human Rights in a few scripts, so the text workload
/// exercises more than plain ASCII.
pub const PARAGRAPHS: [&str; 4] = [
    "Whereas disregard and contempt for human rights have resulted in barbarous acts which have outraged the conscience of mankind, and the advent of a world in which human beings shall enjoy freedom of speech and belief and freedom from fear and want has been proclaimed as the highest aspiration of the common people",
    "že zneuznání lidských práv a pohrdání jimi vedlo k barbarským činům, urážejícím svědomí lidstva, a že vybudování světa, ve kterém lidé, zbavení strachu a nouze, se budou těšiti svobodě projevu a přesvĕdčení, bylo prohlášeno za nejvyšší cíl lidu",
    "da die Nichtanerkennung und Verachtung der Menschenrechte zu Akten der Barbarei geführt haben, die das Gewissen der Menschheit mit Empörung erfüllen, und da verkündet worden ist, daß einer Welt, in der die Menschen Rede- und Glaubensfreiheit und Freiheit von Furcht und Not genießen, das höchste Streben des Menschen gilt",
    "ولما كان تناسي حقوق الإنسان وازدراؤها قد أفضيا إلى أعمال همجية آذت الضمير الإنساني، وكان غاية ما يرنو إليه عامة البشر انبثاق عالم يتمتع فيه الفرد بحرية القول والعقيدة ويتحرر من الفزع والفاقة.",
];

/// One timed drawing routine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workload {
    PixelByPixel,
    Rectangle,
    RandomCharacters,
    MeaningfulText,
    Fill,
    RandomRectangles,
    RandomCircles,
    RandomLines,
    RandomPixels,
}

const STANDARD_WORKLOADS: [Workload; 5] = [
    Workload::PixelByPixel,
    Workload::Rectangle,
    Workload::RandomCharacters,
    Workload::MeaningfulText,
    Workload::Fill,
];

const EXTENDED_WORKLOADS: [Workload; 9] = [
    Workload::PixelByPixel,
    Workload::Rectangle,
    Workload::RandomCharacters,
    Workload::MeaningfulText,
    Workload::Fill,
    Workload::RandomRectangles,
    Workload::RandomCircles,
    Workload::RandomLines,
    Workload::RandomPixels,
];

/// An ordered list of workloads
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    /// fills and glyphs only
    Standard,
    /// the standard suite followed by the random-shape workloads
    #[default]
    Extended,
}

impl Suite {
    pub fn workloads(self) -> &'static [Workload] {
        match self {
            Suite::Standard => &STANDARD_WORKLOADS,
            Suite::Extended => &EXTENDED_WORKLOADS,
        }
    }
}

/// Everything the harness needs to run a sequence of workloads
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkPlan {
    pub workloads: Vec<Workload>,
    /// guard frames shown before each workload
    pub start_delay: Duration,
    /// guard frames shown after each workload
    pub end_delay: Duration,
    pub shape_count: u32,
}

impl Workload {
    pub fn name(self) -> &'static str {
        match self {
            Workload::PixelByPixel => "Filling screen pixel by pixel",
            Workload::Rectangle => "Filling screen with a rectangle",
            Workload::RandomCharacters => "Filling screen with random characters",
            Workload::MeaningfulText => "Filling screen with meaningful text",
            Workload::Fill => "Filling screen with fill",
            Workload::RandomRectangles => "Drawing random rectangles",
            Workload::RandomCircles => "Drawing random circles",
            Workload::RandomLines => "Drawing random lines",
            Workload::RandomPixels => "Drawing random pixels",
        }
    }

    /// Run the workload body. Every outer iteration pumps events, so an exit request surfaces as
    /// [`BenchError::ExitRequested`] within one row, line or shape.
    pub fn run<S, R>(
        self,
        screen: &mut S,
        fonts: &Fonts,
        color: Color,
        shape_count: u32,
        rng: &mut R,
    ) -> Result<(), BenchError>
    where
        S: Screen + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Workload::PixelByPixel => pixel_by_pixel(screen, color),
            Workload::Rectangle => {
                screen.pump_events()?;
                let frame = screen.frame();
                let (width, height) = (frame.width(), frame.height());
                frame.fill_rect(0, 0, width, height, color);
                screen.present()
            }
            Workload::RandomCharacters => random_characters(screen, fonts, color, rng),
            Workload::MeaningfulText => meaningful_text(screen, fonts, color),
            Workload::Fill => {
                screen.pump_events()?;
                screen.frame().fill(color);
                screen.present()
            }
            Workload::RandomRectangles => random_shapes(screen, shape_count, rng, |frame, rng| {
                let (width, height) = (frame.width(), frame.height());
                let x = rng.gen_range(0..width);
                let y = rng.gen_range(0..height);
                let rect_width = rng.gen_range(1..=width - x);
                let rect_height = rng.gen_range(1..=height - y);
                frame.fill_rect(x as i32, y as i32, rect_width, rect_height, random_color(rng));
            }),
            Workload::RandomCircles => random_shapes(screen, shape_count, rng, |frame, rng| {
                let (width, height) = (frame.width(), frame.height());
                let max_radius = (width.min(height) / 4).max(1);
                let radius = rng.gen_range(1..=max_radius);
                let x = rng.gen_range(0..width);
                let y = rng.gen_range(0..height);
                frame.fill_circle(x as i32, y as i32, radius, random_color(rng));
            }),
            Workload::RandomLines => random_shapes(screen, shape_count, rng, |frame, rng| {
                let (width, height) = (frame.width(), frame.height());
                let x0 = rng.gen_range(0..width);
                let y0 = rng.gen_range(0..height);
                let x1 = rng.gen_range(0..width);
                let y1 = rng.gen_range(0..height);
                frame.draw_line(x0 as i32, y0 as i32, x1 as i32, y1 as i32, random_color(rng));
            }),
            Workload::RandomPixels => random_shapes(screen, shape_count, rng, |frame, rng| {
                let x = rng.gen_range(0..frame.width());
                let y = rng.gen_range(0..frame.height());
                frame.set_pixel(x as i32, y as i32, random_color(rng));
            }),
        }
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    rgb(rng.gen(), rng.gen(), rng.gen())
}

fn pixel_by_pixel<S: Screen + ?Sized>(screen: &mut S, color: Color) -> Result<(), BenchError> {
    let height = screen.height() as i32;
    let width = screen.width() as i32;
    for y in 0..height {
        screen.pump_events()?;
        let frame = screen.frame();
        for x in 0..width {
            frame.set_pixel(x, y, color);
        }
        screen.present()?;
    }
    Ok(())
}

/// One random printable ASCII character per cell. Cells are sized by the UI font while the glyphs
/// come from the test font, so the grid is sparse.
fn random_characters<S, R>(screen: &mut S, fonts: &Fonts, color: Color, rng: &mut R) -> Result<(), BenchError>
where
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    let height = screen.height();
    let width = screen.width();
    let cell_width = fonts.ui.cell_width() as usize;
    let cell_height = fonts.ui.cell_height() as usize;

    for y in (0..height).step_by(cell_height) {
        screen.pump_events()?;
        let frame = screen.frame();
        for x in (0..width).step_by(cell_width) {
            let character = rng.gen_range('!'..='~');
            frame.draw_glyph(x as i32, y as i32, &fonts.test.glyph(character), fonts.test.scale(), color, None);
        }
        screen.present()?;
    }
    Ok(())
}

fn meaningful_text<S: Screen + ?Sized>(screen: &mut S, fonts: &Fonts, color: Color) -> Result<(), BenchError> {
    let height = screen.height();
    let width = screen.width();
    let columns = (width / fonts.test.cell_width()).max(1) as usize;
    let lines: Vec<String> = PARAGRAPHS
        .iter()
        .flat_map(|paragraph| font::wrap(paragraph, columns))
        .collect();

    let rows = (0..height).step_by(fonts.test.cell_height() as usize);
    for (y, line) in rows.zip(lines.iter().cycle()) {
        screen.pump_events()?;
        screen.frame().draw_text(0, y as i32, line, &fonts.test, color, None);
        screen.present()?;
    }
    Ok(())
}

/// Draw `count` random primitives, presenting after each one.
fn random_shapes<S, R, F>(screen: &mut S, count: u32, rng: &mut R, mut draw: F) -> Result<(), BenchError>
where
    S: Screen + ?Sized,
    R: Rng + ?Sized,
    F: FnMut(&mut crate::canvas::Canvas, &mut R),
{
    for _ in 0..count {
        screen.pump_events()?;
        draw(screen.frame(), rng);
        screen.present()?;
    }
    Ok(())
}
