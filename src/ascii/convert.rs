// SPDX-License-Identifier: MPL-2.0
//! Conversion of decoded RGBA frames into character grids.
//!
//! The decoder already scales frames to one pixel per cell, so conversion is a
//! single pass over the buffer.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use super::charset::GlyphRamp;
use crate::config::defaults::GLYPH_ASPECT;

/// Rec. 601 luma weights.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Colour bits dropped when grouping glyphs into same-colour runs.
const RUN_COLOR_MASK: u8 = 0xF0;

/// One character of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    /// Source colour after the brightness multiplier.
    pub rgb: [u8; 3],
    /// Luminance in `[0, 1]` after the brightness multiplier.
    pub luminance: f32,
}

/// A frame rendered as `columns × rows` cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiFrame {
    columns: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl AsciiFrame {
    /// Converts an RGBA buffer of exactly `columns × rows` pixels.
    ///
    /// Returns `None` when the buffer is smaller than the grid.
    #[must_use]
    pub fn from_rgba(
        rgba: &[u8],
        columns: u32,
        rows: u32,
        ramp: &GlyphRamp,
        brightness: f32,
    ) -> Option<Self> {
        let count = columns as usize * rows as usize;
        if count == 0 || rgba.len() < count * 4 {
            return None;
        }

        let brightness = brightness.clamp(0.0, 1.0);
        let cells = rgba
            .chunks_exact(4)
            .take(count)
            .map(|pixel| {
                let luminance = luminance(pixel[0], pixel[1], pixel[2]) * brightness;
                Cell {
                    glyph: ramp.glyph(luminance),
                    rgb: [
                        scale_channel(pixel[0], brightness),
                        scale_channel(pixel[1], brightness),
                        scale_channel(pixel[2], brightness),
                    ],
                    luminance,
                }
            })
            .collect();

        Some(Self {
            columns,
            rows,
            cells,
        })
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cell(&self, column: u32, row: u32) -> Option<&Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells
            .get(row as usize * self.columns as usize + column as usize)
    }

    /// Iterates over the grid one row at a time.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.columns as usize)
    }

    /// Renders the frame as plain text, one line per row.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.row_slices()
            .map(|row| row.iter().map(|cell| cell.glyph).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Normalised Rec. 601 luminance of an sRGB pixel.
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (LUMA_R * f32::from(r) + LUMA_G * f32::from(g) + LUMA_B * f32::from(b)) / 255.0
}

fn scale_channel(value: u8, factor: f32) -> u8 {
    (f32::from(value) * factor).round().clamp(0.0, 255.0) as u8
}

/// Number of rows that keeps the source aspect ratio for `columns` glyph cells.
#[must_use]
pub fn grid_rows(columns: u32, source_width: u32, source_height: u32) -> u32 {
    if source_width == 0 || source_height == 0 {
        return 1;
    }
    let rows = columns as f32 * (source_height as f32 / source_width as f32) * GLYPH_ASPECT;
    (rows.round() as u32).max(1)
}

/// Consecutive glyphs of one row sharing a (quantised) colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRun {
    /// Column of the first glyph.
    pub start: usize,
    pub text: String,
    pub rgb: [u8; 3],
}

/// Groups a row into runs so the canvas issues one text draw per run.
///
/// `glyph_for` receives the column index and may substitute an effect-boosted
/// glyph. In monochrome mode the whole row becomes a single run.
pub fn row_runs<F>(row: &[Cell], colored: bool, mut glyph_for: F) -> Vec<GlyphRun>
where
    F: FnMut(usize, &Cell) -> char,
{
    let mut runs: Vec<GlyphRun> = Vec::new();

    for (column, cell) in row.iter().enumerate() {
        let glyph = glyph_for(column, cell);
        let rgb = if colored {
            cell.rgb.map(|channel| channel & RUN_COLOR_MASK)
        } else {
            [0, 0, 0]
        };

        match runs.last_mut() {
            Some(run) if run.rgb == rgb => run.text.push(glyph),
            _ => runs.push(GlyphRun {
                start: column,
                text: glyph.to_string(),
                rgb,
            }),
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::charset::Charset;
    use crate::test_utils::{assert_abs_diff_eq, solid_rgba};

    #[test]
    fn white_frame_maps_to_brightest_glyph() {
        let ramp = GlyphRamp::new(Charset::Standard);
        let rgba = solid_rgba(4, 2, [255, 255, 255, 255]);

        let frame = AsciiFrame::from_rgba(&rgba, 4, 2, &ramp, 1.0).unwrap();

        assert_eq!(frame.to_text(), "@@@@\n@@@@");
    }

    #[test]
    fn black_frame_maps_to_blank() {
        let ramp = GlyphRamp::new(Charset::Detailed);
        let rgba = solid_rgba(3, 1, [0, 0, 0, 255]);

        let frame = AsciiFrame::from_rgba(&rgba, 3, 1, &ramp, 0.85).unwrap();

        assert_eq!(frame.to_text(), "   ");
    }

    #[test]
    fn brightness_scales_luminance_and_colour() {
        let ramp = GlyphRamp::new(Charset::Standard);
        let rgba = solid_rgba(1, 1, [200, 100, 40, 255]);

        let frame = AsciiFrame::from_rgba(&rgba, 1, 1, &ramp, 0.5).unwrap();
        let cell = frame.cell(0, 0).unwrap();

        assert_abs_diff_eq!(
            cell.luminance,
            luminance(200, 100, 40) * 0.5,
            epsilon = 1e-6
        );
        assert_eq!(cell.rgb, [100, 50, 20]);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let ramp = GlyphRamp::new(Charset::Standard);
        let rgba = solid_rgba(2, 2, [10, 10, 10, 255]);
        assert!(AsciiFrame::from_rgba(&rgba, 3, 2, &ramp, 1.0).is_none());
        assert!(AsciiFrame::from_rgba(&rgba, 0, 2, &ramp, 1.0).is_none());
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let ramp = GlyphRamp::new(Charset::Minimal);
        let rgba = solid_rgba(2, 2, [255, 255, 255, 255]);
        let frame = AsciiFrame::from_rgba(&rgba, 2, 2, &ramp, 1.0).unwrap();

        assert!(frame.cell(1, 1).is_some());
        assert!(frame.cell(2, 0).is_none());
        assert!(frame.cell(0, 2).is_none());
    }

    #[test]
    fn grid_rows_follows_aspect_ratio() {
        // 16:9 at 180 columns with half-height glyphs
        assert_eq!(grid_rows(180, 1920, 1080), 51);
        assert_eq!(grid_rows(100, 100, 100), 50);
    }

    #[test]
    fn grid_rows_never_returns_zero() {
        assert_eq!(grid_rows(20, 4000, 10), 1);
        assert_eq!(grid_rows(20, 0, 0), 1);
    }

    #[test]
    fn monochrome_row_is_a_single_run() {
        let ramp = GlyphRamp::new(Charset::Standard);
        let mut rgba = solid_rgba(2, 1, [255, 0, 0, 255]);
        rgba.extend_from_slice(&[0, 0, 255, 255, 0, 255, 0, 255]);
        let frame = AsciiFrame::from_rgba(&rgba, 4, 1, &ramp, 1.0).unwrap();
        let row = frame.row_slices().next().unwrap();

        let runs = row_runs(row, false, |_, cell| cell.glyph);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text.chars().count(), 4);
    }

    #[test]
    fn coloured_row_splits_on_colour_change() {
        let ramp = GlyphRamp::new(Charset::Standard);
        let mut rgba = solid_rgba(2, 1, [255, 0, 0, 255]);
        rgba.extend_from_slice(&[0, 0, 255, 255]);
        let frame = AsciiFrame::from_rgba(&rgba, 3, 1, &ramp, 1.0).unwrap();
        let row = frame.row_slices().next().unwrap();

        let runs = row_runs(row, true, |_, _| 'x');

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].start, 0);
        assert_eq!(runs[0].text, "xx");
        assert_eq!(runs[1].start, 2);
        assert_eq!(runs[1].rgb, [0, 0, 240]);
    }
}
