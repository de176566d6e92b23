// SPDX-License-Identifier: MPL-2.0
//! Glyph ramps used to translate luminance into characters.
//!
//! Every ramp is ordered from darkest (index 0, usually a space) to brightest.

use serde::{Deserialize, Serialize};

const MINIMAL: &[char] = &[' ', '.', ':', '+', '#', '@'];
const STANDARD: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
const BLOCKS: &[char] = &[' ', '░', '▒', '▓', '█'];

// 70-level ramp popularised by Paul Bourke.
const DETAILED: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Character-set density of the ASCII rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    Minimal,
    Standard,
    #[default]
    Detailed,
    Blocks,
}

impl Charset {
    /// Returns the glyph ramp, darkest first.
    #[must_use]
    pub fn ramp(self) -> Vec<char> {
        match self {
            Charset::Minimal => MINIMAL.to_vec(),
            Charset::Standard => STANDARD.to_vec(),
            Charset::Detailed => DETAILED.chars().collect(),
            Charset::Blocks => BLOCKS.to_vec(),
        }
    }
}

/// Precomputed ramp so the per-cell lookup does not re-collect the glyphs.
#[derive(Debug, Clone)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    #[must_use]
    pub fn new(charset: Charset) -> Self {
        Self {
            glyphs: charset.ramp(),
        }
    }

    /// Maps a luminance in `[0, 1]` to a glyph. Out-of-range values are clamped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn glyph(&self, luminance: f32) -> char {
        let last = self.glyphs.len().saturating_sub(1);
        let index = (luminance.clamp(0.0, 1.0) * last as f32).round() as usize;
        self.glyphs[index.min(last)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
