// SPDX-License-Identifier: MPL-2.0
//! Options recognised by the ASCII video module.

use super::charset::Charset;
use crate::config::defaults::{DEFAULT_BRIGHTNESS, DEFAULT_COLUMN_COUNT, DEFAULT_HERO_SOURCE};

/// Configuration handed to [`super::AsciiVideo`] when it is mounted.
///
/// The mount controller passes this through untouched; interpreting and
/// sanitising the values is the module's job.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiVideoConfig {
    /// Site-rooted path of the clip, resolved against the assets directory.
    pub source: String,
    /// Number of character columns across the canvas.
    pub column_count: u32,
    /// Render each glyph in the source pixel colour instead of the text colour.
    pub color_enabled: bool,
    /// Luminance multiplier in `[0, 1]`.
    pub brightness: f32,
    /// Brighten the cells around the pointer.
    pub pointer_interaction_enabled: bool,
    /// Spawn an expanding ripple on click.
    pub ripple_effect_enabled: bool,
    pub charset: Charset,
    /// Start decoding as soon as the decoder is ready.
    pub autoplay: bool,
    /// Desired playback state once started.
    pub playing: bool,
    /// Rewind at end of stream.
    pub looping: bool,
}

impl Default for AsciiVideoConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_HERO_SOURCE.to_string(),
            column_count: DEFAULT_COLUMN_COUNT,
            color_enabled: true,
            brightness: DEFAULT_BRIGHTNESS,
            pointer_interaction_enabled: true,
            ripple_effect_enabled: true,
            charset: Charset::Detailed,
            autoplay: true,
            playing: true,
            looping: true,
        }
    }
}

impl AsciiVideoConfig {
    /// Whether the decoder should be told to play as soon as it starts.
    #[must_use]
    pub fn starts_playing(&self) -> bool {
        self.autoplay && self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_matches_hero_clip_settings() {
        let config = AsciiVideoConfig::default();
        assert_eq!(config.source, "/hero-clip.mp4");
        assert_eq!(config.column_count, 180);
        assert!(config.color_enabled);
        assert_abs_diff_eq!(config.brightness, 0.85);
        assert!(config.pointer_interaction_enabled);
        assert!(config.ripple_effect_enabled);
        assert_eq!(config.charset, Charset::Detailed);
        assert!(config.starts_playing());
    }

    #[test]
    fn paused_config_does_not_start_playing() {
        let config = AsciiVideoConfig {
            playing: false,
            ..AsciiVideoConfig::default()
        };
        assert!(!config.starts_playing());
    }
}
