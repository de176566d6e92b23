// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Mount**: Deferred hero mount delay
//! - **ASCII**: Hero clip source and rendering density
//! - **Effects**: Pointer glow and ripple tuning

// ==========================================================================
// Mount Defaults
// ==========================================================================

/// Delay between page activation and mounting the hero module (milliseconds).
pub const DEFAULT_MOUNT_DELAY_MS: u64 = 300;

/// Longest mount delay accepted from the settings file (milliseconds).
pub const MAX_MOUNT_DELAY_MS: u64 = 5_000;

// ==========================================================================
// ASCII Defaults
// ==========================================================================

/// Site-rooted path of the hero clip.
pub const DEFAULT_HERO_SOURCE: &str = "/hero-clip.mp4";

/// Default number of character columns.
pub const DEFAULT_COLUMN_COUNT: u32 = 180;

/// Minimum number of character columns.
pub const MIN_COLUMN_COUNT: u32 = 20;

/// Maximum number of character columns.
pub const MAX_COLUMN_COUNT: u32 = 400;

/// Default luminance multiplier.
pub const DEFAULT_BRIGHTNESS: f32 = 0.85;

/// Minimum luminance multiplier.
pub const MIN_BRIGHTNESS: f32 = 0.0;

/// Maximum luminance multiplier.
pub const MAX_BRIGHTNESS: f32 = 1.0;

/// Width of a glyph cell relative to its height. Rows are derived from this.
pub const GLYPH_ASPECT: f32 = 0.5;

// ==========================================================================
// Effect Defaults
// ==========================================================================

/// Radius of the pointer glow, in cells.
pub const POINTER_GLOW_RADIUS_CELLS: f32 = 8.0;

/// Peak luminance added directly under the pointer.
pub const POINTER_GLOW_STRENGTH: f32 = 0.45;

/// Ripple ring expansion speed, in cells per second.
pub const RIPPLE_SPEED_CELLS_PER_SEC: f32 = 60.0;

/// Ripple ring thickness, in cells.
pub const RIPPLE_WIDTH_CELLS: f32 = 3.0;

/// Ripple lifetime (milliseconds).
pub const RIPPLE_LIFETIME_MS: u64 = 1_200;

/// Peak luminance added on the ripple ring.
pub const RIPPLE_STRENGTH: f32 = 0.6;

/// Maximum ripples alive at once; older ones are dropped first.
pub const MAX_RIPPLES: usize = 8;

/// Frame interval of the ripple animation tick (milliseconds).
pub const EFFECT_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MOUNT_DELAY_MS <= MAX_MOUNT_DELAY_MS);
    assert!(MIN_COLUMN_COUNT <= DEFAULT_COLUMN_COUNT);
    assert!(DEFAULT_COLUMN_COUNT <= MAX_COLUMN_COUNT);
    assert!(DEFAULT_BRIGHTNESS >= MIN_BRIGHTNESS && DEFAULT_BRIGHTNESS <= MAX_BRIGHTNESS);
    assert!(GLYPH_ASPECT > 0.0);
    assert!(MAX_RIPPLES > 0);
};
