// SPDX-License-Identifier: MPL-2.0
//! Pointer glow and click ripples.
//!
//! Effects never touch the decoded frame; they return a luminance boost per
//! cell that the canvas adds before choosing a glyph. Distances are measured
//! in column widths, so a row step counts as `1 / GLYPH_ASPECT` columns.

use crate::config::defaults::{
    GLYPH_ASPECT, MAX_RIPPLES, POINTER_GLOW_RADIUS_CELLS, POINTER_GLOW_STRENGTH,
    RIPPLE_LIFETIME_MS, RIPPLE_SPEED_CELLS_PER_SEC, RIPPLE_STRENGTH, RIPPLE_WIDTH_CELLS,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A position on the character grid, in fractional cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub column: f32,
    pub row: f32,
}

impl GridPoint {
    #[must_use]
    pub fn new(column: f32, row: f32) -> Self {
        Self { column, row }
    }

    #[allow(clippy::cast_precision_loss)]
    fn distance_to_cell(self, column: usize, row: usize) -> f32 {
        let dx = column as f32 + 0.5 - self.column;
        let dy = (row as f32 + 0.5 - self.row) / GLYPH_ASPECT;
        dx.hypot(dy)
    }
}

/// Luminance added to a cell by the pointer glow.
#[must_use]
pub fn pointer_boost(pointer: GridPoint, column: usize, row: usize) -> f32 {
    let distance = pointer.distance_to_cell(column, row);
    if distance >= POINTER_GLOW_RADIUS_CELLS {
        0.0
    } else {
        POINTER_GLOW_STRENGTH * (1.0 - distance / POINTER_GLOW_RADIUS_CELLS)
    }
}

/// A ring expanding from a click position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    origin: GridPoint,
    started_at: Instant,
}

impl Ripple {
    #[must_use]
    pub fn new(origin: GridPoint, started_at: Instant) -> Self {
        Self { origin, started_at }
    }

    fn lifetime() -> Duration {
        Duration::from_millis(RIPPLE_LIFETIME_MS)
    }

    #[must_use]
    pub fn is_alive(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < Self::lifetime()
    }

    /// Ring radius in column widths.
    #[must_use]
    pub fn radius(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started_at).as_secs_f32() * RIPPLE_SPEED_CELLS_PER_SEC
    }

    /// Luminance added to a cell; fades linearly over the ripple lifetime.
    #[must_use]
    pub fn boost(&self, column: usize, row: usize, now: Instant) -> f32 {
        if !self.is_alive(now) {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let fade = 1.0 - elapsed / Self::lifetime().as_secs_f32();
        let offset = (self.origin.distance_to_cell(column, row) - self.radius(now)).abs();
        if offset >= RIPPLE_WIDTH_CELLS {
            0.0
        } else {
            RIPPLE_STRENGTH * (1.0 - offset / RIPPLE_WIDTH_CELLS) * fade
        }
    }
}

/// Interactive effect state owned by the ASCII module.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pointer_enabled: bool,
    ripple_enabled: bool,
    pointer: Option<GridPoint>,
    ripples: VecDeque<Ripple>,
}

impl Effects {
    #[must_use]
    pub fn new(pointer_enabled: bool, ripple_enabled: bool) -> Self {
        Self {
            pointer_enabled,
            ripple_enabled,
            ..Self::default()
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<GridPoint>) {
        if self.pointer_enabled {
            self.pointer = pointer;
        }
    }

    #[must_use]
    pub fn pointer(&self) -> Option<GridPoint> {
        self.pointer
    }

    /// Starts a ripple; the oldest one is dropped past [`MAX_RIPPLES`].
    pub fn spawn_ripple(&mut self, origin: GridPoint, now: Instant) {
        if !self.ripple_enabled {
            return;
        }
        if self.ripples.len() == MAX_RIPPLES {
            self.ripples.pop_front();
        }
        self.ripples.push_back(Ripple::new(origin, now));
    }

    /// Drops expired ripples.
    pub fn prune(&mut self, now: Instant) {
        self.ripples.retain(|ripple| ripple.is_alive(now));
    }

    #[must_use]
    pub fn has_ripples(&self) -> bool {
        !self.ripples.is_empty()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pointer.is_none() && self.ripples.is_empty()
    }

    /// Total luminance boost for one cell.
    #[must_use]
    pub fn boost(&self, column: usize, row: usize, now: Instant) -> f32 {
        let glow = self
            .pointer
            .map_or(0.0, |pointer| pointer_boost(pointer, column, row));
        let ripples: f32 = self
            .ripples
            .iter()
            .map(|ripple| ripple.boost(column, row, now))
            .sum();
        glow + ripples
    }

    pub fn clear(&mut self) {
        self.pointer = None;
        self.ripples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn pointer_glow_peaks_under_cursor() {
        let pointer = GridPoint::new(10.5, 5.5);
        assert_abs_diff_eq!(pointer_boost(pointer, 10, 5), POINTER_GLOW_STRENGTH);
    }

    #[test]
    fn pointer_glow_vanishes_outside_radius() {
        let pointer = GridPoint::new(0.5, 0.5);
        assert_abs_diff_eq!(pointer_boost(pointer, 40, 0), 0.0);
    }

    #[test]
    fn rows_count_double_for_distance() {
        let pointer = GridPoint::new(0.5, 0.5);
        // Two rows down is as far as four columns across.
        assert_abs_diff_eq!(
            pointer_boost(pointer, 0, 2),
            pointer_boost(pointer, 4, 0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn ripple_ring_moves_outward() {
        let start = Instant::now();
        let ripple = Ripple::new(GridPoint::new(0.5, 0.5), start);
        let later = start + Duration::from_millis(500);

        // 60 cells/s for 0.5s puts the ring at 30 columns.
        assert!(ripple.boost(30, 0, later) > 0.0);
        assert_abs_diff_eq!(ripple.boost(0, 0, later), 0.0);
    }

    #[test]
    fn ripple_expires_after_lifetime() {
        let start = Instant::now();
        let ripple = Ripple::new(GridPoint::new(0.5, 0.5), start);
        let expired = start + Duration::from_millis(RIPPLE_LIFETIME_MS);

        assert!(!ripple.is_alive(expired));
        assert_abs_diff_eq!(ripple.boost(0, 0, expired), 0.0);
    }

    #[test]
    fn disabled_effects_ignore_input() {
        let now = Instant::now();
        let mut effects = Effects::new(false, false);

        effects.set_pointer(Some(GridPoint::new(1.0, 1.0)));
        effects.spawn_ripple(GridPoint::new(1.0, 1.0), now);

        assert!(effects.is_idle());
        assert_abs_diff_eq!(effects.boost(1, 1, now), 0.0);
    }

    #[test]
    fn ripple_count_is_capped() {
        let now = Instant::now();
        let mut effects = Effects::new(true, true);
        for i in 0..(MAX_RIPPLES + 3) {
            effects.spawn_ripple(GridPoint::new(i as f32, 0.0), now);
        }
        assert_eq!(effects.ripples.len(), MAX_RIPPLES);
        assert_abs_diff_eq!(effects.ripples[0].origin.column, 3.0);
    }

    #[test]
    fn prune_drops_expired_ripples() {
        let now = Instant::now();
        let mut effects = Effects::new(true, true);
        effects.spawn_ripple(GridPoint::new(0.0, 0.0), now);

        effects.prune(now + Duration::from_millis(RIPPLE_LIFETIME_MS + 1));

        assert!(!effects.has_ripples());
    }
}
