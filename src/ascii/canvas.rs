// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing an [`AsciiFrame`] in a monospace font.
#![allow(clippy::cast_precision_loss)]

use super::charset::GlyphRamp;
use super::convert::{row_runs, AsciiFrame};
use super::effects::{Effects, GridPoint};
use super::Message;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Text};
use iced::widget::Action;
use iced::{Color, Font, Point, Rectangle, Renderer, Theme};
use std::time::Instant;

/// Advance width of a monospace glyph relative to its font size.
const MONOSPACE_ADVANCE: f32 = 0.6;

/// Draws the character grid and reports pointer activity over it.
pub struct AsciiCanvas<'a> {
    pub frame: &'a AsciiFrame,
    pub ramp: &'a GlyphRamp,
    pub effects: &'a Effects,
    pub colored: bool,
    pub pointer_enabled: bool,
    pub ripple_enabled: bool,
}

impl AsciiCanvas<'_> {
    fn cell_size(&self, bounds: Rectangle) -> (f32, f32) {
        (
            bounds.width / self.frame.columns() as f32,
            bounds.height / self.frame.rows() as f32,
        )
    }

    fn grid_point(&self, position: Point, bounds: Rectangle) -> GridPoint {
        let (cell_width, cell_height) = self.cell_size(bounds);
        GridPoint::new(position.x / cell_width, position.y / cell_height)
    }
}

/// Per-canvas widget state: whether the pointer was last seen inside.
#[derive(Debug, Default)]
pub struct PointerState {
    inside: bool,
}

impl canvas::Program<Message> for AsciiCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.pointer_enabled => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        state.inside = true;
                        Some(Action::publish(Message::PointerMoved(
                            self.grid_point(position, bounds),
                        )))
                    }
                    None if state.inside => {
                        state.inside = false;
                        Some(Action::publish(Message::PointerLeft))
                    }
                    None => None,
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.inside => {
                state.inside = false;
                Some(Action::publish(Message::PointerLeft))
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if self.ripple_enabled =>
            {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Clicked(self.grid_point(position, bounds)))
                        .and_capture(),
                )
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let (cell_width, cell_height) = self.cell_size(bounds);
        let font_size = (cell_width / MONOSPACE_ADVANCE).min(cell_height);
        let text_color = theme.palette().text;

        let now = Instant::now();
        let idle = self.effects.is_idle();

        for (row_index, row) in self.frame.row_slices().enumerate() {
            let runs = row_runs(row, self.colored, |column, cell| {
                if idle {
                    cell.glyph
                } else {
                    let boost = self.effects.boost(column, row_index, now);
                    self.ramp.glyph(cell.luminance + boost)
                }
            });

            let y = row_index as f32 * cell_height;
            for run in runs {
                if run.text.trim().is_empty() {
                    continue;
                }
                let color = if self.colored {
                    Color::from_rgb8(run.rgb[0], run.rgb[1], run.rgb[2])
                } else {
                    text_color
                };
                frame.fill_text(Text {
                    content: run.text,
                    position: Point::new(run.start as f32 * cell_width, y),
                    color,
                    size: font_size.into(),
                    font: Font::MONOSPACE,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.ripple_enabled && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
