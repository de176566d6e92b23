// SPDX-License-Identifier: MPL-2.0
//! ASCII-art rendering of the hero clip.
//!
//! [`AsciiVideo`] is the heavy module mounted behind the hero's deferred mount
//! controller. It owns a decoder session, converts each frame into glyphs and
//! layers pointer and ripple effects on top.
//!
//! Until the first frame arrives, and after any decoder failure, the module
//! renders an empty region.

pub mod canvas;
pub mod charset;
pub mod config;
pub mod convert;
pub mod effects;

pub use charset::{Charset, GlyphRamp};
pub use config::AsciiVideoConfig;
pub use convert::AsciiFrame;
pub use effects::GridPoint;

use crate::app::paths;
use crate::config::defaults::{EFFECT_TICK_MS, MAX_COLUMN_COUNT, MIN_COLUMN_COUNT};
use crate::error::{Error, Result, VideoError};
use crate::video::{self, DecoderCommand, DecoderCommandSender, PlaybackMessage};
use canvas::AsciiCanvas;
use effects::Effects;
use iced::widget::{Canvas, Space};
use iced::{Element, Length, Subscription};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Each mount gets a fresh playback session.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub enum Message {
    Playback(PlaybackMessage),
    PointerMoved(GridPoint),
    PointerLeft,
    Clicked(GridPoint),
    Tick(Instant),
}

/// Lifecycle of the decoder session as seen by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Decoder starting, no frame yet.
    Loading,
    Playing,
    /// Clip ended without looping; the last frame stays on screen.
    Ended,
    /// Decoder failed; nothing is drawn.
    Failed,
    /// Torn down by the mount controller.
    Stopped,
}

/// The mounted ASCII video.
#[derive(Debug)]
pub struct AsciiVideo {
    config: AsciiVideoConfig,
    source_path: PathBuf,
    session_id: u64,
    phase: Phase,
    ramp: GlyphRamp,
    effects: Effects,
    frame: Option<AsciiFrame>,
    sender: Option<DecoderCommandSender>,
}

impl AsciiVideo {
    /// Creates the module for `config`, resolving its source against the
    /// assets directory.
    pub fn new(config: &AsciiVideoConfig) -> Result<Self> {
        Self::with_assets_dir(config, &paths::get_assets_dir())
    }

    /// Like [`AsciiVideo::new`] with an explicit assets directory.
    pub fn with_assets_dir(config: &AsciiVideoConfig, assets_dir: &Path) -> Result<Self> {
        let source_path = paths::resolve_asset(assets_dir, &config.source);
        if !source_path.is_file() {
            return Err(Error::Video(VideoError::MissingSource(
                source_path.display().to_string(),
            )));
        }

        let mut config = config.clone();
        config.column_count = config.column_count.clamp(MIN_COLUMN_COUNT, MAX_COLUMN_COUNT);
        config.brightness = if config.brightness.is_finite() {
            config.brightness.clamp(0.0, 1.0)
        } else {
            AsciiVideoConfig::default().brightness
        };

        let session_id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            source = %source_path.display(),
            columns = config.column_count,
            session_id,
            "hero video mounted"
        );

        Ok(Self {
            ramp: GlyphRamp::new(config.charset),
            effects: Effects::new(
                config.pointer_interaction_enabled,
                config.ripple_effect_enabled,
            ),
            config,
            source_path,
            session_id,
            phase: Phase::Loading,
            frame: None,
            sender: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AsciiVideoConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn frame(&self) -> Option<&AsciiFrame> {
        self.frame.as_ref()
    }

    pub fn update(&mut self, message: Message) {
        if self.phase == Phase::Stopped {
            return;
        }

        match message {
            Message::Playback(playback) => self.handle_playback(playback),
            Message::PointerMoved(point) => self.effects.set_pointer(Some(point)),
            Message::PointerLeft => self.effects.set_pointer(None),
            Message::Clicked(point) => self.effects.spawn_ripple(point, Instant::now()),
            Message::Tick(now) => self.effects.prune(now),
        }
    }

    fn handle_playback(&mut self, message: PlaybackMessage) {
        match message {
            PlaybackMessage::Started(sender) => {
                // Decode at least one frame so a paused hero still shows a poster.
                if let Err(e) = sender.send(DecoderCommand::Play) {
                    tracing::warn!(error = %e, "hero decoder did not accept play");
                }
                self.sender = Some(sender);
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                columns,
                rows,
                ..
            } => {
                if self.phase == Phase::Failed {
                    return;
                }
                let Some(frame) = AsciiFrame::from_rgba(
                    &rgba_data,
                    columns,
                    rows,
                    &self.ramp,
                    self.config.brightness,
                ) else {
                    tracing::debug!(columns, rows, "short hero frame dropped");
                    return;
                };

                let first_frame = self.frame.is_none();
                self.frame = Some(frame);
                self.phase = Phase::Playing;

                if first_frame && !self.config.starts_playing() {
                    self.send(DecoderCommand::Pause);
                }
            }
            PlaybackMessage::EndOfStream => {
                self.phase = Phase::Ended;
            }
            PlaybackMessage::Error(message) => {
                tracing::warn!(
                    source = %self.source_path.display(),
                    error = %message,
                    "hero video failed, leaving region empty"
                );
                self.phase = Phase::Failed;
                self.frame = None;
                self.effects.clear();
                self.send(DecoderCommand::Stop);
                self.sender = None;
            }
        }
    }

    fn send(&self, command: DecoderCommand) {
        if let Some(sender) = &self.sender {
            if let Err(e) = sender.send(command) {
                tracing::debug!(error = %e, ?command, "hero decoder command dropped");
            }
        }
    }

    /// Stops the decoder and releases the frame.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.send(DecoderCommand::Stop);
        self.sender = None;
        self.frame = None;
        self.effects.clear();
        self.phase = Phase::Stopped;
        tracing::info!(session_id = self.session_id, "hero video torn down");
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if matches!(self.phase, Phase::Failed | Phase::Stopped) {
            return Subscription::none();
        }

        let playback = video::ascii_playback(
            self.source_path.clone(),
            self.session_id,
            self.config.column_count,
            self.config.looping,
        )
        .map(Message::Playback);

        let ticks = if self.effects.has_ripples() {
            iced::time::every(Duration::from_millis(EFFECT_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([playback, ticks])
    }

    pub fn view(&self) -> Element<'_, Message> {
        match (&self.frame, self.phase) {
            (Some(frame), Phase::Playing | Phase::Ended) => Canvas::new(AsciiCanvas {
                frame,
                ramp: &self.ramp,
                effects: &self.effects,
                colored: self.config.color_enabled,
                pointer_enabled: self.config.pointer_interaction_enabled,
                ripple_enabled: self.config.ripple_effect_enabled,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            _ => Space::new().width(Length::Fill).height(Length::Fill).into(),
        }
    }
}
