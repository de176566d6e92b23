// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for hero clip playback events.
//!
//! The subscription owns the decoder for one playback session. Dropping the
//! subscription (the hero module unmounting) drops the decoder channels, which
//! stops the blocking decode thread.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Subscription ID for hero playback.
/// Each mount gets its own session so a remount restarts decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeroPlaybackId(u64);

/// Handle for sending commands to the decoder from the UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    pub fn send(&self, command: DecoderCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Hero decoder not running".to_string())
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Decoder spawned; carries the sender for play/pause/stop.
    Started(DecoderCommandSender),

    /// A grid-sized RGBA frame is ready.
    FrameReady {
        rgba_data: Arc<Vec<u8>>,
        columns: u32,
        rows: u32,
        pts_secs: f64,
    },

    EndOfStream,

    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                rgba_data: frame.rgba_data,
                columns: frame.columns,
                rows: frame.rows,
                pts_secs: frame.pts_secs,
            },
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
            DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
        }
    }
}

enum State {
    Idle,
    Decoding {
        decoder: AsyncDecoder,
        external_cmd_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    },
}

/// Creates the hero playback subscription for one mount session.
///
/// Emits `Started` first, then frames `columns` cells wide. With `looping`
/// set the clip rewinds instead of emitting `EndOfStream`.
pub fn ascii_playback(
    video_path: PathBuf,
    session_id: u64,
    columns: u32,
    looping: bool,
) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with(
        PlaybackSession {
            id: HeroPlaybackId(session_id),
            video_path,
            columns,
            looping,
        },
        playback_stream,
    )
}

/// Inputs for one playback session. Only the session id takes part in the
/// subscription identity, so a remount (new id) restarts decoding.
struct PlaybackSession {
    id: HeroPlaybackId,
    video_path: PathBuf,
    columns: u32,
    looping: bool,
}

impl std::hash::Hash for PlaybackSession {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn playback_stream(
    session: &PlaybackSession,
) -> impl iced::futures::Stream<Item = PlaybackMessage> {
    let video_path = session.video_path.clone();
    let columns = session.columns;
    let looping = session.looping;

    stream::channel(
        100,
        move |mut output: iced::futures::channel::mpsc::Sender<PlaybackMessage>| async move {
            let mut state = State::Idle;

            loop {
                match &mut state {
                    State::Idle => {
                        let decoder = match AsyncDecoder::new(&video_path, columns, looping) {
                            Ok(decoder) => decoder,
                            Err(e) => {
                                let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                                break;
                            }
                        };

                        let (external_cmd_tx, external_cmd_rx) = mpsc::unbounded_channel();
                        let sender = DecoderCommandSender {
                            tx: external_cmd_tx,
                        };
                        let _ = output.send(PlaybackMessage::Started(sender)).await;

                        state = State::Decoding {
                            decoder,
                            external_cmd_rx,
                        };
                    }

                    State::Decoding {
                        decoder,
                        external_cmd_rx,
                    } => {
                        tokio::select! {
                            cmd = external_cmd_rx.recv() => {
                                if let Some(command) = cmd {
                                    if let Err(e) = decoder.send_command(command) {
                                        let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                                    }
                                }
                            }

                            event = decoder.recv_event() => {
                                match event {
                                    Some(event) => {
                                        let _ = output.send(PlaybackMessage::from(event)).await;
                                    }
                                    None => break,
                                }
                            }
                        }
                    }
                }
            }

            // Keep the subscription alive but idle
            std::future::pending::<()>().await;
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::DecodedFrame;

    #[test]
    fn subscription_id_is_per_session() {
        assert_eq!(HeroPlaybackId(7), HeroPlaybackId(7));
        assert_ne!(HeroPlaybackId(7), HeroPlaybackId(8));
    }

    #[test]
    fn frame_event_keeps_grid_size() {
        let event = DecoderEvent::FrameReady(DecodedFrame {
            rgba_data: Arc::new(vec![0; 4 * 3 * 4]),
            columns: 4,
            rows: 3,
            pts_secs: 1.5,
        });

        match PlaybackMessage::from(event) {
            PlaybackMessage::FrameReady { columns, rows, .. } => {
                assert_eq!((columns, rows), (4, 3));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn closed_sender_reports_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sender = DecoderCommandSender { tx };
        assert!(sender.send(DecoderCommand::Play).is_err());
    }
}
