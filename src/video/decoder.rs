// SPDX-License-Identifier: MPL-2.0
//! Async hero clip decoder using FFmpeg.
//!
//! Decoding runs on a blocking Tokio thread. The FFmpeg scaler converts each
//! frame to RGBA at the size of the character grid, so a decoded frame holds
//! exactly one pixel per glyph cell.

use crate::ascii::convert::grid_rows;
use crate::error::{Error, Result, VideoError};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Idle poll interval while paused.
const PAUSED_POLL: Duration = Duration::from_millis(10);

/// A decoded frame sized to the character grid.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (columns × rows × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    pub columns: u32,

    pub rows: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Start or resume decoding.
    Play,

    /// Stop sending frames, keeping the current position.
    Pause,

    /// Stop decoding and release FFmpeg resources.
    Stop,
}

/// Events sent from the decoder to the subscription.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(DecodedFrame),

    /// Playback reached the end of a non-looping clip.
    EndOfStream,

    Error(String),
}

/// Async video decoder that runs in a Tokio blocking thread.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Bounded so a slow UI applies backpressure to the decoder.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for `video_path` producing frames `columns` cells wide.
    ///
    /// The decoder starts paused; send [`DecoderCommand::Play`] to begin.
    pub fn new<P: AsRef<Path>>(video_path: P, columns: u32, looping: bool) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(Error::Video(VideoError::MissingSource(
                path.display().to_string(),
            )));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            if let Err(e) = Self::decoder_loop_blocking(&path, columns, looping, command_rx, event_tx)
            {
                tracing::warn!(path = %path.display(), error = %e, "hero decoder stopped");
                let _ = error_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Receives the next event, or `None` once the decoder task has ended.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        video_path: &Path,
        columns: u32,
        looping: bool,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        super::init_ffmpeg()?;

        let video_err = |step: &'static str, e| Error::Video(VideoError::ffmpeg(step, e));

        let mut ictx = ffmpeg_next::format::input(video_path)
            .map_err(|e| video_err("open clip", e))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(Error::Video(VideoError::NoVideoStream))?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| video_err("create codec context", e))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| video_err("open video decoder", e))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(Error::Video(VideoError::CorruptedFile));
        }
        let rows = grid_rows(columns, width, height);

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            columns,
            rows,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| video_err("create scaler", e))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        tracing::debug!(
            path = %video_path.display(),
            width,
            height,
            columns,
            rows,
            "hero decoder opened"
        );

        let mut is_playing = false;
        let mut playback_start_time: Option<Instant> = None;
        let mut first_pts: Option<f64> = None;
        let mut current_pts_secs: f64 = 0.0;
        // Guards against rewinding forever on a clip with no decodable frame.
        let mut decoded_since_rewind = false;
        // Set once the codec has been told the packets ran out; cleared by a flush.
        let mut eof_sent = false;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    if !is_playing && current_pts_secs > 0.0 {
                        #[allow(clippy::cast_possible_truncation)]
                        let timestamp = (current_pts_secs * 1_000_000.0) as i64;
                        if let Err(e) = ictx.seek(timestamp, ..timestamp) {
                            let _ = event_tx
                                .blocking_send(DecoderEvent::Error(format!("Resume seek failed: {e}")));
                        } else {
                            decoder.flush();
                            eof_sent = false;
                        }
                    }
                    is_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    playback_start_time = None;
                    first_pts = None;
                }
                Ok(DecoderCommand::Stop)
                | Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing {
                std::thread::sleep(PAUSED_POLL);
                continue;
            }

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            let mut frame_decoded = false;

            if !eof_sent {
                for (stream, packet) in ictx.packets() {
                    if stream.index() != video_stream_index {
                        continue;
                    }

                    if let Err(e) = decoder.send_packet(&packet) {
                        let _ = event_tx
                            .blocking_send(DecoderEvent::Error(format!("Packet send failed: {e}")));
                        continue;
                    }

                    if decoder.receive_frame(&mut decoded_frame).is_ok() {
                        frame_decoded = true;
                        break;
                    }
                }

                if !frame_decoded {
                    // Out of packets: the codec may still hold delayed frames
                    if let Err(e) = decoder.send_eof() {
                        tracing::debug!(error = %e, "hero decoder rejected end of stream");
                    }
                    eof_sent = true;
                }
            }

            if !frame_decoded && eof_sent {
                frame_decoded = decoder.receive_frame(&mut decoded_frame).is_ok();
            }

            if frame_decoded {
                let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                    let _ = event_tx
                        .blocking_send(DecoderEvent::Error(format!("Scaling failed: {e}")));
                    continue;
                }

                #[allow(clippy::cast_precision_loss)]
                let pts_secs = decoded_frame
                    .timestamp()
                    .map_or(0.0, |pts| pts as f64 * time_base_f64);

                // Frame pacing relative to the first PTS after (re)start
                if let Some(start_time) = playback_start_time {
                    let first = *first_pts.get_or_insert(pts_secs);
                    let frame_delay = (pts_secs - first).max(0.0);
                    let target_time = start_time + Duration::from_secs_f64(frame_delay);
                    let now = Instant::now();
                    if target_time > now {
                        std::thread::sleep(target_time - now);
                    }
                }

                current_pts_secs = pts_secs;

                let decoded = DecodedFrame {
                    rgba_data: Arc::new(extract_rgba_data(&rgb_frame)),
                    columns,
                    rows,
                    pts_secs,
                };

                if event_tx
                    .blocking_send(DecoderEvent::FrameReady(decoded))
                    .is_err()
                {
                    return Ok(());
                }

                decoded_since_rewind = true;
                continue;
            }

            if looping && decoded_since_rewind {
                if let Err(e) = ictx.seek(0, ..0) {
                    let _ =
                        event_tx.blocking_send(DecoderEvent::Error(format!("Rewind failed: {e}")));
                    is_playing = false;
                } else {
                    decoder.flush();
                    eof_sent = false;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                    current_pts_secs = 0.0;
                    decoded_since_rewind = false;
                }
                continue;
            }

            let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
            is_playing = false;
            playback_start_time = None;
            first_pts = None;
        }

        Ok(())
    }
}

/// Extracts tightly packed RGBA rows from a frame, skipping stride padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        let row_end = row_start + width * 4;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}
