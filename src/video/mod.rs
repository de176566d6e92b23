// SPDX-License-Identifier: MPL-2.0
//! Hero clip decoding.
//!
//! FFmpeg decodes on a blocking Tokio thread and hands frames, already scaled
//! to the character grid, to an Iced subscription.

mod decoder;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use subscription::{ascii_playback, DecoderCommandSender, HeroPlaybackId, PlaybackMessage};

use crate::error::{Error, Result, VideoError};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process and silences its warning output.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Video(VideoError::ffmpeg("initialize FFmpeg", e)));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}
