// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Video(VideoError),
}

/// Why the hero clip could not be played. Logged, never shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// The clip is not a file under the assets directory.
    MissingSource(String),

    NoVideoStream,

    /// FFmpeg rejected the container or stream data.
    CorruptedFile,

    /// Any other FFmpeg failure, tagged with the step that failed.
    Ffmpeg {
        step: &'static str,
        message: String,
    },
}

impl VideoError {
    /// Maps an FFmpeg error raised during `step` onto the cases the hero
    /// tells apart.
    #[must_use]
    pub fn ffmpeg(step: &'static str, err: ffmpeg_next::Error) -> Self {
        match err {
            ffmpeg_next::Error::InvalidData => VideoError::CorruptedFile,
            ffmpeg_next::Error::StreamNotFound => VideoError::NoVideoStream,
            other => VideoError::Ffmpeg {
                step,
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::MissingSource(path) => write!(f, "hero clip missing at {path}"),
            VideoError::NoVideoStream => f.write_str("hero clip has no video stream"),
            VideoError::CorruptedFile => f.write_str("hero clip data is invalid"),
            VideoError::Ffmpeg { step, message } => write!(f, "{step}: {message}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
