// SPDX-License-Identifier: MPL-2.0
//! The hero region: a deferred mount of the ASCII video.

pub mod mount;

pub use mount::{DeferredMount, FireOutcome, HeavyModule, MountPhase, MountTicket, PendingTimer};

use crate::ascii::{AsciiVideo, AsciiVideoConfig};
use crate::error::Error;
use iced::task;

/// Abort handle of the Iced task carrying the mount delay.
pub struct HeroTimer(task::Handle);

impl HeroTimer {
    #[must_use]
    pub fn new(handle: task::Handle) -> Self {
        Self(handle)
    }
}

impl PendingTimer for HeroTimer {
    fn cancel(self) {
        self.0.abort();
    }
}

impl HeavyModule for AsciiVideo {
    type Config = AsciiVideoConfig;
    type Error = Error;

    fn instantiate(config: &AsciiVideoConfig) -> Result<Self, Error> {
        AsciiVideo::new(config)
    }

    fn teardown(&mut self) {
        AsciiVideo::teardown(self);
    }
}

/// Mount controller for the hero ASCII video.
pub type HeroMount = DeferredMount<AsciiVideo, HeroTimer>;
