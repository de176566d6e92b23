// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::hero::MountTicket;
use crate::ui::page;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    /// The hero mount delay elapsed for the given schedule.
    HeroTimerFired(MountTicket),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SPEAKER_PAGE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory holding the hero clip.
    /// Takes precedence over `SPEAKER_PAGE_ASSETS_DIR` environment variable.
    pub assets_dir: Option<String>,
}
