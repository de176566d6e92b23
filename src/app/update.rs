// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::config::{self, Config};
use crate::hero::{FireOutcome, HeroMount, MountTicket};
use crate::i18n::fluent::I18n;
use crate::ui::page::{self, Event as PageEvent};
use crate::ui::theming::ThemeMode;
use iced::{window, Task};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub hero: &'a mut HeroMount,
    pub status: &'a mut Option<String>,
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    let (event, task) = page::update(message);
    let task = task.map(Message::Page);

    match event {
        PageEvent::None => {}
        PageEvent::LinkCopied(url) => {
            tracing::info!(url, "link copied to clipboard");
            *ctx.status = Some(ctx.i18n.tr_with_args("status-link-copied", &[("url", url)]));
        }
        PageEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            persist_config(ctx);
        }
        PageEvent::Hero(hero_message) => {
            // Dropped when the hero is not mounted, including after teardown
            if let Some(video) = ctx.hero.module_mut() {
                video.update(hero_message);
            }
        }
    }

    task
}

pub fn handle_hero_timer(ctx: &mut UpdateContext<'_>, ticket: MountTicket) -> Task<Message> {
    match ctx.hero.fire(ticket) {
        FireOutcome::Mounted => tracing::info!("hero region ready"),
        FireOutcome::Failed(reason) => {
            tracing::info!(reason = %reason, "hero region left empty");
        }
        FireOutcome::Ignored => {}
    }
    Task::none()
}

/// Tears the hero down, then exits.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    tracing::debug!(?window_id, "window close requested");
    ctx.hero.deactivate();
    iced::exit()
}

/// Saves the settings file.
///
/// Guarded during tests to keep the user's settings untouched.
fn persist_config(ctx: &mut UpdateContext<'_>) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(ctx.config) {
        tracing::warn!(%error, "settings not saved");
        *ctx.status = Some(ctx.i18n.tr("notification-config-save-error"));
    }
}
