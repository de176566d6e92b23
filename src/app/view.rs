// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::hero::HeroMount;
use crate::i18n::fluent::I18n;
use crate::ui::page;
use crate::ui::theming::ThemeMode;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hero: &'a HeroMount,
    pub year: i32,
    pub theme_mode: ThemeMode,
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    page::view(page::ViewContext {
        i18n: ctx.i18n,
        // Empty until the mount delay elapses; stays empty after a failure
        hero: ctx.hero.module(),
        year: ctx.year,
        theme_mode: ctx.theme_mode,
        status: ctx.status,
    })
    .map(Message::Page)
}
