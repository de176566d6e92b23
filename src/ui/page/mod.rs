// SPDX-License-Identifier: MPL-2.0
//! The single speaker page: nav bar over one scrollable column of sections.
//!
//! Follows the component pattern used across the UI: a [`ViewContext`] with
//! borrowed state going down, [`Message`]s coming up, and [`update`] turning
//! them into an [`Event`] for the application plus any widget task.

mod footer;
mod hero;
mod nav;
mod sections;

use crate::ascii::{self, AsciiVideo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{column, container, operation, scrollable, text, Column, Id, Space};
use iced::{Element, Font, Length, Task};

/// Widget id of the page scrollable, target of the nav anchors.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Anchor targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Topics,
    Talks,
    Press,
    About,
    History,
    Invite,
}

impl Section {
    /// Approximate vertical position of the section as a fraction of the
    /// scrollable content, at the default window width.
    #[must_use]
    pub fn relative_offset(self) -> f32 {
        match self {
            Section::Top => 0.0,
            Section::Topics => 0.22,
            Section::Talks => 0.38,
            Section::Press => 0.55,
            Section::About => 0.66,
            Section::History => 0.76,
            Section::Invite => 0.93,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ScrollTo(Section),
    /// External links and the contact address are copied, not opened.
    CopyLink(&'static str),
    ToggleTheme,
    Hero(ascii::Message),
}

/// Events propagated to the application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LinkCopied(&'static str),
    ToggleTheme,
    Hero(ascii::Message),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The mounted hero module; `None` until the mount delay elapses and
    /// forever after a failed mount.
    pub hero: Option<&'a AsciiVideo>,
    pub year: i32,
    pub theme_mode: ThemeMode,
    pub status: Option<&'a str>,
}

/// Process a page message and return the corresponding event.
pub fn update(message: Message) -> (Event, Task<Message>) {
    match message {
        Message::ScrollTo(section) => (
            Event::None,
            operation::snap_to(
                Id::new(SCROLLABLE_ID),
                RelativeOffset {
                    x: 0.0,
                    y: section.relative_offset(),
                },
            ),
        ),
        Message::CopyLink(url) => (
            Event::LinkCopied(url),
            iced::clipboard::write(url.to_string()),
        ),
        Message::ToggleTheme => (Event::ToggleTheme, Task::none()),
        Message::Hero(message) => (Event::Hero(message), Task::none()),
    }
}

/// Render the whole page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let years = crate::content::years_traded(ctx.year);

    let body = column![
        hero::view(&ctx),
        sections::bio(years),
        sections::credibility(),
        sections::topics(ctx.i18n, years),
        sections::talks(ctx.i18n),
        sections::press(ctx.i18n),
        sections::about(ctx.i18n, years),
        sections::history(ctx.i18n),
        sections::invite(ctx.i18n),
        footer::view(ctx.i18n, ctx.year),
    ]
    .width(Length::Fill);

    let page = scrollable(body)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    container(column![nav::view(&ctx), page])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

/// Centers `content` in a column no wider than the readable width.
fn content_width<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .center_x(Length::Fill)
    .padding([spacing::XXXL, spacing::LG])
    .into()
}

/// Label, title and accent rule shared by every section.
fn section_header<'a>(label: String, title: String) -> Column<'a, Message> {
    column![
        text(label)
            .size(typography::CAPTION)
            .font(Font::MONOSPACE)
            .style(styles::text::accent),
        text(title).size(typography::TITLE_LG),
        container(Space::new())
            .width(sizing::DIVIDER_WIDTH)
            .height(sizing::DIVIDER_HEIGHT)
            .style(styles::container::accent),
    ]
    .spacing(spacing::SM)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHORS: [Section; 7] = [
        Section::Top,
        Section::Topics,
        Section::Talks,
        Section::Press,
        Section::About,
        Section::History,
        Section::Invite,
    ];

    #[test]
    fn anchors_follow_page_order() {
        let offsets: Vec<f32> = ANCHORS.iter().map(|s| s.relative_offset()).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn anchors_stay_within_scroll_range() {
        for section in ANCHORS {
            let offset = section.relative_offset();
            assert!((0.0..=1.0).contains(&offset), "{section:?} at {offset}");
        }
    }

    #[test]
    fn copy_link_reports_the_url() {
        let (event, _task) = update(Message::CopyLink("https://kmikeym.com"));
        assert!(matches!(event, Event::LinkCopied("https://kmikeym.com")));
    }

    #[test]
    fn scroll_is_handled_inside_the_page() {
        let (event, _task) = update(Message::ScrollTo(Section::Press));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn hero_messages_are_forwarded() {
        let (event, _task) = update(Message::Hero(ascii::Message::PointerLeft));
        assert!(matches!(event, Event::Hero(ascii::Message::PointerLeft)));
    }
}
