// SPDX-License-Identifier: MPL-2.0
//! Hero: the ASCII video region with the name, tagline and calls to action
//! laid over it.
//!
//! The region keeps its size whether or not the video is mounted, so the page
//! does not shift when the deferred mount completes.

use super::{Message, Section, ViewContext};
use crate::content;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, column, container, row, stack, text, Space};
use iced::{Element, Font, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let ascii: Element<'a, Message> = match ctx.hero {
        Some(video) => video.view().map(Message::Hero),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let ctas = row![
        button(text(i18n.tr("hero-cta-invite")).size(typography::BODY))
            .on_press(Message::ScrollTo(Section::Invite))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary),
        button(text(i18n.tr("hero-cta-shares")).size(typography::BODY))
            .on_press(Message::CopyLink(content::SHARES_URL))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::secondary),
    ]
    .spacing(spacing::MD);

    let headline = container(
        column![
            text(content::NAME).size(typography::DISPLAY).font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
            text(content::TAGLINE)
                .size(typography::TITLE_MD)
                .style(styles::text::secondary),
            ctas,
        ]
        .spacing(spacing::LG)
        .align_x(Horizontal::Center),
    )
    .padding(spacing::XL)
    .style(styles::container::hero_scrim);

    let overlay = column![
        Space::new().height(Length::Fill),
        headline,
        Space::new().height(Length::Fill),
        text(i18n.tr("hero-scroll-hint"))
            .size(typography::CAPTION)
            .font(Font::MONOSPACE)
            .style(styles::text::tertiary),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center);

    container(stack![ascii, overlay])
        .width(Length::Fill)
        .height(sizing::HERO_HEIGHT)
        .align_y(Vertical::Center)
        .into()
}
