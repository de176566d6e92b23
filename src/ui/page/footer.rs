// SPDX-License-Identifier: MPL-2.0
//! Page footer: name, location, copyright and social links.

use super::Message;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, column, container, row, text, Row, Space};
use iced::{Element, Font, Length};

pub fn view<'a>(i18n: &I18n, year: i32) -> Element<'a, Message> {
    let identity = column![
        text(content::NAME).size(typography::BODY).font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        }),
        text(content::LOCATION)
            .size(typography::BODY_SM)
            .style(styles::text::secondary),
        text(content::copyright(year))
            .size(typography::CAPTION)
            .style(styles::text::tertiary),
    ]
    .spacing(spacing::XXS);

    let links = content::FOOTER_LINKS
        .iter()
        .fold(
            Row::new().spacing(spacing::SM).align_y(Vertical::Center),
            |links, link| {
                links.push(
                    button(text(link.label).size(typography::BODY_SM))
                        .on_press(Message::CopyLink(link.url))
                        .style(styles::button::link),
                )
            },
        )
        .push(
            button(text(i18n.tr("footer-shares")).size(typography::BODY_SM))
                .on_press(Message::CopyLink(content::SHARES_URL))
                .style(styles::button::nav_cta),
        );

    container(
        row![identity, Space::new().width(Length::Fill), links.wrap()]
            .spacing(spacing::LG)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XL, spacing::LG])
    .style(styles::container::nav_bar)
    .into()
}
