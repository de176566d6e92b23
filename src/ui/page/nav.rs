// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: logo, section anchors, theme toggle.

use super::{Message, Section, ViewContext};
use crate::content;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, container, row, text, Row, Space};
use iced::{Element, Font, Length};

const ANCHORS: [(Section, &str); 4] = [
    (Section::Topics, "nav-topics"),
    (Section::Talks, "nav-talks"),
    (Section::Press, "nav-press"),
    (Section::About, "nav-about"),
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let logo = button(text(content::LOGO).font(Font {
        weight: Weight::Bold,
        ..Font::MONOSPACE
    }))
    .on_press(Message::ScrollTo(Section::Top))
    .style(styles::button::link);

    let anchors = ANCHORS.iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |links, (section, key)| {
            links.push(
                button(text(i18n.tr(key)).size(typography::BODY_SM))
                    .on_press(Message::ScrollTo(*section))
                    .style(styles::button::link),
            )
        },
    );

    let invite = button(text(i18n.tr("nav-invite")).size(typography::BODY_SM))
        .on_press(Message::ScrollTo(Section::Invite))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::nav_cta);

    // Label names the mode the click switches to
    let theme_key = if ctx.theme_mode.is_dark() {
        "nav-theme-light"
    } else {
        "nav-theme-dark"
    };
    let theme_toggle = button(text(i18n.tr(theme_key)).size(typography::CAPTION))
        .on_press(Message::ToggleTheme)
        .style(styles::button::link);

    let mut bar = row![logo, Space::new().width(Length::Fill)]
        .spacing(spacing::MD)
        .align_y(Vertical::Center);
    if let Some(status) = ctx.status {
        bar = bar.push(
            text(status.to_string())
                .size(typography::CAPTION)
                .style(styles::text::tertiary),
        );
    }
    let bar = bar.push(anchors).push(invite).push(theme_toggle);

    container(bar)
        .width(Length::Fill)
        .height(sizing::NAV_HEIGHT)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .style(styles::container::nav_bar)
        .into()
}
