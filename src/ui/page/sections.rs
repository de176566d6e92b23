// SPDX-License-Identifier: MPL-2.0
//! Body sections between the hero and the footer.

use super::{content_width, section_header, Message};
use crate::content::{self, Link};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Element, Font, Length};

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

fn tag<'a>(label: &'static str) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::tag)
        .into()
}

fn link<'a>(link: &Link) -> Element<'a, Message> {
    button(text(link.label).size(typography::BODY_SM))
        .on_press(Message::CopyLink(link.url))
        .padding(0.0)
        .style(styles::button::link)
        .into()
}

pub fn bio<'a>(years: u32) -> Element<'a, Message> {
    content_width(
        column![
            text(content::BIO_LEAD).size(typography::TITLE_MD).font(bold()),
            text(content::interpolate_years(content::BIO, years))
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
        ]
        .spacing(spacing::MD),
    )
}

/// Venues separated by dots; no dot trails the last one.
pub fn credibility<'a>() -> Element<'a, Message> {
    let last = content::CREDIBILITY.len().saturating_sub(1);
    let items = content::CREDIBILITY.iter().enumerate().fold(
        Row::new().spacing(spacing::MD).align_y(Vertical::Center),
        |items, (i, item)| {
            let items = items.push(
                text(*item)
                    .size(typography::BODY_SM)
                    .font(Font::MONOSPACE)
                    .style(styles::text::secondary),
            );
            if i < last {
                items.push(
                    container(Space::new())
                        .width(sizing::DOT)
                        .height(sizing::DOT)
                        .style(styles::container::accent),
                )
            } else {
                items
            }
        },
    );

    container(items.wrap())
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::LG, spacing::LG])
        .style(styles::container::band)
        .into()
}

pub fn topics<'a>(i18n: &I18n, years: u32) -> Element<'a, Message> {
    let cards = content::TOPICS
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |cards, (i, topic)| {
            let tags = topic
                .tags
                .iter()
                .fold(Row::new().spacing(spacing::XS), |tags, label| {
                    tags.push(tag(*label))
                });

            cards.push(
                container(
                    column![
                        text(content::topic_number(i))
                            .size(typography::TITLE_LG)
                            .font(Font::MONOSPACE)
                            .style(styles::text::accent),
                        text(topic.title).size(typography::TITLE_SM).font(bold()),
                        text(content::interpolate_years(topic.description, years))
                            .size(typography::BODY)
                            .style(styles::text::secondary),
                        tags.wrap().vertical_spacing(spacing::XS),
                    ]
                    .spacing(spacing::SM),
                )
                .width(sizing::CARD_WIDTH)
                .padding(spacing::LG)
                .style(styles::container::card),
            )
        });

    content_width(
        column![
            section_header(
                i18n.tr("section-topics-label"),
                i18n.tr("section-topics-title")
            ),
            cards.wrap().vertical_spacing(spacing::LG),
        ]
        .spacing(spacing::XL),
    )
}

pub fn talks<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cards = content::TALKS.iter().fold(Row::new().spacing(spacing::LG), |cards, talk| {
        let embed = container(
            column![
                text(i18n.tr_with_args("talk-embed-host", &[("host", talk.host.label())]))
                    .size(typography::BODY_SM),
                button(text(i18n.tr("talk-copy-link")).size(typography::CAPTION))
                    .on_press(Message::CopyLink(talk.embed_url))
                    .padding(0.0)
                    .style(styles::button::link),
            ]
            .spacing(spacing::XS)
            .align_x(Horizontal::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::CARD_WIDTH * 9.0 / 16.0))
        .style(styles::container::embed);

        cards.push(
            container(
                column![
                    embed,
                    text(talk.venue)
                        .size(typography::CAPTION)
                        .font(Font::MONOSPACE)
                        .style(styles::text::accent),
                    text(talk.title).size(typography::BODY_LG).font(bold()),
                    text(talk.duration)
                        .size(typography::CAPTION)
                        .style(styles::text::tertiary),
                ]
                .spacing(spacing::XS),
            )
            .width(sizing::CARD_WIDTH)
            .padding(spacing::MD)
            .style(styles::container::card),
        )
    });

    content_width(
        column![
            section_header(
                i18n.tr("section-talks-label"),
                i18n.tr("section-talks-title")
            ),
            cards.wrap().vertical_spacing(spacing::LG),
        ]
        .spacing(spacing::XL),
    )
}

pub fn press<'a>(i18n: &I18n) -> Element<'a, Message> {
    let items = content::PRESS
        .iter()
        .fold(Column::new().spacing(spacing::MD), |items, item| {
            items.push(
                row![
                    button(text(item.title).size(typography::BODY_LG))
                        .on_press(Message::CopyLink(item.url))
                        .padding(0.0)
                        .style(styles::button::link),
                    Space::new().width(Length::Fill),
                    text(item.source)
                        .size(typography::CAPTION)
                        .font(Font::MONOSPACE)
                        .style(styles::text::tertiary),
                ]
                .spacing(spacing::MD)
                .align_y(Vertical::Center),
            )
        });

    content_width(
        column![
            section_header(
                i18n.tr("section-press-label"),
                i18n.tr("section-press-title")
            ),
            items,
        ]
        .spacing(spacing::XL),
    )
}

pub fn about<'a>(i18n: &I18n, years: u32) -> Element<'a, Message> {
    let paragraphs = content::ABOUT
        .iter()
        .fold(Column::new().spacing(spacing::MD), |paragraphs, paragraph| {
            paragraphs.push(
                text(content::interpolate_years(paragraph, years))
                    .size(typography::BODY_LG)
                    .style(styles::text::secondary),
            )
        });

    let links = content::ABOUT_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |links, about_link| {
            links.push(link(about_link))
        });

    let milestones = content::MILESTONES
        .iter()
        .fold(Column::new().spacing(spacing::XS), |milestones, milestone| {
            milestones.push(
                row![
                    text("›").style(styles::text::accent),
                    text(*milestone).size(typography::BODY),
                ]
                .spacing(spacing::XS),
            )
        })
        .width(sizing::CARD_WIDTH);

    content_width(
        column![
            section_header(
                i18n.tr("section-about-label"),
                i18n.tr("section-about-title")
            ),
            row![
                column![paragraphs, links.wrap()]
                    .spacing(spacing::LG)
                    .width(Length::Fill),
                milestones,
            ]
            .spacing(spacing::XXL),
        ]
        .spacing(spacing::XL),
    )
}

pub fn history<'a>(i18n: &I18n) -> Element<'a, Message> {
    let entries = content::HISTORY
        .iter()
        .fold(Column::new().spacing(spacing::SM), |entries, entry| {
            entries.push(
                row![
                    text(entry.date)
                        .size(typography::CAPTION)
                        .font(Font::MONOSPACE)
                        .style(styles::text::tertiary)
                        .width(sizing::HISTORY_DATE_WIDTH),
                    text(entry.event).size(typography::BODY),
                ]
                .spacing(spacing::MD)
                .align_y(Vertical::Center),
            )
        });

    content_width(
        column![
            section_header(
                i18n.tr("section-history-label"),
                i18n.tr("section-history-title")
            ),
            entries,
        ]
        .spacing(spacing::XL),
    )
}

pub fn invite<'a>(i18n: &I18n) -> Element<'a, Message> {
    let types = content::INVITE_TYPES
        .iter()
        .fold(Row::new().spacing(spacing::XS), |types, label| {
            types.push(tag(*label))
        });

    let email = button(text(content::EMAIL).size(typography::TITLE_SM).font(Font::MONOSPACE))
        .on_press(Message::CopyLink(content::EMAIL))
        .style(styles::button::link);

    container(content_width(
        column![
            text(i18n.tr("invite-title"))
                .size(typography::TITLE_LG)
                .font(bold()),
            text(i18n.tr("invite-subtitle"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
            types.wrap().vertical_spacing(spacing::XS),
            email,
        ]
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill),
    ))
    .width(Length::Fill)
    .style(styles::container::band)
    .into()
}
