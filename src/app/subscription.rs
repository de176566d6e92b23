// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::hero::HeroMount;
use crate::ui::page;
use iced::{event, window, Subscription};

/// Routes window close requests so the hero can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Decoder and effect subscriptions of the mounted hero, if any.
pub fn create_hero_subscription(hero: &HeroMount) -> Subscription<Message> {
    match hero.module() {
        Some(video) => video
            .subscription()
            .map(|message| Message::Page(page::Message::Hero(message))),
        None => Subscription::none(),
    }
}
