// SPDX-License-Identifier: MPL-2.0
//! `speaker_page` is a single-page speaker portfolio built with the Iced GUI
//! framework.
//!
//! Its hero region plays a short clip as colored ASCII art. The converter and
//! decoder are heavy, so they are mounted a moment after the page appears
//! through a deferred, cancellable, one-shot mount controller ([`hero::mount`]).

pub mod app;
pub mod ascii;
pub mod config;
pub mod content;
pub mod error;
pub mod hero;
pub mod i18n;
pub mod ui;
pub mod video;

#[cfg(test)]
pub(crate) mod test_utils;
