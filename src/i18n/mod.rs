// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page chrome.
//!
//! Nav labels, section headings, calls to action and status lines are
//! translated with Fluent. The content tables themselves stay in English.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Fallback to `en-US` for keys missing from the current locale

pub mod fluent;
