// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The page follows the Elm-style "state down, messages up" pattern.
//!
//! - [`page`] - The speaker page: nav bar, hero and content sections
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod page;
pub mod styles;
pub mod theming;
