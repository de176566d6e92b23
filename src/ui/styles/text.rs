// SPDX-License-Identifier: MPL-2.0
//! Text color roles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Dates, durations and other supporting detail.
pub fn tertiary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_tertiary),
    }
}

/// Section labels and topic numbers.
pub fn accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}
