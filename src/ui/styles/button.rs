// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled call-to-action ("Invite Mike").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, shadow) = match status {
        button::Status::Hovered => (colors.brand_secondary, shadow::MD),
        _ => (colors.brand_primary, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BLACK,
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Outlined call-to-action ("Buy Shares").
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            color: colors.text_primary,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button used for nav anchors and inline links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Nav bar call-to-action: a small pill in the accent color.
pub fn nav_cta(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered => colors.surface_primary,
        _ => colors.brand_primary,
    };
    let background = match status {
        button::Status::Hovered => Some(Background::Color(colors.brand_primary)),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_brightens_on_hover() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let hovered = primary(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn secondary_is_transparent_at_rest() {
        let style = secondary(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn link_highlights_on_hover() {
        let colors = ColorScheme::dark();
        let style = link(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.text_color, colors.brand_primary);
    }
}
