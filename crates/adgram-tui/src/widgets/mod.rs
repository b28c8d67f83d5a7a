//! Widgets composing the deals view.

pub mod deals;
pub mod footer;
pub mod header;

use crate::prefs::Theme;
use adgram_proto::BadgeStyle;
use ratatui::style::Color;

/// Badge palette for the card list.
pub(crate) fn badge_color(style: BadgeStyle) -> Color {
    match style {
        BadgeStyle::Pending => Color::Yellow,
        BadgeStyle::Active => Color::Cyan,
        BadgeStyle::Success => Color::Green,
        BadgeStyle::Danger => Color::Red,
        BadgeStyle::Neutral => Color::DarkGray,
    }
}

pub(crate) fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

pub(crate) fn dim_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}
