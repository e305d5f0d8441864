// SPDX-License-Identifier: MPL-2.0
//! Severity levels and their fixed visual mapping.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Severity level determines the background color and icon of a snack bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Something failed (red).
    Error,
    /// Something needs attention but nothing failed (yellow).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Success,
    ];

    /// Returns the background color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR,
            Severity::Warning => palette::WARNING,
            Severity::Info => palette::INFO,
            Severity::Success => palette::SUCCESS,
        }
    }

    /// Returns a text color readable on top of [`Severity::color`].
    #[must_use]
    pub fn text_color(&self) -> Color {
        match self {
            Severity::Warning | Severity::Success => palette::GRAY_900,
            Severity::Error | Severity::Info => palette::WHITE,
        }
    }

    /// Returns the icon glyph shown before the message, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Severity::Error => Some("\u{2715}"),
            Severity::Warning => Some("!"),
            Severity::Info => Some("i"),
            Severity::Success => Some("\u{2713}"),
        }
    }
}
