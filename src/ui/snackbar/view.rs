// SPDX-License-Identifier: MPL-2.0
//! Visual element for a single snack bar.
//!
//! A `SnackbarView` is built unattached from a severity and a text, then
//! installed by the [`Controller`](super::Controller), which stamps it with a
//! session id. Taps are reported as [`Message::Tapped`] carrying that id, so
//! the view never holds a reference back to its owner.

use super::controller::{Message, SessionId};
use super::request::{SnackbarText, StyledSpan};
use super::severity::Severity;
use crate::ui::design_tokens::{shadow, sizing, spacing, typography};
use iced::font::{Style as FontStyle, Weight};
use iced::widget::text::Span;
use iced::widget::{container, mouse_area, rich_text, span, text, Container, Row};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// A rendered snack bar and its pending tap message.
#[derive(Debug)]
pub struct SnackbarView<M> {
    session: Option<SessionId>,
    severity: Severity,
    text: SnackbarText,
    on_tap: Option<M>,
}

impl<M> SnackbarView<M> {
    /// Builds an unattached view with the background and icon of `severity`.
    pub fn create_with_style(severity: Severity, text: impl Into<SnackbarText>) -> Self {
        Self {
            session: None,
            severity,
            text: text.into(),
            on_tap: None,
        }
    }

    /// Stores the message delivered when the view is tapped.
    #[must_use]
    pub fn with_tap_handler(mut self, on_tap: M) -> Self {
        self.on_tap = Some(on_tap);
        self
    }

    pub(crate) fn attach(&mut self, session: SessionId) {
        self.session = Some(session);
    }

    /// Removes the stored tap message, leaving the view without one.
    pub fn take_tap_handler(&mut self) -> Option<M> {
        self.on_tap.take()
    }

    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &SnackbarText {
        &self.text
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.severity.color()
    }

    #[must_use]
    pub fn has_tap_handler(&self) -> bool {
        self.on_tap.is_some()
    }

    /// Message emitted when the view is pressed. Unattached views are inert.
    fn tap_message(&self) -> Option<Message> {
        self.session.map(Message::Tapped)
    }

    /// Renders the view clipped to `height`, with `safe_area_top` of padding
    /// above the content.
    pub fn view(&self, height: f32, safe_area_top: f32) -> Element<'_, Message> {
        let severity = self.severity;
        let foreground = severity.text_color();

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .height(Length::Fixed(sizing::SNACKBAR_HEIGHT));

        if let Some(icon) = severity.icon() {
            content = content.push(
                Container::new(text(icon).size(typography::ICON).color(foreground))
                    .width(Length::Fixed(sizing::ICON_MD))
                    .align_x(alignment::Horizontal::Center),
            );
        }

        let label: Element<'_, Message> = match &self.text {
            SnackbarText::Plain(message) => text(message.as_str())
                .size(typography::BODY)
                .color(foreground)
                .into(),
            SnackbarText::Styled(styled) => {
                let spans: Vec<Span<'_, ()>> = styled
                    .spans()
                    .iter()
                    .map(|s| styled_span(s, foreground))
                    .collect();
                rich_text(spans).size(typography::BODY).into()
            }
        };

        content = content.push(
            Container::new(label)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        let body = Container::new(content)
            .width(Length::Fill)
            .padding(iced::Padding {
                top: safe_area_top,
                right: spacing::MD,
                bottom: 0.0,
                left: spacing::MD,
            })
            .style(move |_theme: &Theme| snackbar_container_style(severity));

        let tappable: Element<'_, Message> = match self.tap_message() {
            Some(message) => mouse_area(body).on_press(message).into(),
            None => body.into(),
        };

        Container::new(tappable)
            .width(Length::Fill)
            .max_height(height.max(0.0))
            .clip(true)
            .into()
    }
}

fn styled_span(styled: &StyledSpan, default_color: Color) -> Span<'_, ()> {
    let font = Font {
        weight: if styled.bold {
            Weight::Bold
        } else {
            Weight::Normal
        },
        style: if styled.italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        },
        ..Font::DEFAULT
    };

    span(styled.text.as_str())
        .color(styled.color.unwrap_or(default_color))
        .font(font)
        .underline(styled.underline)
}

/// Style function for the snack bar container.
///
/// The shadow is drawn from the container's bounds at each layout pass, so it
/// follows size changes such as the slide-in.
fn snackbar_container_style(severity: Severity) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(severity.color())),
        text_color: Some(severity.text_color()),
        shadow: shadow::SNACKBAR,
        ..Default::default()
    }
}
