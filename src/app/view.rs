// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::snackbar::{Controller, Severity};
use iced::widget::{button, checkbox, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub snackbar: &'a Controller<Message>,
    pub auto_hide: bool,
    pub taps: u32,
}

/// Renders the controls with the snack bar overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let severity_buttons = Severity::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, severity| {
            row.push(button(Text::new(severity_label(*severity))).on_press(Message::Show(*severity)))
        });

    let auto_hide_checkbox = checkbox(ctx.auto_hide)
        .label("Auto-hide")
        .on_toggle(Message::ToggleAutoHide);

    let extra_buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Styled")).on_press(Message::ShowStyled))
        .push(button(Text::new("Tap me")).on_press(Message::ShowTappable))
        .push(button(Text::new("Dismiss")).on_press(Message::Dismiss));

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(severity_buttons)
        .push(extra_buttons)
        .push(auto_hide_checkbox)
        .push(Text::new(format!("Taps: {}", ctx.taps)).size(typography::BODY));

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(ctx.snackbar.view().map(Message::Snackbar))
        .into()
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Error",
        Severity::Warning => "Warning",
        Severity::Info => "Info",
        Severity::Success => "Success",
    }
}
