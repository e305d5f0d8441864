// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the snack bar overlay.
//!
//! The `App` owns the one snack bar [`Controller`] of the window and passes
//! it to the view explicitly. Show requests always travel through the update
//! loop as [`Message::ShowSnackbar`], so any task can produce one.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::snackbar::{self, Controller, Request, Severity, StyledSpan, StyledText};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    snackbar: Controller<Message>,
    /// Whether new snack bars hide themselves.
    auto_hide: bool,
    /// Number of taps on the tappable snack bar.
    taps: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("snackbar_session", &self.snackbar.current_session())
            .field("auto_hide", &self.auto_hide)
            .field("taps", &self.taps)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            snackbar: Controller::new(),
            auto_hide: true,
            taps: 0,
        }
    }
}

impl App {
    /// Initializes application state from the settings file and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);

        let mut app = App {
            snackbar: Controller::with_config(&config.snackbar),
            ..Self::default()
        };
        if let Some(inset) = flags.safe_area_top {
            app.snackbar.set_safe_area_top(inset);
        }

        tracing::info!(
            auto_hide_secs = app.snackbar.auto_hide_delay().as_secs(),
            "snackbar demo ready"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Snackbar".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        self.snackbar.subscription().map(Message::Snackbar)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(severity) => {
                let request = Request::new(severity, severity_message(severity))
                    .auto_hide(self.auto_hide);
                snackbar::submit(request, Message::ShowSnackbar)
            }
            Message::ShowStyled => {
                let text: StyledText = [
                    StyledSpan::new("Exported ").bold(),
                    StyledSpan::new("holiday.png").italic().underline(),
                    StyledSpan::new(" to Pictures"),
                ]
                .into_iter()
                .collect();
                snackbar::submit(
                    Request::success(text).auto_hide(self.auto_hide),
                    Message::ShowSnackbar,
                )
            }
            Message::ShowTappable => snackbar::submit(
                Request::info("Tap to count")
                    .auto_hide(self.auto_hide)
                    .on_tap(Message::SnackbarTapped),
                Message::ShowSnackbar,
            ),
            Message::ShowSnackbar(request) => self.snackbar.show(*request).map(Message::Snackbar),
            Message::ToggleAutoHide(enabled) => {
                self.auto_hide = enabled;
                Task::none()
            }
            Message::Dismiss => {
                self.snackbar.dismiss();
                Task::none()
            }
            Message::SnackbarTapped => {
                self.taps += 1;
                Task::none()
            }
            Message::Snackbar(snackbar_message) => match self.snackbar.update(snackbar_message) {
                Some(on_tap) => self.update(on_tap),
                None => Task::none(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            snackbar: &self.snackbar,
            auto_hide: self.auto_hide,
            taps: self.taps,
        })
    }
}

fn severity_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Could not save the file",
        Severity::Warning => "Battery is running low",
        Severity::Info => "A new version is available",
        Severity::Success => "Saved",
    }
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load settings, using defaults");
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn show_now(app: &mut App, request: Request<Message>) {
        app.snackbar.install(request, Instant::now());
    }

    #[test]
    fn tapping_tappable_snackbar_counts_once_and_dismisses() {
        let mut app = App::default();
        show_now(&mut app, Request::info("Tap").on_tap(Message::SnackbarTapped));
        let session = app.snackbar.current_session().expect("session");

        let _ = app.update(Message::Snackbar(snackbar::Message::Tapped(session)));
        let _ = app.update(Message::Snackbar(snackbar::Message::Tapped(session)));

        assert_eq!(app.taps, 1);
        assert!(!app.snackbar.is_showing());
    }

    #[test]
    fn show_from_tap_handler_survives_the_dismissal() {
        let mut app = App::default();
        let follow_up = Request::success("Retried").auto_hide(false);
        show_now(
            &mut app,
            Request::error("Upload failed").on_tap(Message::ShowSnackbar(Box::new(follow_up))),
        );
        let tapped = app.snackbar.current_session().expect("session");

        let _ = app.update(Message::Snackbar(snackbar::Message::Tapped(tapped)));

        let view = app.snackbar.current().expect("follow-up should be showing");
        assert_eq!(view.severity(), Severity::Success);
        assert_ne!(app.snackbar.current_session(), Some(tapped));
    }

    #[test]
    fn show_snackbar_message_installs_request() {
        let mut app = App::default();
        let request = Request::warning("Battery low").auto_hide(false);

        let _ = app.update(Message::ShowSnackbar(Box::new(request)));

        let view = app.snackbar.current().expect("request should be installed");
        assert_eq!(view.severity(), Severity::Warning);
        assert_eq!(app.snackbar.current_auto_hide(), None);
    }

    #[test]
    fn show_button_only_queues_the_request() {
        let mut app = App::default();
        let task = app.update(Message::Show(Severity::Success));

        assert_eq!(task.units(), 1);
        assert!(!app.snackbar.is_showing());
    }

    #[test]
    fn dismiss_message_hides_snackbar() {
        let mut app = App::default();
        show_now(&mut app, Request::error("Failed"));

        let _ = app.update(Message::Dismiss);
        assert!(!app.snackbar.is_showing());
    }

    #[test]
    fn toggle_auto_hide_updates_state() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleAutoHide(false));
        assert!(!app.auto_hide);
    }

    #[test]
    fn load_config_falls_back_on_missing_file() {
        let flags = Flags {
            config_path: Some("/nonexistent/settings.toml".into()),
            safe_area_top: None,
        };
        assert_eq!(load_config(&flags), Config::default());
    }
}
