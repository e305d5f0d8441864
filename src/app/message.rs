// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::snackbar::{self, Request, Severity};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a plain snack bar of the given severity.
    Show(Severity),
    /// Show a snack bar with styled text.
    ShowStyled,
    /// Show a snack bar that reacts to taps.
    ShowTappable,
    /// Deliver a fully built request to the overlay on the UI loop.
    ShowSnackbar(Box<Request<Message>>),
    /// Toggle auto-hide for snack bars created from now on.
    ToggleAutoHide(bool),
    /// Hide the current snack bar.
    Dismiss,
    /// Tap message carried by the tappable snack bar.
    SnackbarTapped,
    Snackbar(snackbar::Message),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Settings file to use instead of the default location.
    pub config_path: Option<PathBuf>,
    /// Top safe-area inset overriding the settings file.
    pub safe_area_top: Option<f32>,
}
