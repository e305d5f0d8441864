// SPDX-License-Identifier: MPL-2.0
//! Snack bar notifications.
//!
//! A snack bar is a single banner pinned to the top edge of the window, above
//! all other content. It is colored by severity, can carry a tap message, and
//! hides itself after a delay unless told otherwise. Only one snack bar is on
//! screen at a time: showing a new one replaces the current one.
//!
//! # Components
//!
//! - [`severity`] - `Severity` levels and their colors and icons
//! - [`request`] - `Request` builder and message text types
//! - [`controller`] - `Controller` owning the overlay and its lifecycle
//! - [`view`] - `SnackbarView` rendering one snack bar
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::ui::snackbar::{self, Controller, Request};
//!
//! // Owned by the application root
//! let mut snackbar: Controller<Message> = Controller::new();
//!
//! // From anywhere: queue a request onto the UI loop
//! let task = snackbar::submit(Request::success("Saved"), Message::ShowSnackbar);
//!
//! // In update: show, and schedule the auto-hide timer
//! Message::ShowSnackbar(request) => snackbar.show(*request).map(Message::Snackbar),
//!
//! // Route snack bar messages back, dispatching tap messages
//! if let Some(on_tap) = snackbar.update(message) {
//!     return self.update(on_tap);
//! }
//!
//! // In view: layer the overlay above the content
//! Stack::new().push(content).push(snackbar.view().map(Message::Snackbar))
//! ```

pub mod controller;
pub mod request;
pub mod reveal;
pub mod severity;
pub mod view;

pub use controller::{submit, AutoHide, Controller, Message, SessionId};
pub use request::{Request, SnackbarText, StyledSpan, StyledText};
pub use severity::Severity;
pub use view::SnackbarView;
