// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides transient, auto-dismissing snack bar notifications
//! for applications built with the Iced GUI framework.
//!
//! A single banner is layered above all window content, colored by severity,
//! optionally tappable, and hidden after a delay or on request. See
//! [`ui::snackbar`] for the widget and [`app`] for a small demo host.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
