// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`snackbar`] - Snack bar overlay, its controller and view
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod snackbar;
