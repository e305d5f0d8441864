// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: Delay before a snack bar dismisses itself
//! - **Reveal**: Slide-in animation duration
//! - **Safe area**: Top inset reserved above the snack bar content

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default delay before a snack bar auto-hides (in seconds).
pub const DEFAULT_AUTO_HIDE_SECS: u32 = 5;

/// Minimum auto-hide delay (in seconds).
pub const MIN_AUTO_HIDE_SECS: u32 = 1;

/// Maximum auto-hide delay (in seconds).
pub const MAX_AUTO_HIDE_SECS: u32 = 60;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default slide-in duration (in milliseconds).
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 100;

/// Maximum slide-in duration (in milliseconds). Zero disables the animation.
pub const MAX_REVEAL_DURATION_MS: u64 = 1000;

/// Interval between animation frames while the snack bar slides in.
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Safe Area Defaults
// ==========================================================================

/// Default top safe-area inset (in logical pixels). Desktop windows have none.
pub const DEFAULT_SAFE_AREA_TOP: f32 = 0.0;

/// Largest top inset accepted from settings or the command line.
pub const MAX_SAFE_AREA_TOP: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_HIDE_SECS > 0);
    assert!(MAX_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS <= MAX_AUTO_HIDE_SECS);

    assert!(DEFAULT_REVEAL_DURATION_MS <= MAX_REVEAL_DURATION_MS);
    assert!(ANIMATION_FRAME_MS > 0);

    assert!(DEFAULT_SAFE_AREA_TOP >= 0.0);
    assert!(MAX_SAFE_AREA_TOP > DEFAULT_SAFE_AREA_TOP);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_hide_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTO_HIDE_SECS, 5);
        assert!(DEFAULT_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
        assert!(DEFAULT_AUTO_HIDE_SECS <= MAX_AUTO_HIDE_SECS);
    }

    #[test]
    fn reveal_defaults_are_valid() {
        assert_eq!(DEFAULT_REVEAL_DURATION_MS, 100);
        assert!(ANIMATION_FRAME_MS < DEFAULT_REVEAL_DURATION_MS);
    }
}
