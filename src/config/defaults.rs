// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Bubble appearance**: Corner radius and label font size
//! - **Animation**: Fade durations and the auto-hide delay
//! - **Demo**: Placement of the bubble inside the demo screens

// ==========================================================================
// Bubble Appearance Defaults
// ==========================================================================

/// Corner radius of the bubble background.
pub const DEFAULT_CORNER_RADIUS: f32 = 3.0;

/// Point size of the label font.
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 14.0;

/// Number of label lines; zero means unlimited.
pub const DEFAULT_LABEL_NUMBER_OF_LINES: usize = 0;

/// Relative line height used when limiting the label to a number of lines.
pub const LABEL_LINE_HEIGHT: f32 = 1.3;

/// Inner padding between the bubble edge and its label.
pub const BUBBLE_PADDING: f32 = 8.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Fade duration used by `show()`/`hide()` when none is given (in milliseconds).
pub const DEFAULT_FADE_MS: u64 = 300;

/// Fade-out duration of the automatic hide, regardless of the show duration.
pub const AUTO_HIDE_FADE_MS: u64 = 300;

/// Time the bubble stays fully visible before hiding itself (in milliseconds).
pub const DEFAULT_AUTO_HIDE_MS: u64 = 3000;

/// Interval between animation ticks while a bubble is animating (in milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Distance between the top of a demo screen and the bubble.
pub const DEMO_BUBBLE_TOP_OFFSET: f32 = 100.0;

/// Number of event log lines shown under the demo screens.
pub const DEMO_EVENT_LOG_LINES: usize = 8;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_CORNER_RADIUS >= 0.0);
    assert!(DEFAULT_LABEL_FONT_SIZE > 0.0);
    assert!(LABEL_LINE_HEIGHT >= 1.0);

    assert!(DEFAULT_FADE_MS > 0);
    assert!(AUTO_HIDE_FADE_MS > 0);
    assert!(DEFAULT_AUTO_HIDE_MS > AUTO_HIDE_FADE_MS);
    assert!(ANIMATION_TICK_MS > 0);

    assert!(DEMO_EVENT_LOG_LINES > 0);
};
