// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! widget state is plain data advanced by the application's update loop.
//!
//! # Components
//!
//! - [`bubble`] - Info bubble overlay widget
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod bubble;
pub mod design_tokens;
pub mod theming;
