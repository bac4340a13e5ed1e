// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    /// "Show bubble" on the programmatic screen.
    ShowProgrammatic,
    /// Run the markup action at this index.
    RunAction(usize),
    Tick(Instant), // Periodic tick while a bubble is fading
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `INFO_BUBBLE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Markup document replacing the built-in actions.
    pub markup_path: Option<PathBuf>,
    /// Screen shown at startup.
    pub screen: Option<Screen>,
}
