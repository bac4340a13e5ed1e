// SPDX-License-Identifier: MPL-2.0
//! Declarative bubble actions for the markup screen.
//!
//! A markup document is a TOML file with one `[[bubble]]` table per button:
//!
//! ```toml
//! [[bubble]]
//! name = "Show configured"
//! text = "Hello World"
//! delegate = true
//!
//! [bubble.style]
//! background_color = "#5cb85c"
//! label_text_color = "#ffffff"
//! ```
//!
//! `style` uses the same keys as the `[bubble]` section of `settings.toml`.
//! An action with a style replaces the bubble's configuration; an action
//! without one keeps whatever configuration the bubble already has.

use crate::config::BubbleStyle;
use crate::error::{Error, MarkupError, Result};
use crate::ui::bubble::Configuration;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One button on the markup screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupAction {
    /// Button caption, unique within a document.
    pub name: String,

    /// Label text shown in the bubble.
    pub text: String,

    /// Installs the screen's event log as the bubble delegate.
    #[serde(default)]
    pub delegate: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BubbleStyle>,
}

impl MarkupAction {
    fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            delegate: false,
            style: None,
        }
    }

    /// Configuration this action installs, if it carries a style.
    pub fn configuration(&self, base: Configuration) -> Result<Option<Configuration>> {
        self.style
            .as_ref()
            .map(|style| style.apply_to(base))
            .transpose()
    }
}

/// A validated list of actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupDocument {
    #[serde(rename = "bubble", default)]
    actions: Vec<MarkupAction>,
}

impl MarkupDocument {
    /// Parses and validates a document.
    pub fn parse(source: &str) -> Result<Self> {
        let document: Self =
            toml::from_str(source).map_err(|err| MarkupError::Parse(err.to_string()))?;
        document.validate()?;
        Ok(document)
    }

    /// Reads and parses a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// The four actions of the built-in demo.
    #[must_use]
    pub fn builtin() -> Self {
        let configured = MarkupAction {
            style: Some(BubbleStyle {
                background_color: Some("#5cb85c".to_string()),
                label_text_color: Some("#ffffff".to_string()),
                ..BubbleStyle::default()
            }),
            ..MarkupAction::new("Show configured", "Hello World")
        };
        let with_delegate = MarkupAction {
            delegate: true,
            ..MarkupAction::new("Show with delegate", "Hello World")
        };

        Self {
            actions: vec![
                MarkupAction::new("Show default", "Hello World"),
                MarkupAction::new(
                    "Show multiline",
                    "Hello very big big big big big big big world",
                ),
                configured,
                with_delegate,
            ],
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[MarkupAction] {
        &self.actions
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&MarkupAction> {
        self.actions.get(index)
    }

    fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(MarkupError::NoActions.into());
        }

        let mut names = HashSet::new();
        for action in &self.actions {
            if !names.insert(action.name.as_str()) {
                return Err(MarkupError::DuplicateAction(action.name.clone()).into());
            }
            // Surface bad colors at load time rather than on button press.
            action.configuration(Configuration::default())?;
        }
        Ok(())
    }
}

impl Default for MarkupDocument {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Loads `path` when given, falling back to the built-in document.
///
/// Returns the document and a warning when the file could not be used.
pub fn load_or_builtin(path: Option<&Path>) -> (MarkupDocument, Option<String>) {
    let Some(path) = path else {
        return (MarkupDocument::builtin(), None);
    };

    match MarkupDocument::load(path) {
        Ok(document) => {
            tracing::info!(path = %path.display(), actions = document.actions.len(), "loaded markup");
            (document, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "using built-in markup");
            let warning = match err {
                Error::Io(_) => format!("{}: {err}", path.display()),
                _ => err.to_string(),
            };
            (MarkupDocument::builtin(), Some(warning))
        }
    }
}
