// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Bubble built in code and attached to the stage.
    #[default]
    Programmatic,
    /// Bubble actions read from a markup document.
    Markup,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Programmatic, Screen::Markup];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Programmatic => "Programmatically",
            Screen::Markup => "With Markup",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "programmatic" => Ok(Screen::Programmatic),
            "markup" => Ok(Screen::Markup),
            other => Err(format!(
                "unknown screen {other:?} (expected \"programmatic\" or \"markup\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_names() {
        assert_eq!("programmatic".parse(), Ok(Screen::Programmatic));
        assert_eq!("Markup".parse(), Ok(Screen::Markup));
        assert!("storyboard".parse::<Screen>().is_err());
    }
}
