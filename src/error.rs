// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A markup document or style section could not be turned into a bubble.
    Markup(MarkupError),
}

/// Specific problems found while reading bubble markup.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupError {
    /// Color string is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    InvalidColor(String),

    /// The document declares no actions.
    NoActions,

    /// Two actions share the same name.
    DuplicateAction(String),

    /// The document is not valid TOML or has unknown keys or values.
    Parse(String),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::InvalidColor(raw) => write!(f, "invalid color: {raw:?}"),
            MarkupError::NoActions => write!(f, "markup declares no actions"),
            MarkupError::DuplicateAction(name) => write!(f, "duplicate action name: {name}"),
            MarkupError::Parse(message) => write!(f, "{message}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Markup(e) => write!(f, "Markup Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MarkupError> for Error {
    fn from(err: MarkupError) -> Self {
        Error::Markup(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
