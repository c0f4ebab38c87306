// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Navigation(NavigationError),
}

/// Navigation requests the controllers refuse.
///
/// These never reach the user: renderers only emit indices they obtained
/// from the current view, so hitting one of these is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested index is outside the current view.
    IndexOutOfRange { index: usize, len: usize },

    /// The current view holds no items.
    EmptyView,
}

impl NavigationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NavigationError::IndexOutOfRange { .. } => "error-navigation-out-of-range",
            NavigationError::EmptyView => "error-navigation-empty-view",
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for a view of {} items", index, len)
            }
            NavigationError::EmptyView => write!(f, "the view is empty"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Navigation(e) => write!(f, "Navigation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        Error::Navigation(err)
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
