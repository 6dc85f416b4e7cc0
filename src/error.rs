//! Crate-level error types.

use std::fmt;

use crate::source::{AuthError, FetchError};

/// Errors produced by the tilescape crate.
#[derive(Debug)]
pub enum TilescapeError {
    /// A target pose set does not have one pose per live tile.
    LengthMismatch {
        /// Number of live tiles in the session.
        tiles: usize,
        /// Number of target poses supplied.
        targets: usize,
    },
    /// A layout name that does not match any known layout.
    UnknownLayout(String),
    /// Access token acquisition failed.
    Auth(AuthError),
    /// Record retrieval failed.
    Fetch(FetchError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TilescapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { tiles, targets } => write!(
                f,
                "target pose count {targets} does not match tile count \
                 {tiles}"
            ),
            Self::UnknownLayout(name) => write!(
                f,
                "unknown layout '{name}' (expected one of: table, sphere, \
                 helix, grid, tetrahedron)"
            ),
            Self::Auth(e) => write!(f, "authorization error: {e}"),
            Self::Fetch(e) => write!(f, "record fetch error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TilescapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Auth(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AuthError> for TilescapeError {
    fn from(e: AuthError) -> Self {
        Self::Auth(e)
    }
}

impl From<FetchError> for TilescapeError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<std::io::Error> for TilescapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn length_mismatch_message_names_both_counts() {
        let err = TilescapeError::LengthMismatch {
            tiles: 12,
            targets: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn unknown_layout_lists_valid_names() {
        let err = TilescapeError::UnknownLayout("spiral".to_owned());
        let msg = err.to_string();
        assert!(msg.contains("spiral"));
        assert!(msg.contains("tetrahedron"));
        assert!(err.source().is_none());
    }

    #[test]
    fn fetch_error_is_chained() {
        let err = TilescapeError::from(FetchError::Empty);
        assert!(err.source().is_some());
    }
}
