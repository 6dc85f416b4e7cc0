//! Record retrieval seams.
//!
//! Credentials and data retrieval are a two-step protocol: a
//! [`TokenProvider`] hands out an [`AccessToken`], then a [`RecordSource`]
//! uses it to return the finished, ordered record sequence. The session
//! only ever sees the resulting `Vec<Record>`.

mod file;
#[cfg(feature = "sheets")]
mod sheets;

use std::fmt;

pub use file::JsonFileSource;
use serde::Deserialize;
#[cfg(feature = "sheets")]
pub use sheets::SheetsSource;

use crate::error::TilescapeError;

/// One spreadsheet row.
///
/// Column order: name, photo URL, age, country, interest, net worth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Display name.
    pub name: String,
    /// Photo URL.
    pub image: String,
    /// Age as entered in the sheet.
    pub age: String,
    /// Country, shown as the tile's secondary label.
    pub country: String,
    /// Free-text interest.
    pub interest: String,
    /// Net worth display text (e.g. `"$251,260.80"`), if present.
    pub net_worth: Option<String>,
}

impl Record {
    /// Map a row of cell strings; missing trailing cells become empty.
    #[must_use]
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        Self {
            name: cell(0),
            image: cell(1),
            age: cell(2),
            country: cell(3),
            interest: cell(4),
            net_worth: row.get(5).filter(|s| !s.trim().is_empty()).cloned(),
        }
    }
}

/// Spreadsheet value-range payload (`{"values": [[...], ...]}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueRange {
    /// Rows of formatted cell values.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    /// Convert rows to records, skipping blank rows.
    ///
    /// Returns [`FetchError::Empty`] when no row remains.
    pub fn into_records(self) -> Result<Vec<Record>, FetchError> {
        let records: Vec<Record> = self
            .values
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .map(|row| Record::from_row(row.as_slice()))
            .collect();
        if records.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(records)
    }
}

/// Bearer token for a record source. `Debug` does not reveal the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token for an `Authorization` header.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Failure to obtain an access token.
#[derive(Debug)]
pub enum AuthError {
    /// No credential was configured.
    Missing(String),
    /// The credential provider refused the request.
    Denied(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(what) => write!(f, "no credential configured: {what}"),
            Self::Denied(msg) => write!(f, "access denied: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Failure to retrieve records.
#[derive(Debug)]
pub enum FetchError {
    /// Local read failure.
    Io(std::io::Error),
    /// Transport or HTTP status failure.
    Http(String),
    /// Payload was not a value range.
    Parse(String),
    /// The source holds no rows.
    Empty,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Http(msg) => write!(f, "request failed: {msg}"),
            Self::Parse(msg) => write!(f, "malformed value range: {msg}"),
            Self::Empty => f.write_str("source contains no records"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Step one: obtain credentials.
pub trait TokenProvider {
    /// Request a token usable by a [`RecordSource`].
    fn request_access_token(&mut self) -> Result<AccessToken, AuthError>;
}

/// Step two: retrieve the ordered record sequence.
pub trait RecordSource {
    /// Fetch every record, in source order.
    fn fetch_records(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<Record>, FetchError>;
}

/// Token fixed at construction, typically read from the environment.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: Option<AccessToken>,
    origin: String,
}

impl StaticToken {
    /// Always hands out `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(AccessToken::new(token)),
            origin: "static token".to_owned(),
        }
    }

    /// Token read from environment variable `var`, if set and non-empty.
    #[must_use]
    pub fn from_env(var: &str) -> Self {
        let token = std::env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(AccessToken::new);
        Self {
            token,
            origin: format!("environment variable {var}"),
        }
    }

    /// Placeholder token for sources that need no credentials.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::new("")
    }
}

impl TokenProvider for StaticToken {
    fn request_access_token(&mut self) -> Result<AccessToken, AuthError> {
        self.token
            .clone()
            .ok_or_else(|| AuthError::Missing(self.origin.clone()))
    }
}

/// Run both steps and return the records.
pub fn load_records(
    auth: &mut dyn TokenProvider,
    source: &dyn RecordSource,
) -> Result<Vec<Record>, TilescapeError> {
    let token = auth.request_access_token()?;
    let records = source.fetch_records(&token)?;
    log::info!("fetched {} records", records.len());
    Ok(records)
}
