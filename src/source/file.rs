//! Records from a value-range JSON file on disk.

use std::path::PathBuf;

use super::{AccessToken, FetchError, Record, RecordSource, ValueRange};

/// Reads a saved value-range response (`{"values": [[...]]}`).
///
/// The token is ignored; pair with [`StaticToken::anonymous`](super::StaticToken::anonymous).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    skip_header: bool,
}

impl JsonFileSource {
    /// Source reading `path`, treating every row as data.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skip_header: false,
        }
    }

    /// Drop the first row (a header exported along with the data).
    #[must_use]
    pub fn skipping_header(mut self) -> Self {
        self.skip_header = true;
        self
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_records(
        &self,
        _token: &AccessToken,
    ) -> Result<Vec<Record>, FetchError> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut range: ValueRange = serde_json::from_str(&content)
            .map_err(|e| FetchError::Parse(e.to_string()))?;
        if self.skip_header && !range.values.is_empty() {
            let _ = range.values.remove(0);
        }
        range.into_records()
    }
}
