//! Records from the Google Sheets values endpoint.

use super::{AccessToken, FetchError, Record, RecordSource, ValueRange};

const VALUES_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Fetches a range (default `Sheet1!A2:F`, header row excluded) with a
/// bearer token.
#[derive(Debug, Clone)]
pub struct SheetsSource {
    spreadsheet_id: String,
    range: String,
}

impl SheetsSource {
    /// Source for the default data range of `spreadsheet_id`.
    #[must_use]
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: "Sheet1!A2:F".to_owned(),
        }
    }

    /// Use a different A1-notation range.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    fn url(&self) -> String {
        format!(
            "{VALUES_ENDPOINT}/{}/values/{}",
            self.spreadsheet_id, self.range
        )
    }
}

impl RecordSource for SheetsSource {
    fn fetch_records(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<Record>, FetchError> {
        let url = self.url();
        log::debug!("fetching {url}");
        let content = ureq::get(&url)
            .header("Authorization", &format!("Bearer {}", token.secret()))
            .call()
            .map_err(|e| FetchError::Http(e.to_string()))?
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let range: ValueRange = serde_json::from_str(&content)
            .map_err(|e| FetchError::Parse(e.to_string()))?;
        range.into_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_the_values_endpoint() {
        let source = SheetsSource::new("abc123");
        assert_eq!(
            source.url(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Sheet1!A2:F"
        );
        let custom = SheetsSource::new("abc123").with_range("People!A2:F");
        assert!(custom.url().ends_with("/values/People!A2:F"));
    }
}
