//! Tiles: one visual proxy per record, tracked by stable index.

use crate::options::ColorOptions;
use crate::source::Record;

/// Net-worth bucket used for tile color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetWorthTier {
    /// Above the high threshold.
    High,
    /// Above the mid threshold, up to and including the high threshold.
    Mid,
    /// Everything else, including unparsable or missing values.
    Low,
}

impl NetWorthTier {
    /// Bucket for a numeric value.
    #[must_use]
    pub fn classify(value: f64, colors: &ColorOptions) -> Self {
        if value > colors.high_threshold {
            Self::High
        } else if value > colors.mid_threshold {
            Self::Mid
        } else {
            Self::Low
        }
    }

    /// RGBA background for this tier.
    #[must_use]
    pub fn color(self, colors: &ColorOptions) -> [f32; 4] {
        match self {
            Self::High => colors.high,
            Self::Mid => colors.mid,
            Self::Low => colors.low,
        }
    }
}

/// Parse display money text such as `"$251,260.80"`.
///
/// Everything except digits, `.` and `-` is stripped, then the longest
/// leading number (optional `-`, digits, at most one `.`) is read, so
/// `"$250,000 - $300,000"` yields 250000. Text with no leading number
/// yields `None`.
#[must_use]
pub fn parse_money(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();

    let mut end = usize::from(cleaned.starts_with('-'));
    let whole = digits(&cleaned[end..]);
    end += whole;
    let mut fraction = 0;
    if cleaned[end..].starts_with('.') {
        fraction = digits(&cleaned[end + 1..]);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return None;
    }
    cleaned[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Presentation data handed to the external tile builder.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCard {
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Secondary label text.
    pub label: String,
    /// Parsed net worth, 0.0 when missing or malformed.
    pub net_worth: f64,
    /// Color bucket for `net_worth`.
    pub tier: NetWorthTier,
    /// RGBA background for `tier`.
    pub color: [f32; 4],
}

impl TileCard {
    /// Build the card for `record`, recovering malformed money locally.
    #[must_use]
    pub fn from_record(record: &Record, colors: &ColorOptions) -> Self {
        let net_worth = match record.net_worth.as_deref() {
            None | Some("") => 0.0,
            Some(text) => parse_money(text).unwrap_or_else(|| {
                log::warn!(
                    "unparsable net worth {text:?} for '{}', using 0",
                    record.name
                );
                0.0
            }),
        };
        let tier = NetWorthTier::classify(net_worth, colors);
        Self {
            name: record.name.clone(),
            image: record.image.clone(),
            label: record.country.clone(),
            net_worth,
            tier,
            color: tier.color(colors),
        }
    }

    /// Re-derive tier and color after a color option change.
    pub fn restyle(&mut self, colors: &ColorOptions) {
        self.tier = NetWorthTier::classify(self.net_worth, colors);
        self.color = self.tier.color(colors);
    }
}

/// One record's tile. The live pose is kept in the session's pose array at
/// the same index so the scheduler can write a contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Position in the record sequence; never changes.
    pub index: usize,
    /// Card data for the external tile builder.
    pub card: TileCard,
}
