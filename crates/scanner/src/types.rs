//! Scan result and configuration types.

use std::time::Duration;

use badgescan_imagemeta::Dimensions;

/// Badge dimensions required by the content guidelines.
pub const REQUIRED_DIMENSIONS: Dimensions = Dimensions::new(96, 96);

/// Delay between consecutive API requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Outcome of checking a single game's badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    /// Badge matches the required dimensions.
    Ok,
    /// Badge decoded but has the wrong dimensions.
    BadDimensions(Dimensions),
    /// The game has no badge path in its metadata.
    MissingIcon,
    /// Metadata fetch or parse failed.
    FetchError(String),
    /// Badge download or header decode failed.
    DecodeError(String),
}

impl IconStatus {
    /// Whether this status counts toward the report's error total.
    ///
    /// Bad dimensions are a finding, not an error.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            IconStatus::MissingIcon | IconStatus::FetchError(_) | IconStatus::DecodeError(_)
        )
    }
}

/// Per-game check outcome, one per requested ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub game_id: u32,
    pub title: String,
    pub icon_path: Option<String>,
    pub status: IconStatus,
}

/// Scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// First game ID to check.
    pub start_id: u32,
    /// Last game ID to check (inclusive).
    pub end_id: u32,
    /// Delay between API requests.
    pub request_delay: Duration,
}

impl ScanConfig {
    /// Creates a config for the given inclusive ID range with the
    /// default request delay.
    pub fn new(start_id: u32, end_id: u32) -> Self {
        Self {
            start_id,
            end_id,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    /// Number of IDs in the range.
    pub fn total(&self) -> u64 {
        if self.end_id < self.start_id {
            return 0;
        }
        u64::from(self.end_id - self.start_id) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_dimensions_are_96x96() {
        assert_eq!(REQUIRED_DIMENSIONS, Dimensions::new(96, 96));
    }

    #[test]
    fn status_error_classification() {
        assert!(!IconStatus::Ok.is_error());
        assert!(!IconStatus::BadDimensions(Dimensions::new(98, 96)).is_error());
        assert!(IconStatus::MissingIcon.is_error());
        assert!(IconStatus::FetchError("boom".into()).is_error());
        assert!(IconStatus::DecodeError("not a PNG".into()).is_error());
    }

    #[test]
    fn config_total_counts_inclusive_range() {
        assert_eq!(ScanConfig::new(1, 100).total(), 100);
        assert_eq!(ScanConfig::new(5, 5).total(), 1);
        assert_eq!(ScanConfig::new(10, 5).total(), 0);
    }

    #[test]
    fn config_default_delay() {
        let config = ScanConfig::new(1, 3);
        assert_eq!(config.request_delay, Duration::from_millis(500));
    }
}
