//! Result accumulation and the final scan report.

use std::fmt::Write as _;

use crate::types::{CheckResult, IconStatus, REQUIRED_DIMENSIONS};

const SEPARATOR_WIDTH: usize = 80;

/// Ordered collection of per-game check results.
#[derive(Debug, Default)]
pub struct Report {
    results: Vec<CheckResult>,
    interrupted: bool,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result. Results must arrive in ascending game ID order.
    pub fn push(&mut self, result: CheckResult) {
        if let Some(last) = self.results.last() {
            debug_assert!(
                result.game_id > last.game_id,
                "results must arrive in ascending game ID order: {} after {}",
                result.game_id,
                last.game_id
            );
        }
        self.results.push(result);
    }

    /// Marks the report as cut short by an interrupt.
    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of games processed so far.
    pub fn processed(&self) -> u64 {
        self.results.len() as u64
    }

    pub fn ok_count(&self) -> u64 {
        self.count(|s| matches!(s, IconStatus::Ok))
    }

    pub fn bad_dimensions_count(&self) -> u64 {
        self.count(|s| matches!(s, IconStatus::BadDimensions(_)))
    }

    pub fn missing_icon_count(&self) -> u64 {
        self.count(|s| matches!(s, IconStatus::MissingIcon))
    }

    pub fn fetch_error_count(&self) -> u64 {
        self.count(|s| matches!(s, IconStatus::FetchError(_)))
    }

    pub fn decode_error_count(&self) -> u64 {
        self.count(|s| matches!(s, IconStatus::DecodeError(_)))
    }

    /// Total errors: fetch failures, decode failures, and missing badges.
    /// Wrong dimensions are findings, not errors.
    pub fn error_count(&self) -> u64 {
        self.count(IconStatus::is_error)
    }

    /// Results whose badge decoded to the wrong dimensions, in ID order.
    pub fn bad_dimensions(&self) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.status, IconStatus::BadDimensions(_)))
    }

    fn count(&self, pred: impl Fn(&IconStatus) -> bool) -> u64 {
        self.results.iter().filter(|r| pred(&r.status)).count() as u64
    }

    /// Renders the final plain-text report.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.interrupted {
            let _ = writeln!(out, "Scan interrupted. Showing partial results...");
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Results:");
        let _ = writeln!(out, "Total games processed: {}", self.processed());
        let _ = writeln!(out, "Errors encountered: {}", self.error_count());
        if self.missing_icon_count() > 0 {
            let _ = writeln!(out, "Games without a badge: {}", self.missing_icon_count());
        }

        let bad: Vec<&CheckResult> = self.bad_dimensions().collect();
        if bad.is_empty() {
            let _ = writeln!(
                out,
                "\nAll checked badges have correct dimensions ({REQUIRED_DIMENSIONS})."
            );
            return out;
        }

        let _ = writeln!(
            out,
            "\nFound {} games with incorrect dimensions:",
            bad.len()
        );
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
        for result in bad {
            let IconStatus::BadDimensions(dims) = &result.status else {
                continue;
            };
            let _ = writeln!(out, "Game ID: {}", result.game_id);
            let _ = writeln!(out, "Title: {}", result.title);
            let _ = writeln!(out, "Icon: {}", result.icon_path.as_deref().unwrap_or("-"));
            let _ = writeln!(out, "Dimensions: {dims}");
            let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
        }

        out
    }
}
