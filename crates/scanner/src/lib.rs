//! Badge dimension scan engine.
//!
//! Walks a range of game IDs sequentially, fetching metadata and probing
//! each badge's PNG header, with rate limiting between requests and
//! cooperative cancellation. One [`CheckResult`](types::CheckResult) is
//! recorded per requested ID, errors included.

pub mod rate_limit;
pub mod report;
pub mod scan;
pub mod source;
pub mod types;

pub use rate_limit::RateLimiter;
pub use report::Report;
pub use scan::Scanner;
pub use source::GameSource;
pub use types::{CheckResult, IconStatus, ScanConfig, REQUIRED_DIMENSIONS};
