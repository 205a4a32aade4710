//! Sequential scan loop.

use badgescan_imagemeta::png_dimensions;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::rate_limit::RateLimiter;
use crate::report::Report;
use crate::source::GameSource;
use crate::types::{CheckResult, IconStatus, ScanConfig, REQUIRED_DIMENSIONS};

/// How often a progress line is logged, in processed games.
const PROGRESS_INTERVAL: u64 = 10;

/// Walks a range of game IDs and checks each badge's dimensions.
///
/// Failures are recorded per game and never abort the batch; cancelling
/// the token stops the loop before the next ID and leaves already
/// recorded results intact.
pub struct Scanner<'a> {
    source: &'a dyn GameSource,
    config: ScanConfig,
    cancel: CancellationToken,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a dyn GameSource, config: ScanConfig, cancel: CancellationToken) -> Self {
        Self {
            source,
            config,
            cancel,
        }
    }

    /// Runs the scan to completion or cancellation.
    pub async fn run(&self) -> Report {
        let mut report = Report::new();
        let mut limiter = RateLimiter::new(self.config.request_delay);
        let total = self.config.total();

        for game_id in self.config.start_id..=self.config.end_id {
            tokio::select! {
                // Cancellation wins over an elapsed rate-limit wait.
                biased;
                _ = self.cancel.cancelled() => {
                    warn!(game_id, "scan interrupted");
                    report.mark_interrupted();
                    break;
                }
                _ = limiter.wait() => {}
            }

            debug!(game_id, "checking game");
            let result = self.check_game(game_id).await;
            report.push(result);

            let processed = report.processed();
            if processed % PROGRESS_INTERVAL == 0 {
                info!(processed, total, "progress");
            }
        }

        report
    }

    /// Checks a single game, mapping every failure to a typed status.
    async fn check_game(&self, game_id: u32) -> CheckResult {
        let game = match self.source.fetch_game(game_id).await {
            Ok(game) => game,
            Err(e) => {
                warn!(game_id, error = %e, "failed to fetch game");
                return CheckResult {
                    game_id,
                    title: String::new(),
                    icon_path: None,
                    status: IconStatus::FetchError(e.to_string()),
                };
            }
        };

        let Some(icon_path) = game.icon_path().map(str::to_string) else {
            debug!(game_id, title = %game.title, "no badge path");
            return CheckResult {
                game_id,
                title: game.title,
                icon_path: None,
                status: IconStatus::MissingIcon,
            };
        };

        let status = match self.source.fetch_icon(&icon_path).await {
            Ok(data) => match png_dimensions(&data) {
                Ok(dims) if dims == REQUIRED_DIMENSIONS => IconStatus::Ok,
                Ok(dims) => {
                    warn!(game_id, title = %game.title, %dims, "badge has wrong dimensions");
                    IconStatus::BadDimensions(dims)
                }
                Err(e) => {
                    warn!(game_id, path = %icon_path, error = %e, "failed to decode badge");
                    IconStatus::DecodeError(e.to_string())
                }
            },
            Err(e) => {
                warn!(game_id, path = %icon_path, error = %e, "failed to download badge");
                IconStatus::DecodeError(e.to_string())
            }
        };

        CheckResult {
            game_id,
            title: game.title,
            icon_path: Some(icon_path),
            status,
        }
    }
}
