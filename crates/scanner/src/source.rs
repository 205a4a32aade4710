//! Abstract source of game metadata and badge bytes.
//!
//! The scan loop works against this trait so tests can drive it with
//! canned responses instead of a live API.

use std::future::Future;
use std::pin::Pin;

use badgescan_ra_api::{Client, Error, GameInfo};

/// Abstract view of the RetroAchievements API used by the scanner.
pub trait GameSource: Send + Sync {
    /// Fetches metadata for a single game.
    fn fetch_game(
        &self,
        game_id: u32,
    ) -> Pin<Box<dyn Future<Output = Result<GameInfo, Error>> + Send + '_>>;

    /// Downloads the badge image at the given media path.
    fn fetch_icon(
        &self,
        icon_path: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, Error>> + Send + '_>>;
}

impl GameSource for Client {
    fn fetch_game(
        &self,
        game_id: u32,
    ) -> Pin<Box<dyn Future<Output = Result<GameInfo, Error>> + Send + '_>> {
        Box::pin(self.get_game(game_id))
    }

    fn fetch_icon(
        &self,
        icon_path: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, Error>> + Send + '_>> {
        let path = icon_path.to_string();
        Box::pin(async move { self.get_icon(&path).await })
    }
}
