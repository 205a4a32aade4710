//! API response types for the RetroAchievements Web API.

use serde::{Deserialize, Serialize};

/// Game metadata from the `API_GetGame.php` endpoint.
///
/// Only the fields the scanner needs are modeled; the API returns more.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(rename = "ID", default)]
    pub id: u32,

    #[serde(rename = "Title", default = "unknown_title")]
    pub title: String,

    /// Relative path of the game's badge image on the media host,
    /// e.g. `/Images/085573.png`.
    #[serde(rename = "ImageIcon", default)]
    pub image_icon: Option<String>,

    #[serde(rename = "ConsoleName", default)]
    pub console_name: String,
}

fn unknown_title() -> String {
    "Unknown".to_string()
}

impl GameInfo {
    /// Returns the badge path, treating an absent or empty `ImageIcon`
    /// field as missing.
    pub fn icon_path(&self) -> Option<&str> {
        self.image_icon.as_deref().filter(|p| !p.is_empty())
    }
}
