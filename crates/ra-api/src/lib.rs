//! RetroAchievements Web API client.
//!
//! Provides an async client for the [RetroAchievements](https://retroachievements.org)
//! Web API (game metadata) and the media host (badge image downloads).

pub mod client;
pub mod types;

pub use client::{Client, Error};
pub use types::GameInfo;
