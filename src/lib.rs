//! Client for the Old School RuneScape web services: player hiscores, the
//! Grand Exchange item catalogue, and item price graphs.
//!
//! ```no_run
//! use osrs_api::{AppConfig, Client, GameMode};
//!
//! # async fn run() -> osrs_api::Result<()> {
//! let client = Client::new(&AppConfig::default().client)?;
//! let stats = client.hiscores("Lynx Titan", Some(GameMode::Regular), None).await?;
//! println!("{} total level", stats.skills[0].level);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod decoder;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::client::{cancellable, Client, HttpTransport, Transport};
pub use crate::config::{AppConfig, ClientConfig};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::models::{
    Activity, ChangeTrend, GameMode, GraphData, Item, ItemCatalogPage, ItemSummary, PercentChange,
    PlayerStats, Price, PriceTrend, ResponseFormat, Skill,
};
