pub mod http_client;
pub mod paths;

use crate::config::ClientConfig;
use crate::decoder;
use crate::error::{Error, Result};
use crate::models::{GameMode, GraphData, Item, ItemCatalogPage, PlayerStats, ResponseFormat};
use async_trait::async_trait;
use std::future::Future;
use tracing::debug;

pub use self::http_client::HttpTransport;

// ── Transport trait ───────────────────────────────────────────────────────────

/// Swappable byte transport: fetch `path` relative to the service root.
///
/// Implementations return the body only on HTTP 200. A non-200 reply is
/// `Error::Status`, a network failure `Error::Transport`, and a failed body
/// read `Error::Body`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Vec<u8>>;
}

// ── Client ────────────────────────────────────────────────────────────────────

/// One request per call, no caching and no retries. Holds no per-call state,
/// so a single client can serve concurrent calls.
pub struct Client {
    transport: Box<dyn Transport>,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Player hiscores. `mode` defaults to the regular leaderboard and `format`
    /// to JSON.
    pub async fn hiscores(
        &self,
        username: &str,
        mode: Option<GameMode>,
        format: Option<ResponseFormat>,
    ) -> Result<PlayerStats> {
        let mode = mode.unwrap_or_default();
        let format = format.unwrap_or_default();
        let path = paths::hiscores_path(username, mode, format)?;

        debug!("Fetching {} hiscores for {:?} ({})", mode, username.trim(), format);
        let payload = self.transport.get(&path).await?;

        let stats = decoder::decode_player_stats(&payload, format)?;
        debug!("{:?}: {} skills, {} activities", username.trim(), stats.skills.len(), stats.activities.len());
        Ok(stats)
    }

    /// One page of the catalogue, filtered by first letter.
    pub async fn items(&self, alpha: &str, page: u32) -> Result<ItemCatalogPage> {
        let path = paths::catalogue_path(alpha, page)?;
        debug!("Fetching catalogue alpha={:?} page={}", alpha, page);
        let payload = self.transport.get(&path).await?;
        decoder::decode_catalog_page(&payload)
    }

    pub async fn item(&self, item_id: u64) -> Result<Item> {
        debug!("Fetching item {}", item_id);
        let payload = self.transport.get(&paths::item_detail_path(item_id)).await?;
        decoder::decode_item(&payload)
    }

    pub async fn item_graph(&self, item_id: u64) -> Result<GraphData> {
        debug!("Fetching price graph for item {}", item_id);
        let payload = self.transport.get(&paths::item_graph_path(item_id)).await?;
        decoder::decode_graph(&payload)
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

/// Race `call` against `signal`. If the signal resolves first the in-flight
/// call is dropped (aborting its request) and `Error::Cancelled` is returned.
pub async fn cancellable<T, F, S>(call: F, signal: S) -> Result<T>
where
    F: Future<Output = Result<T>>,
    S: Future,
{
    tokio::select! {
        biased;
        _ = signal => {
            debug!("Call cancelled by caller");
            Err(Error::Cancelled)
        }
        result = call => result,
    }
}
