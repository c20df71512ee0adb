//! Response decoding: raw payload bytes → typed results.
//!
//! Hiscores arrive either as self-describing JSON or as positional text rows;
//! everything from the item database is JSON. Price and percentage fields
//! are normalised through [`numeric`] while decoding.

pub mod numeric;
pub mod positional;

use crate::error::{Error, Result};
use crate::models::{GraphData, Item, ItemCatalogPage, PlayerStats, ResponseFormat};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

pub use self::positional::{row_name, RowName};

/// Decode a hiscores payload in the format it was requested in.
pub fn decode_player_stats(payload: &[u8], format: ResponseFormat) -> Result<PlayerStats> {
    match format {
        ResponseFormat::Json => decode_json(payload, "hiscores"),
        ResponseFormat::Text => positional::parse_text_stats(payload),
    }
}

pub fn decode_catalog_page(payload: &[u8]) -> Result<ItemCatalogPage> {
    let page: ItemCatalogPage = decode_json(payload, "catalogue page")?;
    debug!("Catalogue page: {} of {} items", page.items.len(), page.total);
    Ok(page)
}

/// The detail endpoint wraps the item in an `{"item": {...}}` envelope.
pub fn decode_item(payload: &[u8]) -> Result<Item> {
    #[derive(Deserialize)]
    struct Envelope {
        item: Item,
    }
    let envelope: Envelope = decode_json(payload, "item detail")?;
    Ok(envelope.item)
}

pub fn decode_graph(payload: &[u8]) -> Result<GraphData> {
    let graph: GraphData = decode_json(payload, "price graph")?;
    debug!("Price graph: {} daily, {} average points", graph.daily.len(), graph.average.len());
    Ok(graph)
}

fn decode_json<T: DeserializeOwned>(payload: &[u8], context: &'static str) -> Result<T> {
    serde_json::from_slice(payload).map_err(|source| Error::Json { context, source })
}
