use crate::error::{Error, Result};
use crate::models::{GameMode, ResponseFormat};
use url::form_urlencoded::byte_serialize;

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// `m=hiscore_oldschool{suffix}/index_lite.{ext}?player={name}`
pub fn hiscores_path(username: &str, mode: GameMode, format: ResponseFormat) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::Validation("username is required".into()));
    }
    Ok(format!(
        "m=hiscore_oldschool{}/index_lite.{}?player={}",
        mode.suffix(),
        format.extension(),
        encode(username)
    ))
}

/// Catalogue listing. `alpha` is one letter, `#` for items starting with a digit,
/// or empty; pages start at 1.
pub fn catalogue_path(alpha: &str, page: u32) -> Result<String> {
    let alpha = alpha.trim();
    let valid = alpha.is_empty()
        || alpha == "#"
        || (alpha.len() == 1 && alpha.chars().all(|c| c.is_ascii_alphabetic()));
    if !valid {
        return Err(Error::Validation(format!(
            "alpha filter must be a single letter, '#', or empty (got {:?})",
            alpha
        )));
    }
    if page == 0 {
        return Err(Error::Validation("page numbers start at 1".into()));
    }
    Ok(format!(
        "m=itemdb_oldschool/api/catalogue/items.json?category=1&alpha={}&page={}",
        encode(&alpha.to_ascii_lowercase()),
        page
    ))
}

pub fn item_detail_path(item_id: u64) -> String {
    format!("m=itemdb_oldschool/api/catalogue/detail.json?item={}", item_id)
}

pub fn item_graph_path(item_id: u64) -> String {
    format!("m=itemdb_oldschool/api/graph/{}.json", item_id)
}
