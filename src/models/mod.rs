mod item;

pub use item::{
    graph_timestamp, ChangeTrend, GraphData, Item, ItemCatalogPage, ItemSummary, PercentChange, Price,
    PriceTrend,
};

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Game mode ─────────────────────────────────────────────────────────────────

/// Leaderboard partition. Each one lives under its own hiscore path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Regular,
    Ironman,
    HardcoreIronman,
    UltimateIronman,
    Deadman,
    Seasonal,
    Tournament,
    FreshStart,
}

impl GameMode {
    pub const ALL: [GameMode; 8] = [
        GameMode::Regular,
        GameMode::Ironman,
        GameMode::HardcoreIronman,
        GameMode::UltimateIronman,
        GameMode::Deadman,
        GameMode::Seasonal,
        GameMode::Tournament,
        GameMode::FreshStart,
    ];

    /// Suffix appended to `hiscore_oldschool` in the request path.
    pub fn suffix(self) -> &'static str {
        match self {
            GameMode::Regular => "",
            GameMode::Ironman => "_ironman",
            GameMode::HardcoreIronman => "_hardcore_ironman",
            GameMode::UltimateIronman => "_ultimate",
            GameMode::Deadman => "_deadman",
            GameMode::Seasonal => "_seasonal",
            GameMode::Tournament => "_tournament",
            GameMode::FreshStart => "_fresh_start",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Regular => "regular",
            GameMode::Ironman => "ironman",
            GameMode::HardcoreIronman => "hardcore_ironman",
            GameMode::UltimateIronman => "ultimate_ironman",
            GameMode::Deadman => "deadman",
            GameMode::Seasonal => "seasonal",
            GameMode::Tournament => "tournament",
            GameMode::FreshStart => "fresh_start",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        if key == "ultimate" {
            return Ok(GameMode::UltimateIronman);
        }
        GameMode::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| Error::Validation(format!("unknown game mode {:?}", s)))
    }
}

// ── Response format ───────────────────────────────────────────────────────────

/// Encoding requested from the hiscores endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Self-describing object records.
    #[default]
    Json,
    /// Positional comma-separated rows.
    #[serde(alias = "ws", alias = "csv")]
    Text,
}

impl ResponseFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Text => "ws",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::Json => f.write_str("json"),
            ResponseFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "text" | "ws" | "csv" => Ok(ResponseFormat::Text),
            _ => Err(Error::Validation(format!("unknown response format {:?}", s))),
        }
    }
}

// ── Hiscores ──────────────────────────────────────────────────────────────────

/// Upstream reports unranked entries as -1.
pub const UNRANKED: i64 = -1;

fn unranked() -> i64 {
    UNRANKED
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    #[serde(default = "unranked")]
    pub rank: i64,
    pub level: i64,
    #[serde(alias = "xp")]
    pub experience: i64,
}

impl Skill {
    pub fn ranked(&self) -> Option<i64> {
        (self.rank > 0).then_some(self.rank)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    #[serde(default = "unranked")]
    pub rank: i64,
    pub score: i64,
}

impl Activity {
    pub fn ranked(&self) -> Option<i64> {
        (self.rank > 0).then_some(self.rank)
    }
}

/// Skills in canonical skill order followed by activities in canonical activity order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl PlayerStats {
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }
}
