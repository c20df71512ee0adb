use crate::decoder::numeric::{fmt_percent, parse_percent, parse_price_shorthand, truncate_price};
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ── Price ─────────────────────────────────────────────────────────────────────

/// Whole coins. Upstream sends either a JSON number or a string like "1.2m".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Price(pub i64);

/// Shapes a price can arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPrice::deserialize(deserializer)
            .map_err(|_| de::Error::custom("price must be a number or an abbreviated string"))?;
        match raw {
            RawPrice::Int(n) => Ok(Price(n)),
            RawPrice::Float(f) => truncate_price(f)
                .map(Price)
                .ok_or_else(|| de::Error::custom(format!("price {} out of range", f))),
            RawPrice::Text(s) => s.parse::<Price>().map_err(de::Error::custom),
        }
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_price_shorthand(s).map(Price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Percent change ────────────────────────────────────────────────────────────

/// A percentage as upstream prints it: "12.34%" is 12.34, not 0.1234.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PercentChange(pub f64);

impl<'de> Deserialize<'de> for PercentChange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PercentChange>().map_err(de::Error::custom)
    }
}

/// Serialized at full precision; `Display` is the two-decimal rendering.
impl Serialize for PercentChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}%", self.0))
    }
}

impl FromStr for PercentChange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_percent(s).map(PercentChange)
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_percent(self.0))
    }
}

// ── Trends ────────────────────────────────────────────────────────────────────

/// Trend tags ("positive", "negative", "neutral", ...) are passed through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceTrend {
    pub price: Price,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeTrend {
    pub change: PercentChange,
    pub trend: String,
}

// ── Items ─────────────────────────────────────────────────────────────────────

/// Item fields shared by the catalogue listing and the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: u64,
    pub icon: String,
    pub icon_large: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "typeIcon")]
    pub type_icon: String,
    pub name: String,
    pub description: String,
    pub members: String,
    pub current: PriceTrend,
    pub today: PriceTrend,
}

impl ItemSummary {
    pub fn is_members(&self) -> bool {
        self.members.eq_ignore_ascii_case("true")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(flatten)]
    pub summary: ItemSummary,
    pub day30: ChangeTrend,
    pub day90: ChangeTrend,
    pub day180: ChangeTrend,
}

/// One page of the alphabetical catalogue listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemCatalogPage {
    pub total: u64,
    pub items: Vec<ItemSummary>,
}

// ── Price graph ───────────────────────────────────────────────────────────────

/// Price points keyed by upstream date strings (epoch milliseconds).
/// Map order carries no meaning; use the `*_series` accessors for chronology.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphData {
    pub daily: HashMap<String, i64>,
    pub average: HashMap<String, i64>,
}

impl GraphData {
    pub fn daily_series(&self) -> Vec<(&str, i64)> {
        chronological(&self.daily)
    }

    pub fn average_series(&self) -> Vec<(&str, i64)> {
        chronological(&self.average)
    }
}

/// Numeric keys sort before anything else, then by value; the rest sort as text.
fn chronological(points: &HashMap<String, i64>) -> Vec<(&str, i64)> {
    let mut series: Vec<(&str, i64)> = points.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    series.sort_by(|(a, _), (b, _)| match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    series
}

/// Interpret a graph key as an epoch-millisecond timestamp.
pub fn graph_timestamp(key: &str) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(key.trim().parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_native_number() {
        for n in [0i64, 1, -7, 2_147_483_647, 9_000_000_000, i64::MIN, i64::MAX] {
            let p: Price = serde_json::from_str(&n.to_string()).unwrap();
            assert_eq!(p, Price(n));
        }
        let p: Price = serde_json::from_str("1234.9").unwrap();
        assert_eq!(p, Price(1234));
    }

    #[test]
    fn test_price_from_string() {
        let p: Price = serde_json::from_str(r#""1.5m""#).unwrap();
        assert_eq!(p.0, 1_500_000);
        let p: Price = serde_json::from_str(r#""1,234""#).unwrap();
        assert_eq!(p.0, 1234);
    }

    #[test]
    fn test_price_rejects_other_shapes() {
        assert!(serde_json::from_str::<Price>("true").is_err());
        assert!(serde_json::from_str::<Price>("[1]").is_err());
        let err = serde_json::from_str::<Price>(r#""abc""#).unwrap_err();
        assert!(err.to_string().contains("abc"), "{err}");
    }

    #[test]
    fn test_percent_change_display_and_serialize() {
        let pc: PercentChange = serde_json::from_str(r#""12.34%""#).unwrap();
        assert_eq!(pc.0, 12.34);
        assert_eq!(pc.to_string(), "12.34%");
        assert_eq!(serde_json::to_string(&pc).unwrap(), r#""12.34%""#);

        let pc: PercentChange = serde_json::from_str(r#""-5%""#).unwrap();
        assert_eq!(pc.0, -5.0);
    }

    #[test]
    fn test_percent_change_reencode_keeps_precision() {
        for (input, expected) in [("12.345%", 12.345), ("0.004%", 0.004), ("-1.999%", -1.999)] {
            let pc: PercentChange = serde_json::from_str(&format!("{:?}", input)).unwrap();
            assert_eq!(pc.0, expected);
            let encoded = serde_json::to_string(&pc).unwrap();
            assert_eq!(encoded, format!("{:?}", input));
            let again: PercentChange = serde_json::from_str(&encoded).unwrap();
            assert_eq!(again, pc);
        }
        let pc: PercentChange = serde_json::from_str(r#""12.345%""#).unwrap();
        assert_eq!(pc.to_string(), "12.35%");
    }

    #[test]
    fn test_percent_change_requires_string() {
        assert!(serde_json::from_str::<PercentChange>("12.5").is_err());
    }

    #[test]
    fn test_graph_series_is_chronological() {
        let graph: GraphData = serde_json::from_str(
            r#"{"daily":{"1700086400000":30,"999999999999":10,"1700000000000":20},"average":{}}"#,
        )
        .unwrap();
        let series = graph.daily_series();
        let values: Vec<i64> = series.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![10, 20, 30]);
        assert!(graph.average_series().is_empty());
    }

    #[test]
    fn test_graph_timestamp() {
        let ts = graph_timestamp("1700000000000").unwrap();
        assert_eq!(ts.format("%Y-%m-%d").to_string(), "2023-11-14");
        assert!(graph_timestamp("yesterday").is_none());
    }
}
