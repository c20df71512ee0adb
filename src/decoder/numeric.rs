use crate::error::{Error, Result};

// ── Price shorthand ───────────────────────────────────────────────────────────

/// Parse a price with optional k/m/b suffix into whole coins.
/// "1,234" → 1234 | "2 k" → 2000 | "1.5m" → 1,500,000 | "3B" → 3,000,000,000
pub fn parse_price_shorthand(s: &str) -> Result<i64> {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != ' ' && *c != ',')
        .collect::<String>()
        .to_lowercase();

    let (num_str, multiplier) = if let Some(n) = cleaned.strip_suffix('k') {
        (n, 1_000.0)
    } else if let Some(n) = cleaned.strip_suffix('m') {
        (n, 1_000_000.0)
    } else if let Some(n) = cleaned.strip_suffix('b') {
        (n, 1_000_000_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };

    let num = num_str
        .parse::<f64>()
        .map_err(|e| Error::format(format!("price {:?}", s), e))?;

    truncate_price(num * multiplier).ok_or_else(|| Error::format(format!("price {:?}", s), "out of range"))
}

/// Truncate toward zero, rejecting NaN, infinities and anything past i64.
pub fn truncate_price(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

// ── Percent change ────────────────────────────────────────────────────────────

/// "12.34%" → 12.34 | " -5 % " → -5.0. Not divided by 100.
pub fn parse_percent(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    let body = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    body.parse::<f64>()
        .map_err(|e| Error::format(format!("percentage {:?}", s), e))
}

pub fn fmt_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
