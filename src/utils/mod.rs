/// Format a large integer with thousands separators.
pub fn fmt_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Hiscore rank for display; unranked entries show as a dash.
pub fn fmt_rank(rank: Option<i64>) -> String {
    rank.map(fmt_number).unwrap_or_else(|| "—".to_string())
}

/// Truncate a name to `width` chars for table output.
pub fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(4_600_000_000), "4,600,000,000");
        assert_eq!(fmt_number(0), "0");
        assert_eq!(fmt_number(-12_500), "-12,500");
        assert_eq!(fmt_number(999), "999");
        assert_eq!(fmt_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_fmt_rank() {
        assert_eq!(fmt_rank(Some(1_234)), "1,234");
        assert_eq!(fmt_rank(None), "—");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Zulrah", 10), "Zulrah");
        assert_eq!(fit("Chambers of Xeric: Challenge Mode", 12), "Chambers of…");
    }
}
