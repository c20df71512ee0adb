//! Positional hiscores rows: the row index is the only thing that says which
//! skill or activity a row belongs to, so the tables below must track
//! upstream's row order exactly.

use crate::error::{Error, Result};
use crate::models::{Activity, PlayerStats, Skill};
use tracing::debug;

// ── Name tables ───────────────────────────────────────────────────────────────

pub const SKILLS: [&str; 24] = [
    "Overall", "Attack", "Defence", "Strength", "Hitpoints", "Ranged", "Prayer", "Magic",
    "Cooking", "Woodcutting", "Fletching", "Fishing", "Firemaking", "Crafting", "Smithing",
    "Mining", "Herblore", "Agility", "Thieving", "Slayer", "Farming", "Runecrafting",
    "Hunter", "Construction",
];

pub const ACTIVITIES: [&str; 79] = [
    "League Points", "Deadman Points", "Bounty Hunter - Hunter", "Bounty Hunter - Rogue",
    "Bounty Hunter (Legacy) - Hunter", "Bounty Hunter (Legacy) - Rogue", "Clue Scrolls (all)",
    "Clue Scrolls (beginner)", "Clue Scrolls (easy)", "Clue Scrolls (medium)", "Clue Scrolls (hard)",
    "Clue Scrolls (elite)", "Clue Scrolls (master)", "LMS - Rank", "PvP Arena - Rank", "Soul Wars Zeal",
    "Rifts closed", "Colosseum Glory", "Abyssal Sire", "Alchemical Hydra", "Artio", "Barrows Chests",
    "Bryophyta", "Callisto", "Cal'varion", "Cerberus", "Chambers of Xeric",
    "Chambers of Xeric: Challenge Mode", "Chaos Elemental", "Chaos Fanatic", "Commander Zilyana",
    "Corporeal Beast", "Crazy Archaeologist", "Dagannoth Prime", "Dagannoth Rex", "Dagannoth Supreme",
    "Deranged Archaeologist", "Duke Sucellus", "General Graardor", "Giant Mole", "Grotesque Guardians",
    "Hespori", "Kalphite Queen", "King Black Dragon", "Kraken", "Kree'Arra", "K'ril Tsutsaroth",
    "Lunar Chests", "Mimic", "Nex", "Nightmare", "Phosani's Nightmare", "Obor", "Phantom Muspah",
    "Sarachnis", "Scorpia", "Scurrius", "Skotizo", "Sol Heredit", "Spindel", "Tempoross",
    "The Gauntlet", "The Corrupted Gauntlet", "The Leviathan", "The Whisperer", "Theatre of Blood",
    "Theatre of Blood: Hard Mode", "Thermonuclear Smoke Devil", "Tombs of Amascut",
    "Tombs of Amascut: Expert Mode", "TzKal-Zuk", "TzTok-Jad", "Vardorvis", "Venenatis", "Vet'ion",
    "Vorkath", "Wintertodt", "Zalcano", "Zulrah",
];

/// Total number of rows a positional payload may carry.
pub const MAX_ROWS: usize = SKILLS.len() + ACTIVITIES.len();

/// What a row index maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowName {
    Skill(&'static str),
    Activity(&'static str),
}

impl RowName {
    pub fn as_str(self) -> &'static str {
        match self {
            RowName::Skill(name) | RowName::Activity(name) => name,
        }
    }
}

/// Map a zero-based row index to its skill or activity name.
pub fn row_name(index: usize) -> Result<RowName> {
    if let Some(&name) = SKILLS.get(index) {
        return Ok(RowName::Skill(name));
    }
    ACTIVITIES
        .get(index - SKILLS.len())
        .map(|&name| RowName::Activity(name))
        .ok_or_else(|| {
            Error::Schema(format!(
                "row {} has no name mapping (at most {} rows are known)",
                index + 1,
                MAX_ROWS
            ))
        })
}

// ── Text payload → PlayerStats ────────────────────────────────────────────────

/// Decode `rank,level,experience` rows (skills) followed by `rank,score[,_]` rows
/// (activities). Whitespace-only lines are skipped and do not count as rows.
/// Any bad row aborts the whole decode.
pub fn parse_text_stats(payload: &[u8]) -> Result<PlayerStats> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(payload);

    let mut stats = PlayerStats::default();

    let mut index = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| Error::format(format!("hiscores row {}", index + 1), e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        match row_name(index)? {
            RowName::Skill(name) => {
                let [rank, level, experience] = parse_columns::<3>(&record, index, 3)?;
                stats.skills.push(Skill {
                    name: name.to_string(),
                    rank,
                    level,
                    experience,
                });
            }
            RowName::Activity(name) => {
                // upstream now emits 2-column activity rows; older payloads carry a third
                let [rank, score, _] = parse_columns::<3>(&record, index, 2)?;
                stats.activities.push(Activity {
                    name: name.to_string(),
                    rank,
                    score,
                });
            }
        }
        index += 1;
    }

    if stats.skills.len() < SKILLS.len() {
        return Err(Error::Schema(format!(
            "expected {} skill rows, got {}",
            SKILLS.len(),
            stats.skills.len()
        )));
    }

    debug!(
        "Decoded {} skills, {} activities from text rows",
        stats.skills.len(),
        stats.activities.len()
    );
    Ok(stats)
}

/// Parse between `min` and `N` integer columns; missing trailing columns read as 0.
fn parse_columns<const N: usize>(record: &csv::StringRecord, index: usize, min: usize) -> Result<[i64; N]> {
    let row = index + 1;
    if record.len() < min || record.len() > N {
        return Err(Error::format(
            format!("hiscores row {}", row),
            format!("expected {} to {} columns, found {}", min, N, record.len()),
        ));
    }

    let mut out = [0i64; N];
    for (col, cell) in record.iter().enumerate() {
        out[col] = cell.parse::<i64>().map_err(|e| {
            Error::format(format!("hiscores row {} column {} ({:?})", row, col + 1, cell), e)
        })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn rows(n: usize) -> String {
        (0..n)
            .map(|i| format!("{},{},{}\n", i + 1, 50 + i, 1000 * i))
            .collect()
    }

    #[test]
    fn test_row_name_boundaries() {
        assert_eq!(row_name(0).unwrap(), RowName::Skill("Overall"));
        assert_eq!(row_name(23).unwrap(), RowName::Skill("Construction"));
        assert_eq!(row_name(24).unwrap(), RowName::Activity("League Points"));
        assert_eq!(row_name(MAX_ROWS - 1).unwrap().as_str(), "Zulrah");
        assert_eq!(row_name(MAX_ROWS).unwrap_err().kind(), ErrorKind::Schema);
        assert_eq!(row_name(usize::MAX).unwrap_err().kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_exactly_skill_rows() {
        let stats = parse_text_stats(rows(24).as_bytes()).unwrap();
        assert_eq!(stats.skills.len(), 24);
        assert!(stats.activities.is_empty());
        let names: Vec<&str> = stats.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, SKILLS.to_vec());
        assert_eq!(stats.skills[1].rank, 2);
        assert_eq!(stats.skills[1].level, 51);
        assert_eq!(stats.skills[1].experience, 1000);
    }

    #[test]
    fn test_activity_rows_follow_skills() {
        let stats = parse_text_stats(rows(30).as_bytes()).unwrap();
        assert_eq!(stats.skills.len(), 24);
        assert_eq!(stats.activities.len(), 6);
        for (i, activity) in stats.activities.iter().enumerate() {
            assert_eq!(activity.name, ACTIVITIES[i]);
        }
        // third column is discarded for activities
        assert_eq!(stats.activities[0].rank, 25);
        assert_eq!(stats.activities[0].score, 74);
    }

    #[test]
    fn test_two_column_activity_rows() {
        let payload = format!("{}-1,-1\n12,340\n", rows(24));
        let stats = parse_text_stats(payload.as_bytes()).unwrap();
        assert_eq!(stats.activities.len(), 2);
        assert_eq!(stats.activities[0].ranked(), None);
        assert_eq!(stats.activities[1].score, 340);
    }

    #[test]
    fn test_too_many_rows() {
        let err = parse_text_stats(rows(MAX_ROWS + 1).as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(parse_text_stats(rows(MAX_ROWS).as_bytes()).is_ok());
    }

    #[test]
    fn test_too_few_rows() {
        assert_eq!(parse_text_stats(rows(10).as_bytes()).unwrap_err().kind(), ErrorKind::Schema);
        assert_eq!(parse_text_stats(b"").unwrap_err().kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_malformed_row_aborts() {
        let mut payload = rows(24);
        payload.push_str("1,abc,3\n");
        let err = parse_text_stats(payload.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("row 25 column 2"), "{err}");

        let short_skill = "1,2\n".repeat(24);
        assert_eq!(parse_text_stats(short_skill.as_bytes()).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut payload = rows(12);
        payload.push_str("\n   \n");
        payload.push_str(&rows(12));
        payload.push_str("-1,-1\n   \n");
        let stats = parse_text_stats(payload.as_bytes()).unwrap();
        assert_eq!(stats.skills.len(), 24);
        assert_eq!(stats.activities.len(), 1);
        assert_eq!(stats.activities[0].name, "League Points");
    }

    #[test]
    fn test_padded_cells_and_crlf() {
        let payload = " 7 , 99 ,13034431 \r\n".repeat(24) + "12, 340\r\n";
        let stats = parse_text_stats(payload.as_bytes()).unwrap();
        assert_eq!(stats.skills.len(), 24);
        assert_eq!(stats.skills[0].rank, 7);
        assert_eq!(stats.skills[23].experience, 13_034_431);
        assert_eq!(stats.activities[0].score, 340);
    }

    #[test]
    fn test_row_numbers_ignore_blank_lines() {
        let payload = format!("\n{}   \n1,abc\n", rows(24));
        let err = parse_text_stats(payload.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 25 column 2"), "{err}");
    }
}
