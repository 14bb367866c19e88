//! Local top-10 leaderboard
//!
//! Ranking and qualification are pure functions of the loaded records; reading and
//! writing them goes through a [`LeaderboardStorage`] so tests can swap in memory.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_PLAYER_NAME, LEADERBOARD_CAPACITY, NAME_MAX_CHARS};
use crate::error::StorageError;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRecord {
    pub name: String,
    pub score: u32,
    /// Snake length at death
    pub length: u32,
    /// Time survived, excluding pauses
    pub time_ms: u64,
    /// Milliseconds since the UNIX epoch when the record was submitted
    #[serde(rename = "ts", default)]
    pub timestamp: u64,
}

impl LeaderboardRecord {
    /// Build a record, normalising the display name.
    pub fn new(name: &str, score: u32, length: u32, time_ms: u64, timestamp: u64) -> Self {
        Self {
            name: display_name(name),
            score,
            length,
            time_ms,
            timestamp,
        }
    }

    /// Stable identity used to highlight a record in the list
    pub fn key(&self) -> String {
        format!("{}|{}|{}", self.name, self.score, self.timestamp)
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        cmp_stats(self, other.score, other.length, other.time_ms)
            .then(self.timestamp.cmp(&other.timestamp))
    }
}

/// Order by score, length and time only. `Less` means `record` ranks ahead.
fn cmp_stats(record: &LeaderboardRecord, score: u32, length: u32, time_ms: u64) -> Ordering {
    score
        .cmp(&record.score)
        .then(length.cmp(&record.length))
        .then(record.time_ms.cmp(&time_ms))
}

/// Trim a submitted name, falling back to the placeholder when blank.
pub fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.chars().take(NAME_MAX_CHARS).collect()
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// `mm:ss` for the HUD and the board
pub fn format_clock(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Where the ranked list lives between sessions
pub trait LeaderboardStorage {
    fn load(&self) -> Result<Vec<LeaderboardRecord>, StorageError>;
    fn save(&mut self, records: &[LeaderboardRecord]) -> Result<(), StorageError>;
}

/// JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<LeaderboardRecord>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&mut self, records: &[LeaderboardRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }
}

/// Keeps the list in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Vec<LeaderboardRecord>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LeaderboardRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LeaderboardRecord] {
        &self.records
    }
}

impl LeaderboardStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<LeaderboardRecord>, StorageError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[LeaderboardRecord]) -> Result<(), StorageError> {
        self.records = records.to_vec();
        Ok(())
    }
}

/// The top records, best first
#[derive(Debug)]
pub struct Leaderboard<S> {
    storage: S,
    records: Vec<LeaderboardRecord>,
}

impl<S: LeaderboardStorage> Leaderboard<S> {
    /// Load from `storage`; unreadable or corrupt data starts an empty board.
    pub fn load(storage: S) -> Self {
        let mut records = match storage.load() {
            Ok(records) => records,
            Err(e) => {
                warn!("Leaderboard unavailable, starting empty: {}", e);
                Vec::new()
            }
        };
        records.sort_by(LeaderboardRecord::rank_cmp);
        records.truncate(LEADERBOARD_CAPACITY);
        debug!("Loaded {} leaderboard records", records.len());
        Self { storage, records }
    }

    pub fn records(&self) -> &[LeaderboardRecord] {
        &self.records
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether a run with these stats would make the board.
    pub fn qualifies(&self, score: u32, length: u32, time_ms: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.records.len() < LEADERBOARD_CAPACITY || self.rank(score, length, time_ms).is_some()
    }

    /// 1-based position a run would take, without inserting it.
    ///
    /// The candidate counts as the newest entry, so it places behind every exact tie.
    pub fn rank(&self, score: u32, length: u32, time_ms: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let ahead = self
            .records
            .iter()
            .filter(|r| cmp_stats(r, score, length, time_ms) != Ordering::Greater)
            .count();
        (ahead < LEADERBOARD_CAPACITY).then_some(ahead + 1)
    }

    /// Add a record and persist the list. Returns its rank if it stayed on the board.
    pub fn insert(&mut self, record: LeaderboardRecord) -> Option<usize> {
        self.records.push(record.clone());
        self.records.sort_by(LeaderboardRecord::rank_cmp);
        self.records.truncate(LEADERBOARD_CAPACITY);
        let rank = self
            .records
            .iter()
            .position(|r| *r == record)
            .map(|i| i + 1);

        if let Err(e) = self.storage.save(&self.records) {
            warn!("Failed to save leaderboard: {}", e);
        }
        info!(
            "Recorded {} with {} points (rank {:?})",
            record.name, record.score, rank
        );
        rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: u32, length: u32, time_ms: u64, timestamp: u64) -> LeaderboardRecord {
        LeaderboardRecord::new("p", score, length, time_ms, timestamp)
    }

    fn full_board() -> Leaderboard<MemoryStorage> {
        let records = (1..=10).map(|i| record(i * 10, 5, 1000, i as u64)).collect();
        Leaderboard::load(MemoryStorage::with_records(records))
    }

    #[test]
    fn test_blank_name_gets_placeholder() {
        assert_eq!(display_name("   "), DEFAULT_PLAYER_NAME);
        assert_eq!(display_name("  ada "), "ada");
        assert_eq!(display_name("abcdefghijklmnopq").chars().count(), NAME_MAX_CHARS);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61_999), "01:01");
        assert_eq!(format_clock(600_000), "10:00");
    }

    #[test]
    fn test_zero_score_never_qualifies() {
        let board = Leaderboard::load(MemoryStorage::new());
        assert!(!board.qualifies(0, 10, 1));
        assert_eq!(board.rank(0, 10, 1), None);
    }

    #[test]
    fn test_anything_positive_qualifies_on_short_board() {
        let board = Leaderboard::load(MemoryStorage::with_records(vec![record(500, 9, 10, 1)]));
        assert!(board.qualifies(10, 3, 99_999));
        assert_eq!(board.rank(10, 3, 99_999), Some(2));
        assert_eq!(board.rank(600, 3, 99_999), Some(1));
    }

    #[test]
    fn test_full_board_needs_to_beat_the_last_entry() {
        let board = full_board();
        // Last place is 10 points; a tie loses to the older record.
        assert!(!board.qualifies(10, 5, 1000));
        assert_eq!(board.rank(10, 5, 1000), None);
        // Faster time beats it.
        assert_eq!(board.rank(10, 5, 999), Some(10));
        // Longer snake beats it.
        assert_eq!(board.rank(10, 6, 5000), Some(10));
        assert_eq!(board.rank(55, 1, 1), Some(6));
    }

    #[test]
    fn test_insert_orders_by_all_four_keys() {
        let mut board = Leaderboard::load(MemoryStorage::new());
        board.insert(record(50, 4, 900, 4));
        board.insert(record(50, 4, 900, 2));
        board.insert(record(50, 4, 800, 9));
        board.insert(record(50, 6, 9999, 7));
        board.insert(record(70, 3, 5000, 8));

        let got: Vec<u64> = board.records().iter().map(|r| r.timestamp).collect();
        assert_eq!(got, vec![8, 7, 9, 2, 4]);
    }

    #[test]
    fn test_insert_caps_at_ten_and_reports_rank() {
        let mut board = full_board();
        assert_eq!(board.insert(record(45, 5, 1000, 100)), Some(7));
        assert_eq!(board.records().len(), LEADERBOARD_CAPACITY);
        assert_eq!(board.records().last().map(|r| r.score), Some(20));

        assert_eq!(board.insert(record(1, 1, 1, 101)), None);
        assert_eq!(board.records().len(), LEADERBOARD_CAPACITY);
        assert_eq!(board.storage().records(), board.records());
    }

    struct BrokenStorage;

    impl LeaderboardStorage for BrokenStorage {
        fn load(&self) -> Result<Vec<LeaderboardRecord>, StorageError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope").into())
        }

        fn save(&mut self, _: &[LeaderboardRecord]) -> Result<(), StorageError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope").into())
        }
    }

    #[test]
    fn test_broken_storage_degrades_to_in_memory_board() {
        let mut board = Leaderboard::load(BrokenStorage);
        assert!(board.records().is_empty());
        assert_eq!(board.insert(record(30, 4, 100, 1)), Some(1));
        assert_eq!(board.records().len(), 1);
    }

    #[test]
    fn test_record_uses_compact_json_keys() {
        let json = serde_json::to_value(record(30, 4, 1234, 99)).unwrap();
        assert_eq!(json["timeMs"], 1234);
        assert_eq!(json["ts"], 99);

        let old: LeaderboardRecord =
            serde_json::from_str(r#"{"name":"x","score":10,"length":4,"timeMs":5}"#).unwrap();
        assert_eq!(old.timestamp, 0);
    }
}
