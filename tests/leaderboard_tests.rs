use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neon_snake::leaderboard::{
    JsonFileStorage, Leaderboard, LeaderboardRecord, LeaderboardStorage, MemoryStorage,
};

fn record(name: &str, score: u32, length: u32, time_ms: u64, ts: u64) -> LeaderboardRecord {
    LeaderboardRecord::new(name, score, length, time_ms, ts)
}

#[test]
fn json_file_round_trips_a_full_board() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("leaderboard.json");

    let mut board = Leaderboard::load(JsonFileStorage::new(&path));
    for i in 0..12u32 {
        board.insert(record(&format!("p{i}"), 10 * (i % 5 + 1), 3 + i, 1_000 * i as u64, i as u64));
    }
    assert_eq!(board.records().len(), 10);

    let reloaded = Leaderboard::load(JsonFileStorage::new(&path));
    assert_eq!(reloaded.records(), board.records());
}

#[test]
fn file_uses_the_documented_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("leaderboard.json");
    let mut storage = JsonFileStorage::new(&path);
    storage
        .save(&[record("Ada", 30, 6, 12_345, 1_700_000_000_000)])
        .expect("save");

    let raw = fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let entry = &value[0];
    assert_eq!(entry["name"], "Ada");
    assert_eq!(entry["score"], 30);
    assert_eq!(entry["length"], 6);
    assert_eq!(entry["timeMs"], 12_345);
    assert_eq!(entry["ts"], 1_700_000_000_000u64);
}

#[test]
fn records_without_timestamp_still_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("leaderboard.json");
    fs::write(
        &path,
        r#"[{"name":"old","score":20,"length":5,"timeMs":9000}]"#,
    )
    .expect("write");

    let board = Leaderboard::load(JsonFileStorage::new(&path));
    assert_eq!(board.records().len(), 1);
    assert_eq!(board.records()[0].timestamp, 0);
}

#[test]
fn unreadable_files_start_an_empty_board() {
    let dir = tempfile::tempdir().expect("tempdir");
    for (file, contents) in [
        ("garbage.json", "not json at all"),
        ("object.json", r#"{"name":"x"}"#),
        ("wrong_types.json", r#"[{"name":1,"score":"a"}]"#),
    ] {
        let path = dir.path().join(file);
        fs::write(&path, contents).expect("write");
        let board = Leaderboard::load(JsonFileStorage::new(&path));
        assert!(board.records().is_empty(), "{file} should load empty");
    }

    let missing = Leaderboard::load(JsonFileStorage::new(dir.path().join("missing.json")));
    assert!(missing.records().is_empty());
}

#[test]
fn unsorted_oversized_storage_is_normalised_on_load() {
    let records: Vec<_> = (0..15u32)
        .map(|i| record("x", i * 10, 3, 0, i as u64))
        .collect();
    let board = Leaderboard::load(MemoryStorage::with_records(records));
    let scores: Vec<u32> = board.records().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![140, 130, 120, 110, 100, 90, 80, 70, 60, 50]);
}

#[test]
fn projected_rank_matches_qualification_and_insertion() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let count = rng.random_range(0..=12);
        let existing: Vec<_> = (0..count)
            .map(|i| {
                record(
                    "r",
                    rng.random_range(0..6) * 10,
                    rng.random_range(3..6),
                    rng.random_range(0..3) * 1_000,
                    i as u64,
                )
            })
            .collect();
        let mut board = Leaderboard::load(MemoryStorage::with_records(existing));

        let score = rng.random_range(0..6) * 10;
        let length = rng.random_range(3..6);
        let time_ms = rng.random_range(0..3) * 1_000;
        let rank = board.rank(score, length, time_ms);
        assert_eq!(board.qualifies(score, length, time_ms), rank.is_some());

        if let Some(rank) = rank {
            let inserted = board.insert(record("new", score, length, time_ms, 1_000));
            assert_eq!(inserted, Some(rank));
        }
    }
}
