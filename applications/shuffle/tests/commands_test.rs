//! End-to-end tests for the shuffle subcommands

use soul_order::OrderKind;
use soul_playlist::{PlaybackSink, PlaylistElement, PlaylistError, SleepingSink};
use soul_shuffle::{commands, PlayerConfig, PlayerError};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

// ===== Helpers =====

fn library(count: usize) -> TempDir {
    let temp = TempDir::new().unwrap();
    for i in 0..count {
        fs::write(temp.path().join(format!("track{:02}.mp3", i)), b"fake mp3").unwrap();
    }
    fs::write(temp.path().join("cover.jpg"), b"not audio").unwrap();
    temp
}

fn config_for(dir: &TempDir, strategy: OrderKind, seed: Option<u64>) -> PlayerConfig {
    let mut config = PlayerConfig::default();
    config.library.directory = Some(dir.path().to_path_buf());
    config.playback.strategy = strategy;
    config.playback.seed = seed;
    config
}

fn run_order(config: &PlayerConfig, count: Option<usize>) -> Vec<String> {
    let mut out = Vec::new();
    commands::order(config, count, false, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

struct CountingSink {
    played: usize,
}

impl PlaybackSink for CountingSink {
    fn play(&mut self, _element: &PlaylistElement, _duration: Duration) -> soul_playlist::Result<()> {
        self.played += 1;
        Ok(())
    }
}

// ===== Tests =====

#[test]
fn ordered_listing_is_sorted() {
    let dir = library(3);
    let lines = run_order(&config_for(&dir, OrderKind::Ordered, None), None);

    let expected: Vec<String> = (0..3)
        .map(|i| dir.path().join(format!("track{:02}.mp3", i)).display().to_string())
        .collect();
    assert_eq!(lines, expected);
}

#[test]
fn cycling_listing_defaults_to_two_passes() {
    let dir = library(4);
    let lines = run_order(&config_for(&dir, OrderKind::RandomCycle, Some(3)), None);

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[..4], lines[4..]);
}

#[test]
fn seeded_listing_is_reproducible() {
    let dir = library(10);
    let config = config_for(&dir, OrderKind::RandomCycleRegenerate, Some(77));

    assert_eq!(run_order(&config, Some(30)), run_order(&config, Some(30)));
}

#[test]
fn json_listing_parses() {
    let dir = library(5);
    let config = config_for(&dir, OrderKind::Random, Some(1));

    let mut out = Vec::new();
    let written = commands::order(&config, None, true, &mut out).unwrap();
    let paths: Vec<PathBuf> = serde_json::from_slice(&out).unwrap();

    assert_eq!(written, 5);
    assert_eq!(paths.iter().collect::<HashSet<_>>().len(), 5);
}

#[test]
fn shuffle_lists_every_file_once() {
    let dir = library(6);
    let config = config_for(&dir, OrderKind::Ordered, Some(12));

    let mut out = Vec::new();
    let written = commands::shuffle(&config, false, &mut out).unwrap();
    let lines: HashSet<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();

    assert_eq!(written, 6);
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|line| line.ends_with(".mp3")));
}

#[test]
fn play_respects_time_budget() {
    let dir = library(2);
    let mut config = config_for(&dir, OrderKind::OrderedCycle, None);
    config.playback.total_seconds = 10.0;
    config.playback.track_seconds = 2.0;
    config.validate().unwrap();

    let mut sink = CountingSink { played: 0 };
    let summary = commands::play(&config, &mut sink).unwrap();

    assert_eq!(summary.played, 5);
    assert_eq!(sink.played, 5);
    assert_eq!(summary.elapsed, Duration::from_secs(10));
}

#[test]
fn play_with_sleeping_sink_prints_paths() {
    let dir = library(2);
    let mut config = config_for(&dir, OrderKind::Ordered, None);
    config.playback.track_seconds = 0.001;

    let mut sink = SleepingSink::new(Vec::new());
    let summary = commands::play(&config, &mut sink).unwrap();

    assert_eq!(summary.played, 2);
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output.lines().count(), 2);
}

#[test]
fn cycling_over_empty_directory_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, OrderKind::OrderedCycle, None);

    let result = commands::order(&config, Some(3), false, &mut Vec::new());
    assert!(matches!(
        result,
        Err(PlayerError::Playlist(PlaylistError::Order(_)))
    ));
}

#[test]
fn missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = PlayerConfig::default();
    config.library.directory = Some(dir.path().join("gone"));

    let result = commands::shuffle(&config, false, &mut Vec::new());
    assert!(matches!(
        result,
        Err(PlayerError::Playlist(PlaylistError::FileNotFound(_)))
    ));
}
