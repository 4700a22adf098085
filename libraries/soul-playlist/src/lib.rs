//! Soul Player - Directory Playlists
//!
//! Turns a directory of audio files into a playlist and plays it in any
//! [`OrderKind`] for a fixed amount of time.
//!
//! This crate provides:
//! - Extension-filtered directory scanning
//! - An immutable [`Playlist`] snapshot usable as an order index space
//! - Timed playback through a pluggable [`PlaybackSink`]
//!
//! Audio is not decoded. Every element plays for a configured duration.
//!
//! # Example
//!
//! ```rust,no_run
//! use soul_playlist::{FileScanner, Playlist, SleepingSink, DEFAULT_TRACK_DURATION};
//! use soul_order::OrderKind;
//! use std::time::Duration;
//!
//! let scanner = FileScanner::new().extensions(["mp3", "flac"]);
//! let playlist = Playlist::from_directory("/music", &scanner, DEFAULT_TRACK_DURATION)?;
//!
//! let mut sink = SleepingSink::stdout();
//! playlist.play_for(Duration::from_secs(30), OrderKind::RandomCycleRegenerate, &mut sink)?;
//! # Ok::<(), soul_playlist::PlaylistError>(())
//! ```

mod element;
mod error;
mod playback;
mod playlist;
mod scanner;

// Public exports
pub use element::{PlaylistElement, DEFAULT_TRACK_DURATION};
pub use error::{PlaylistError, Result};
pub use playback::{PlaybackSink, PlaybackSummary, SleepingSink};
pub use playlist::Playlist;
pub use scanner::{FileScanner, DEFAULT_EXTENSIONS};
pub use soul_order::OrderKind;
