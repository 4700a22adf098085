/// Shuffle player configuration
use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};
use soul_order::OrderKind;
use soul_playlist::{FileScanner, DEFAULT_EXTENSIONS, DEFAULT_TRACK_DURATION};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "soul-shuffle.toml";

/// Environment variable prefix, e.g. `SOUL_SHUFFLE_PLAYBACK__STRATEGY=random`
pub const ENV_PREFIX: &str = "SOUL_SHUFFLE";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_library")]
    pub library: LibrarySettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// Directory to scan; the command line argument wins over this
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub recursive: bool,

    #[serde(default)]
    pub follow_links: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default)]
    pub strategy: OrderKind,

    /// Total play time budget
    #[serde(default = "default_total_seconds")]
    pub total_seconds: f64,

    /// Play time of every file
    #[serde(default = "default_track_seconds")]
    pub track_seconds: f64,

    /// Seed for reproducible random orders
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `soul-shuffle.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with SOUL_SHUFFLE_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("library.extensions")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.library.extensions.iter().all(|ext| ext.trim().is_empty()) {
            return Err(PlayerError::Config(
                "At least one file extension is required".to_string(),
            ));
        }

        seconds_to_duration("playback.total_seconds", self.playback.total_seconds)?;

        let track = seconds_to_duration("playback.track_seconds", self.playback.track_seconds)?;
        if track.is_zero() {
            return Err(PlayerError::Config(
                "playback.track_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Scanner matching the library settings
    pub fn scanner(&self) -> FileScanner {
        FileScanner::new()
            .extensions(&self.library.extensions)
            .recursive(self.library.recursive)
            .follow_links(self.library.follow_links)
    }

    /// Directory to scan
    pub fn directory(&self) -> Result<&Path> {
        self.library.directory.as_deref().ok_or_else(|| {
            PlayerError::Config(
                "No directory given (pass one or set library.directory)".to_string(),
            )
        })
    }

    pub fn total_duration(&self) -> Result<Duration> {
        seconds_to_duration("playback.total_seconds", self.playback.total_seconds)
    }

    pub fn track_duration(&self) -> Result<Duration> {
        seconds_to_duration("playback.track_seconds", self.playback.track_seconds)
    }
}

fn seconds_to_duration(key: &str, seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds).map_err(|_| {
        PlayerError::Config(format!(
            "{} must be a non-negative number of seconds, got {}",
            key, seconds
        ))
    })
}

// Default values
fn default_library() -> LibrarySettings {
    LibrarySettings {
        directory: None,
        extensions: default_extensions(),
        recursive: false,
        follow_links: false,
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        strategy: OrderKind::default(),
        total_seconds: default_total_seconds(),
        track_seconds: default_track_seconds(),
        seed: None,
    }
}

fn default_total_seconds() -> f64 {
    60.0
}

fn default_track_seconds() -> f64 {
    DEFAULT_TRACK_DURATION.as_secs_f64()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            playback: default_playback(),
        }
    }
}
