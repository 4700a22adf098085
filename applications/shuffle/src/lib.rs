//! Soul Shuffle - play a directory of audio files in a chosen order

pub mod commands;
pub mod config;
pub mod error;

pub use config::PlayerConfig;
pub use error::{PlayerError, Result};
