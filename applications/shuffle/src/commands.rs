/// Subcommand implementations
use crate::config::PlayerConfig;
use crate::error::Result;
use soul_order::{entropy_rng, seeded_rng, OrderRng};
use soul_playlist::{PlaybackSink, PlaybackSummary, Playlist};
use std::io::Write;
use std::path::Path;

/// Scan the configured directory into a playlist
pub fn load_playlist(config: &PlayerConfig) -> Result<Playlist> {
    let playlist = Playlist::from_directory(
        config.directory()?,
        &config.scanner(),
        config.track_duration()?,
    )?;
    Ok(playlist)
}

/// Random source for this run: seeded when a seed is configured
pub fn rng_for(config: &PlayerConfig) -> OrderRng {
    match config.playback.seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source ({})", seed);
            seeded_rng(seed)
        }
        None => entropy_rng(),
    }
}

/// Play the playlist for the configured time
pub fn play<P: PlaybackSink + ?Sized>(config: &PlayerConfig, sink: &mut P) -> Result<PlaybackSummary> {
    let playlist = load_playlist(config)?;
    let summary = playlist.play_for_with_rng(
        config.total_duration()?,
        config.playback.strategy,
        rng_for(config),
        sink,
    )?;

    tracing::info!(
        "Played {} files in {:?}",
        summary.played,
        summary.elapsed
    );
    Ok(summary)
}

/// Write the first `count` entries of the configured order
///
/// `count` defaults to one pass, or two passes for cycling orders.
pub fn order<W: Write>(
    config: &PlayerConfig,
    count: Option<usize>,
    json: bool,
    out: &mut W,
) -> Result<usize> {
    let playlist = load_playlist(config)?;
    let kind = config.playback.strategy;
    let count = count.unwrap_or_else(|| {
        if kind.is_cycling() {
            playlist.len() * 2
        } else {
            playlist.len()
        }
    });

    let generator = playlist.order_generator_with_rng(kind, rng_for(config))?;
    let paths: Vec<&Path> = generator.take(count).map(|e| e.path()).collect();
    write_paths(&paths, json, out)?;

    Ok(paths.len())
}

/// Write one shuffled pass over the playlist
pub fn shuffle<W: Write>(config: &PlayerConfig, json: bool, out: &mut W) -> Result<usize> {
    let playlist = load_playlist(config)?;
    let view = playlist.shuffled_with_rng(rng_for(config));

    let paths: Vec<&Path> = view.iter().map(|e| e.path()).collect();
    write_paths(&paths, json, out)?;

    Ok(paths.len())
}

fn write_paths<W: Write>(paths: &[&Path], json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, paths)?;
        writeln!(out)?;
    } else {
        for path in paths {
            writeln!(out, "{}", path.display())?;
        }
    }
    out.flush()?;
    Ok(())
}
