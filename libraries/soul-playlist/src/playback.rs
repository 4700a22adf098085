//! Timed playback over a playlist
//!
//! Playback is simulated: a [`PlaybackSink`] receives each element together
//! with how long it should play. [`SleepingSink`] prints the path and blocks
//! for that long.

use crate::element::PlaylistElement;
use crate::playlist::Playlist;
use crate::Result;
use rand::Rng;
use serde::Serialize;
use soul_order::{entropy_rng, OrderKind};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Destination for played elements
pub trait PlaybackSink {
    /// Play `element` for `duration`
    ///
    /// `duration` never exceeds the element's own duration; it is shorter
    /// when the playback budget runs out mid-element.
    fn play(&mut self, element: &PlaylistElement, duration: Duration) -> Result<()>;
}

/// Prints each path, then sleeps for the play duration
#[derive(Debug)]
pub struct SleepingSink<W: Write = Stdout> {
    out: W,
}

impl SleepingSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SleepingSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlaybackSink for SleepingSink<W> {
    fn play(&mut self, element: &PlaylistElement, duration: Duration) -> Result<()> {
        writeln!(self.out, "{}", element.path().display())?;
        self.out.flush()?;
        std::thread::sleep(duration);
        Ok(())
    }
}

/// What a [`Playlist::play_for`] run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackSummary {
    /// Strategy the run used
    pub kind: OrderKind,

    /// Number of elements handed to the sink
    pub played: usize,

    /// Play time used out of the budget
    pub elapsed: Duration,
}

impl Playlist {
    /// Play elements in `kind` order until `total` play time is used up
    ///
    /// Stops early when a finite order runs out. The last element is cut
    /// short if it would overrun the budget.
    pub fn play_for<P: PlaybackSink + ?Sized>(
        &self,
        total: Duration,
        kind: OrderKind,
        sink: &mut P,
    ) -> Result<PlaybackSummary> {
        self.play_for_with_rng(total, kind, entropy_rng(), sink)
    }

    /// [`play_for`](Self::play_for) drawing random orders from `rng`
    pub fn play_for_with_rng<R: Rng, P: PlaybackSink + ?Sized>(
        &self,
        total: Duration,
        kind: OrderKind,
        rng: R,
        sink: &mut P,
    ) -> Result<PlaybackSummary> {
        let mut generator = self.order_generator_with_rng(kind, rng)?;
        let mut remaining = total;
        let mut played = 0;

        // Consecutive elements that took no time. A full pass of them
        // would never drain the budget.
        let mut idle_streak = 0;

        tracing::info!(
            "Playing {} elements for {:?} in {} order",
            self.len(),
            total,
            kind
        );

        while !remaining.is_zero() && generator.has_next() {
            let element = generator.generate_next()?;
            let slot = element.duration().min(remaining);

            tracing::info!("Playing {} for {:?}", element.display_name(), slot);
            sink.play(element, slot)?;

            played += 1;
            remaining -= slot;

            if slot.is_zero() {
                idle_streak += 1;
                if idle_streak >= generator.len() {
                    tracing::warn!("Every element has zero duration, stopping playback");
                    break;
                }
            } else {
                idle_streak = 0;
            }
        }

        let summary = PlaybackSummary {
            kind,
            played,
            elapsed: total - remaining,
        };
        tracing::debug!(?summary, "Playback finished");

        Ok(summary)
    }
}
