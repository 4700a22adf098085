//! Directory playlists
//!
//! A [`Playlist`] is an immutable snapshot of the playable files in a
//! directory. Order generators and shuffled views borrow it, so it cannot
//! change while one of them is in use.

use crate::element::PlaylistElement;
use crate::scanner::FileScanner;
use crate::Result;
use rand::Rng;
use soul_order::{
    entropy_rng, IndexSpace, OrderGenerator, OrderKind, OrderRng, ShuffledView,
};
use std::path::Path;
use std::time::Duration;

/// Set of playable files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    elements: Vec<PlaylistElement>,
}

impl Playlist {
    /// Scan `directory` and give every match `track_duration`
    pub fn from_directory(
        directory: impl AsRef<Path>,
        scanner: &FileScanner,
        track_duration: Duration,
    ) -> Result<Self> {
        let directory = directory.as_ref();
        let elements: Vec<PlaylistElement> = scanner
            .scan_directory(directory)?
            .into_iter()
            .map(|path| PlaylistElement::new(path, track_duration))
            .collect();

        tracing::info!(
            "Loaded playlist of {} files from {}",
            elements.len(),
            directory.display()
        );

        Ok(Self::from_elements(elements))
    }

    pub fn from_elements(elements: Vec<PlaylistElement>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlaylistElement> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaylistElement> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[PlaylistElement] {
        &self.elements
    }

    /// Sum of all element durations
    pub fn total_duration(&self) -> Duration {
        self.elements.iter().map(PlaylistElement::duration).sum()
    }

    /// Generator over this playlist with its own random source
    pub fn order_generator(&self, kind: OrderKind) -> Result<OrderGenerator<'_, Self, OrderRng>> {
        self.order_generator_with_rng(kind, entropy_rng())
    }

    /// Generator over this playlist drawing from `rng`
    pub fn order_generator_with_rng<R: Rng>(
        &self,
        kind: OrderKind,
        rng: R,
    ) -> Result<OrderGenerator<'_, Self, R>> {
        Ok(OrderGenerator::with_rng(kind, self, rng)?)
    }

    /// One fixed random order over this playlist
    pub fn shuffled(&self) -> ShuffledView<'_, Self> {
        ShuffledView::from_entropy(self)
    }

    /// One fixed random order over this playlist, drawn from `rng`
    pub fn shuffled_with_rng<R: Rng>(&self, rng: R) -> ShuffledView<'_, Self> {
        ShuffledView::new(self, rng)
    }
}

impl IndexSpace for Playlist {
    type Item = PlaylistElement;

    fn count(&self) -> usize {
        self.elements.len()
    }

    fn item_at(&self, position: usize) -> Option<&PlaylistElement> {
        self.elements.get(position)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a PlaylistElement;
    type IntoIter = std::slice::Iter<'a, PlaylistElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
