//! Soul Player - Playback Order
//!
//! Order generation for playlists, independent of how the playlist was built.
//!
//! This crate provides:
//! - Five order strategies (ordered, ordered cycle, random, random cycle,
//!   random cycle with regeneration)
//! - An order generator that binds a strategy to a borrowed index space
//! - A pre-shuffled view computed once and replayed on every iteration
//!
//! Random strategies own their random source. Inject a seeded one for
//! reproducible orders.
//!
//! # Example: Generator
//!
//! ```rust
//! use soul_order::{seeded_rng, OrderGenerator, OrderKind};
//!
//! let tracks = vec!["intro.mp3", "verse.mp3", "outro.mp3"];
//! let mut generator = OrderGenerator::with_rng(OrderKind::Random, &tracks, seeded_rng(7)).unwrap();
//!
//! let mut played = Vec::new();
//! while generator.has_next() {
//!     played.push(*generator.generate_next().unwrap());
//! }
//! assert_eq!(played.len(), 3);
//! ```
//!
//! # Example: Cycling
//!
//! ```rust
//! use soul_order::{OrderGenerator, OrderKind};
//!
//! let tracks = vec![1, 2];
//! let generator = OrderGenerator::new(OrderKind::OrderedCycle, &tracks).unwrap();
//!
//! // Cycling generators never end: the caller decides when to stop
//! let played: Vec<i32> = generator.take(5).copied().collect();
//! assert_eq!(played, vec![1, 2, 1, 2, 1]);
//! ```
//!
//! # Example: Shuffled View
//!
//! ```rust
//! use soul_order::ShuffledView;
//!
//! let tracks = vec!["a", "b", "c"];
//! let view = ShuffledView::from_entropy(&tracks);
//!
//! let first: Vec<_> = view.iter().collect();
//! let second: Vec<_> = view.iter().collect();
//! assert_eq!(first, second);
//! ```

mod error;
mod generator;
mod rng;
mod shuffled;
mod space;
pub mod strategy;
pub mod types;

// Public exports
pub use error::{OrderError, Result};
pub use generator::OrderGenerator;
pub use rng::{entropy_rng, seeded_rng, OrderRng};
pub use shuffled::{ShuffledCursor, ShuffledIter, ShuffledView};
pub use space::IndexSpace;
pub use strategy::OrderStrategy;
pub use types::OrderKind;
