//! Random source plumbing shared by the random strategies
//!
//! Every random strategy owns its source. There is no process-wide
//! generator: pass [`seeded_rng`] for reproducible orders, or let the
//! convenience constructors call [`entropy_rng`] per instance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source used when the caller does not inject one
pub type OrderRng = StdRng;

/// Fresh source seeded from the operating system
pub fn entropy_rng() -> OrderRng {
    StdRng::from_entropy()
}

/// Deterministic source: equal seeds give equal orders
pub fn seeded_rng(seed: u64) -> OrderRng {
    StdRng::seed_from_u64(seed)
}

/// Shrinking pool of not-yet-drawn indices
///
/// Draws are uniform without replacement: pick a position in the remaining
/// pool, swap it with the last element and pop. O(1) per draw.
#[derive(Debug, Clone)]
pub(crate) struct DrawPool {
    indices: Vec<usize>,
    len: usize,
}

impl DrawPool {
    /// Pool holding the identity permutation `[0, len)`
    pub(crate) fn new(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
            len,
        }
    }

    /// Put every index back
    pub(crate) fn refill(&mut self) {
        self.indices.clear();
        self.indices.extend(0..self.len);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.indices.len()
    }

    /// Draw one index, or `None` once the pool is drained
    ///
    /// The last remaining index is returned without consulting `rng`.
    pub(crate) fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        match self.indices.len() {
            0 => None,
            1 => self.indices.pop(),
            remaining => {
                let position = rng.gen_range(0..remaining);
                let index = self.indices.swap_remove(position);
                tracing::trace!(position, index, remaining, "Drew from pool");
                Some(index)
            }
        }
    }
}
