//! Order strategies
//!
//! Five state machines over the index space `[0, len)`:
//! - [`Ordered`]: `0, 1, .., len - 1`, then exhausted
//! - [`OrderedCycle`]: `0, 1, .., len - 1, 0, 1, ..` forever
//! - [`Random`]: a uniform random permutation, then exhausted
//! - [`RandomCycle`]: one random permutation, replayed forever
//! - [`RandomCycleRegenerate`]: a fresh random permutation every pass
//!
//! Cycling strategies report `has_next() == true` forever. Whoever drives
//! them owns the stopping condition.

use crate::error::{OrderError, Result};
use crate::rng::{entropy_rng, DrawPool, OrderRng};
use crate::types::OrderKind;
use rand::Rng;

/// Playlist order, once
#[derive(Debug, Clone)]
pub struct Ordered {
    current: usize,
    len: usize,
}

impl Ordered {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn has_next(&self) -> bool {
        self.current < self.len
    }

    pub fn generate_next(&mut self) -> Result<usize> {
        if !self.has_next() {
            return Err(OrderError::ExhaustedSequence {
                kind: OrderKind::Ordered,
            });
        }

        let index = self.current;
        self.current += 1;
        Ok(index)
    }
}

impl Iterator for Ordered {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.generate_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ordered {}

/// Playlist order, wrapping around after the last item
#[derive(Debug, Clone)]
pub struct OrderedCycle {
    current: usize,
    len: usize,
}

impl OrderedCycle {
    /// Fails with [`OrderError::EmptyDomain`] when `len == 0`
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(OrderError::EmptyDomain {
                kind: OrderKind::OrderedCycle,
            });
        }

        Ok(Self { current: 0, len })
    }

    pub fn has_next(&self) -> bool {
        true
    }

    pub fn generate_next(&mut self) -> Result<usize> {
        let index = self.current;
        self.current = (self.current + 1) % self.len;
        Ok(index)
    }
}

impl Iterator for OrderedCycle {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.generate_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Uniform random permutation, drawn lazily without replacement
#[derive(Debug, Clone)]
pub struct Random<R = OrderRng> {
    pool: DrawPool,
    rng: R,
}

impl Random<OrderRng> {
    /// Random order with its own entropy-seeded source
    pub fn from_entropy(len: usize) -> Self {
        Self::new(len, entropy_rng())
    }
}

impl<R: Rng> Random<R> {
    pub fn new(len: usize, rng: R) -> Self {
        Self {
            pool: DrawPool::new(len),
            rng,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.pool.is_empty()
    }

    /// Number of indices not yet drawn
    pub fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    pub fn generate_next(&mut self) -> Result<usize> {
        self.pool
            .draw(&mut self.rng)
            .ok_or(OrderError::ExhaustedSequence {
                kind: OrderKind::Random,
            })
    }
}

impl<R: Rng> Iterator for Random<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pool.draw(&mut self.rng)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pool.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Random<R> {}

/// First random permutation, replayed forever
///
/// Draws like [`Random`] while recording each drawn index. Once the pool is
/// drained the recorded permutation is replayed from its start.
#[derive(Debug, Clone)]
pub struct RandomCycle<R = OrderRng> {
    pool: DrawPool,
    generated: Vec<usize>,
    cursor: usize,
    rng: R,
}

impl<R: Rng> RandomCycle<R> {
    /// Fails with [`OrderError::EmptyDomain`] when `len == 0`
    pub fn new(len: usize, rng: R) -> Result<Self> {
        if len == 0 {
            return Err(OrderError::EmptyDomain {
                kind: OrderKind::RandomCycle,
            });
        }

        Ok(Self {
            pool: DrawPool::new(len),
            generated: Vec::with_capacity(len),
            cursor: 0,
            rng,
        })
    }

    pub fn has_next(&self) -> bool {
        true
    }

    /// Indices emitted during the first pass so far
    pub fn generated(&self) -> &[usize] {
        &self.generated
    }

    pub fn generate_next(&mut self) -> Result<usize> {
        if let Some(index) = self.pool.draw(&mut self.rng) {
            self.generated.push(index);
            return Ok(index);
        }

        let index = *self
            .generated
            .get(self.cursor)
            .ok_or(OrderError::EmptyDomain {
                kind: OrderKind::RandomCycle,
            })?;
        self.cursor = (self.cursor + 1) % self.generated.len();
        Ok(index)
    }
}

impl<R: Rng> Iterator for RandomCycle<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.generate_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// New random permutation on every pass
///
/// Draws like [`Random`]; the moment the last index of a pass is drawn the
/// pool is refilled, so the next call starts a fresh shuffle.
#[derive(Debug, Clone)]
pub struct RandomCycleRegenerate<R = OrderRng> {
    pool: DrawPool,
    rng: R,
}

impl<R: Rng> RandomCycleRegenerate<R> {
    /// Fails with [`OrderError::EmptyDomain`] when `len == 0`
    pub fn new(len: usize, rng: R) -> Result<Self> {
        if len == 0 {
            return Err(OrderError::EmptyDomain {
                kind: OrderKind::RandomCycleRegenerate,
            });
        }

        Ok(Self {
            pool: DrawPool::new(len),
            rng,
        })
    }

    pub fn has_next(&self) -> bool {
        true
    }

    pub fn generate_next(&mut self) -> Result<usize> {
        let index = self
            .pool
            .draw(&mut self.rng)
            .ok_or(OrderError::EmptyDomain {
                kind: OrderKind::RandomCycleRegenerate,
            })?;

        if self.pool.is_empty() {
            tracing::trace!("Pass complete, regenerating pool");
            self.pool.refill();
        }

        Ok(index)
    }
}

impl<R: Rng> Iterator for RandomCycleRegenerate<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.generate_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// One of the five order strategies
///
/// Closed set, dispatched by `match`. Finite strategies (`Ordered`,
/// `Random`) stop after `len` items; the others never do.
#[derive(Debug, Clone)]
pub enum OrderStrategy<R = OrderRng> {
    Ordered(Ordered),
    OrderedCycle(OrderedCycle),
    Random(Random<R>),
    RandomCycle(RandomCycle<R>),
    RandomCycleRegenerate(RandomCycleRegenerate<R>),
}

impl OrderStrategy<OrderRng> {
    /// Strategy with its own entropy-seeded random source
    pub fn from_entropy(kind: OrderKind, len: usize) -> Result<Self> {
        Self::new(kind, len, entropy_rng())
    }
}

impl<R: Rng> OrderStrategy<R> {
    /// Build the strategy for `kind` over `[0, len)`
    ///
    /// `rng` is dropped by the ordered strategies. Cycling strategies fail
    /// with [`OrderError::EmptyDomain`] when `len == 0`.
    pub fn new(kind: OrderKind, len: usize, rng: R) -> Result<Self> {
        tracing::debug!(%kind, len, "Creating order strategy");

        Ok(match kind {
            OrderKind::Ordered => OrderStrategy::Ordered(Ordered::new(len)),
            OrderKind::OrderedCycle => OrderStrategy::OrderedCycle(OrderedCycle::new(len)?),
            OrderKind::Random => OrderStrategy::Random(Random::new(len, rng)),
            OrderKind::RandomCycle => OrderStrategy::RandomCycle(RandomCycle::new(len, rng)?),
            OrderKind::RandomCycleRegenerate => {
                OrderStrategy::RandomCycleRegenerate(RandomCycleRegenerate::new(len, rng)?)
            }
        })
    }

    pub fn kind(&self) -> OrderKind {
        match self {
            OrderStrategy::Ordered(_) => OrderKind::Ordered,
            OrderStrategy::OrderedCycle(_) => OrderKind::OrderedCycle,
            OrderStrategy::Random(_) => OrderKind::Random,
            OrderStrategy::RandomCycle(_) => OrderKind::RandomCycle,
            OrderStrategy::RandomCycleRegenerate(_) => OrderKind::RandomCycleRegenerate,
        }
    }

    /// Whether another call to [`generate_next`](Self::generate_next) yields an index
    pub fn has_next(&self) -> bool {
        match self {
            OrderStrategy::Ordered(s) => s.has_next(),
            OrderStrategy::OrderedCycle(s) => s.has_next(),
            OrderStrategy::Random(s) => s.has_next(),
            OrderStrategy::RandomCycle(s) => s.has_next(),
            OrderStrategy::RandomCycleRegenerate(s) => s.has_next(),
        }
    }

    /// Next index, or [`OrderError::ExhaustedSequence`] past the end of a
    /// finite strategy
    pub fn generate_next(&mut self) -> Result<usize> {
        match self {
            OrderStrategy::Ordered(s) => s.generate_next(),
            OrderStrategy::OrderedCycle(s) => s.generate_next(),
            OrderStrategy::Random(s) => s.generate_next(),
            OrderStrategy::RandomCycle(s) => s.generate_next(),
            OrderStrategy::RandomCycleRegenerate(s) => s.generate_next(),
        }
    }
}

impl<R: Rng> Iterator for OrderStrategy<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.has_next() {
            return None;
        }

        match self.generate_next() {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!(kind = %self.kind(), error = %e, "Order strategy stopped early");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    /// Source whose every draw lands on position 0 of the pool
    fn first_position() -> StepRng {
        StepRng::new(0, 0)
    }

    fn take(strategy: &mut OrderStrategy, count: usize) -> Vec<usize> {
        (0..count).map(|_| strategy.generate_next().unwrap()).collect()
    }

    fn is_permutation(block: &[usize], len: usize) -> bool {
        let set: HashSet<usize> = block.iter().copied().collect();
        block.len() == len && set.len() == len && set.iter().all(|&i| i < len)
    }

    // ===== Ordered =====

    #[test]
    fn ordered_emits_each_index_once() {
        let mut strategy = OrderStrategy::new(OrderKind::Ordered, 4, seeded_rng(0)).unwrap();
        assert_eq!(take(&mut strategy, 4), vec![0, 1, 2, 3]);
        assert!(!strategy.has_next());
    }

    #[test]
    fn ordered_errors_after_exhaustion() {
        let mut strategy = Ordered::new(1);
        assert_eq!(strategy.generate_next(), Ok(0));
        assert_eq!(
            strategy.generate_next(),
            Err(OrderError::ExhaustedSequence {
                kind: OrderKind::Ordered
            })
        );
    }

    #[test]
    fn ordered_empty_has_nothing() {
        let strategy = Ordered::new(0);
        assert!(!strategy.has_next());
    }

    // ===== OrderedCycle =====

    #[test]
    fn ordered_cycle_wraps() {
        let mut strategy =
            OrderStrategy::new(OrderKind::OrderedCycle, 3, seeded_rng(0)).unwrap();
        assert_eq!(take(&mut strategy, 7), vec![0, 1, 2, 0, 1, 2, 0]);
        assert!(strategy.has_next());
    }

    #[test]
    fn ordered_cycle_rejects_empty() {
        assert_eq!(
            OrderedCycle::new(0).unwrap_err(),
            OrderError::EmptyDomain {
                kind: OrderKind::OrderedCycle
            }
        );
    }

    // ===== Random =====

    #[test]
    fn random_emits_permutation_then_stops() {
        let mut strategy = OrderStrategy::new(OrderKind::Random, 10, seeded_rng(3)).unwrap();
        let block = take(&mut strategy, 10);
        assert!(is_permutation(&block, 10));
        assert!(!strategy.has_next());
        assert_eq!(
            strategy.generate_next(),
            Err(OrderError::ExhaustedSequence {
                kind: OrderKind::Random
            })
        );
    }

    #[test]
    fn random_single_item() {
        let mut strategy = Random::new(1, seeded_rng(0));
        assert_eq!(strategy.generate_next(), Ok(0));
        assert!(!strategy.has_next());
    }

    #[test]
    fn random_empty_has_nothing() {
        let strategy = Random::new(0, seeded_rng(0));
        assert!(!strategy.has_next());
        assert_eq!(strategy.count(), 0);
    }

    #[test]
    fn random_iterator_reports_exact_size() {
        let mut strategy = Random::new(5, seeded_rng(9));
        assert_eq!(strategy.len(), 5);
        strategy.next();
        assert_eq!(strategy.len(), 4);
        assert_eq!(strategy.remaining(), 4);
    }

    #[test]
    fn random_from_entropy_is_permutation() {
        let block: Vec<usize> = Random::from_entropy(20).collect();
        assert!(is_permutation(&block, 20));
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let a: Vec<usize> = Random::new(50, seeded_rng(1234)).collect();
        let b: Vec<usize> = Random::new(50, seeded_rng(1234)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn random_swaps_drawn_position_with_last() {
        // Pool [0, 1, 2]: take 0 -> [2, 1]; take 2 -> [1]; 1 is left over
        let drawn: Vec<usize> = Random::new(3, first_position()).collect();
        assert_eq!(drawn, vec![0, 2, 1]);

        let drawn: Vec<usize> = Random::new(5, first_position()).collect();
        assert_eq!(drawn, vec![0, 4, 3, 2, 1]);
    }

    // ===== RandomCycle =====

    #[test]
    fn random_cycle_replays_first_permutation() {
        let mut strategy = OrderStrategy::new(OrderKind::RandomCycle, 6, seeded_rng(5)).unwrap();
        let first = take(&mut strategy, 6);
        assert!(is_permutation(&first, 6));

        for _ in 0..3 {
            assert_eq!(take(&mut strategy, 6), first);
        }
        assert!(strategy.has_next());
    }

    #[test]
    fn random_cycle_records_generated_order() {
        let mut strategy = RandomCycle::new(3, seeded_rng(8)).unwrap();
        let first = strategy.generate_next().unwrap();
        assert_eq!(strategy.generated(), &[first]);
    }

    #[test]
    fn random_cycle_replays_swap_order() {
        let strategy = RandomCycle::new(3, first_position()).unwrap();
        assert_eq!(
            strategy.take(9).collect::<Vec<_>>(),
            vec![0, 2, 1, 0, 2, 1, 0, 2, 1]
        );
    }

    #[test]
    fn random_cycle_rejects_empty() {
        assert!(matches!(
            RandomCycle::new(0, seeded_rng(0)),
            Err(OrderError::EmptyDomain { .. })
        ));
    }

    // ===== RandomCycleRegenerate =====

    #[test]
    fn regenerate_emits_permutation_per_block() {
        let mut strategy =
            OrderStrategy::new(OrderKind::RandomCycleRegenerate, 8, seeded_rng(11)).unwrap();

        for _ in 0..5 {
            let block = take(&mut strategy, 8);
            assert!(is_permutation(&block, 8), "block {:?}", block);
        }
    }

    #[test]
    fn regenerate_reshuffles_between_blocks() {
        let mut strategy = RandomCycleRegenerate::new(12, seeded_rng(21)).unwrap();
        let blocks: Vec<Vec<usize>> = (0..10)
            .map(|_| {
                (0..12)
                    .map(|_| strategy.generate_next().unwrap())
                    .collect()
            })
            .collect();

        // 10 blocks of 12! possibilities; all equal would mean no regeneration
        assert!(blocks.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn regenerate_refills_identity_pool_each_pass() {
        let strategy = RandomCycleRegenerate::new(3, first_position()).unwrap();
        assert_eq!(
            strategy.take(9).collect::<Vec<_>>(),
            vec![0, 2, 1, 0, 2, 1, 0, 2, 1]
        );
    }

    #[test]
    fn regenerate_single_item_repeats() {
        let mut strategy = RandomCycleRegenerate::new(1, seeded_rng(0)).unwrap();
        for _ in 0..4 {
            assert_eq!(strategy.generate_next(), Ok(0));
        }
    }

    #[test]
    fn regenerate_rejects_empty() {
        assert!(matches!(
            OrderStrategy::new(OrderKind::RandomCycleRegenerate, 0, seeded_rng(0)),
            Err(OrderError::EmptyDomain {
                kind: OrderKind::RandomCycleRegenerate
            })
        ));
    }

    // ===== Dispatch =====

    #[test]
    fn kind_round_trips_through_constructor() {
        for kind in OrderKind::ALL {
            let strategy = OrderStrategy::new(kind, 2, seeded_rng(0)).unwrap();
            assert_eq!(strategy.kind(), kind);
        }
    }

    #[test]
    fn iterator_stops_for_finite_strategies() {
        let strategy = OrderStrategy::new(OrderKind::Ordered, 3, seeded_rng(0)).unwrap();
        assert_eq!(strategy.collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn every_variant_iterates() {
        assert_eq!(Ordered::new(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(Ordered::new(4).len(), 4);
        assert_eq!(
            OrderedCycle::new(2).unwrap().take(5).collect::<Vec<_>>(),
            vec![0, 1, 0, 1, 0]
        );
        assert_eq!(RandomCycle::new(4, seeded_rng(1)).unwrap().take(12).count(), 12);
        assert_eq!(
            RandomCycleRegenerate::new(4, seeded_rng(1))
                .unwrap()
                .take(12)
                .count(),
            12
        );
    }

    #[test]
    fn iterator_continues_for_cycling_strategies() {
        let strategy = OrderStrategy::from_entropy(OrderKind::RandomCycle, 2).unwrap();
        assert_eq!(strategy.take(100).count(), 100);
    }
}
