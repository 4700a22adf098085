//! Order generator: a strategy bound to an index space

use crate::error::{OrderError, Result};
use crate::rng::{entropy_rng, OrderRng};
use crate::space::IndexSpace;
use crate::strategy::OrderStrategy;
use crate::types::OrderKind;
use rand::Rng;

/// Hands out the items of an index space in strategy order
///
/// Holds a shared borrow of the space, so the items cannot change while the
/// generator is alive. The strategy is sized to `space.count()` once, at
/// construction.
#[derive(Debug)]
pub struct OrderGenerator<'a, S: IndexSpace + ?Sized, R = OrderRng> {
    space: &'a S,
    strategy: OrderStrategy<R>,
    len: usize,
}

impl<'a, S: IndexSpace + ?Sized> OrderGenerator<'a, S, OrderRng> {
    /// Generator with its own entropy-seeded random source
    pub fn new(kind: OrderKind, space: &'a S) -> Result<Self> {
        Self::with_rng(kind, space, entropy_rng())
    }
}

impl<'a, S: IndexSpace + ?Sized, R: Rng> OrderGenerator<'a, S, R> {
    /// Generator drawing from an injected random source
    pub fn with_rng(kind: OrderKind, space: &'a S, rng: R) -> Result<Self> {
        let len = space.count();
        let strategy = OrderStrategy::new(kind, len, rng)?;
        Ok(Self {
            space,
            strategy,
            len,
        })
    }

    pub fn kind(&self) -> OrderKind {
        self.strategy.kind()
    }

    /// Size of the index space at construction
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_next(&self) -> bool {
        self.strategy.has_next()
    }

    /// Next item in strategy order
    pub fn generate_next(&mut self) -> Result<&'a S::Item> {
        let index = self.strategy.generate_next()?;
        let space: &'a S = self.space;
        space
            .item_at(index)
            .ok_or(OrderError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }
}

impl<'a, S: IndexSpace + ?Sized, R: Rng> Iterator for OrderGenerator<'a, S, R> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }

        match self.generate_next() {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(kind = %self.kind(), error = %e, "Order generator stopped early");
                None
            }
        }
    }
}
