//! Pre-shuffled view over an index space
//!
//! The permutation is computed once, at construction, by draining a
//! [`Random`](crate::strategy::Random) strategy. Iterating the view any
//! number of times replays that same permutation; a new shuffle needs a new
//! view.

use crate::rng::{entropy_rng, OrderRng};
use crate::space::IndexSpace;
use crate::strategy::Random;
use rand::Rng;
use std::fmt;
use std::iter::FusedIterator;

/// Fixed random order over borrowed items
pub struct ShuffledView<'a, S: IndexSpace + ?Sized> {
    items: &'a S,
    order: Vec<usize>,
}

impl<'a, S: IndexSpace + ?Sized> ShuffledView<'a, S> {
    /// Shuffle `items` with an injected random source
    pub fn new<R: Rng>(items: &'a S, rng: R) -> Self {
        let order: Vec<usize> = Random::new(items.count(), rng).collect();
        tracing::debug!(len = order.len(), "Created shuffled view");
        Self { items, order }
    }

    /// Shuffle `items` with a fresh entropy-seeded source
    pub fn from_entropy(items: &'a S) -> Self {
        Self::new::<OrderRng>(items, entropy_rng())
    }

    /// The permutation: `order()[i]` is the item position played `i`th
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Item played at shuffled position `position`
    pub fn get(&self, position: usize) -> Option<&'a S::Item> {
        let items: &'a S = self.items;
        self.order
            .get(position)
            .and_then(|&index| items.item_at(index))
    }

    /// Iterate the items in shuffled order
    pub fn iter(&self) -> ShuffledIter<'_, 'a, S> {
        ShuffledIter {
            view: self,
            front: 0,
            back: self.order.len(),
        }
    }

    /// Cursor at the first shuffled position
    pub fn cursor(&self) -> ShuffledCursor<'_, 'a, S> {
        self.cursor_at(0)
    }

    /// Cursor at `position`; one past the end is the end cursor
    pub fn cursor_at(&self, position: usize) -> ShuffledCursor<'_, 'a, S> {
        ShuffledCursor {
            view: self,
            position,
        }
    }

    /// Cursor one past the last shuffled position
    pub fn end(&self) -> ShuffledCursor<'_, 'a, S> {
        self.cursor_at(self.order.len())
    }
}

impl<S: IndexSpace + ?Sized> fmt::Debug for ShuffledView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShuffledView")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

impl<'v, 'a, S: IndexSpace + ?Sized> IntoIterator for &'v ShuffledView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = ShuffledIter<'v, 'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ShuffledView`]
pub struct ShuffledIter<'v, 'a, S: IndexSpace + ?Sized> {
    view: &'v ShuffledView<'a, S>,
    front: usize,
    back: usize,
}

impl<'a, S: IndexSpace + ?Sized> Iterator for ShuffledIter<'_, 'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.view.get(self.front);
        if item.is_none() {
            self.front = self.back;
            return None;
        }
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: IndexSpace + ?Sized> DoubleEndedIterator for ShuffledIter<'_, '_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let item = self.view.get(self.back);
        if item.is_none() {
            self.back = self.front;
        }
        item
    }
}

impl<S: IndexSpace + ?Sized> ExactSizeIterator for ShuffledIter<'_, '_, S> {}

impl<S: IndexSpace + ?Sized> FusedIterator for ShuffledIter<'_, '_, S> {}

/// Bidirectional position in a [`ShuffledView`]
///
/// Moving is unchecked; reading is not. [`current`](Self::current) returns
/// `None` anywhere outside `[0, len)`. Two cursors are equal when they sit
/// at the same position of the same view.
pub struct ShuffledCursor<'v, 'a, S: IndexSpace + ?Sized> {
    view: &'v ShuffledView<'a, S>,
    position: usize,
}

impl<'a, S: IndexSpace + ?Sized> ShuffledCursor<'_, 'a, S> {
    pub fn position(&self) -> usize {
        self.position
    }

    /// Item under the cursor
    pub fn current(&self) -> Option<&'a S::Item> {
        self.view.get(self.position)
    }

    /// Whether the cursor is before the end
    pub fn has_next(&self) -> bool {
        self.position < self.view.len()
    }

    /// Step forward
    pub fn advance(&mut self) -> &mut Self {
        self.position = self.position.saturating_add(1);
        self
    }

    /// Step back; stays at 0 at the front
    pub fn retreat(&mut self) -> &mut Self {
        self.position = self.position.saturating_sub(1);
        self
    }
}

impl<S: IndexSpace + ?Sized> Clone for ShuffledCursor<'_, '_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: IndexSpace + ?Sized> Copy for ShuffledCursor<'_, '_, S> {}

impl<S: IndexSpace + ?Sized> PartialEq for ShuffledCursor<'_, '_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && std::ptr::eq(self.view, other.view)
            && std::ptr::eq(self.view.order.as_ptr(), other.view.order.as_ptr())
    }
}

impl<S: IndexSpace + ?Sized> Eq for ShuffledCursor<'_, '_, S> {}

impl<S: IndexSpace + ?Sized> fmt::Debug for ShuffledCursor<'_, '_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShuffledCursor")
            .field("position", &self.position)
            .field("len", &self.view.len())
            .finish()
    }
}
