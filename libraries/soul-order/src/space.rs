//! Index spaces: anything that can hand out items by position
//!
//! Generators and shuffled views hold a shared borrow of their index space
//! for their whole lifetime, so the collection cannot be reordered or
//! resized underneath them.

/// A fixed-size collection addressed by position
pub trait IndexSpace {
    /// Item handed out for a position
    type Item;

    /// Number of playable items
    fn count(&self) -> usize;

    /// Item at `position`, or `None` outside `[0, count)`
    fn item_at(&self, position: usize) -> Option<&Self::Item>;
}

impl<T> IndexSpace for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

impl<T> IndexSpace for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_and_vec_agree() {
        let items = vec!["a", "b", "c"];
        assert_eq!(items.count(), 3);
        assert_eq!(items.as_slice().count(), 3);
        assert_eq!(items.item_at(1), Some(&"b"));
        assert_eq!(items.as_slice().item_at(3), None);
    }
}
