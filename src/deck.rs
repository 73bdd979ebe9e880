use crate::error::{CarouselError, Result};

/// The caller-supplied items and the position of the visible one.
///
/// The index is kept reduced modulo the item count, so `current()` and
/// `next()` can never go out of bounds.
#[derive(Debug, Clone)]
pub struct Deck<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Deck<T> {
    pub fn new(items: Vec<T>, initial_index: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(CarouselError::EmptyItems);
        }
        let index = initial_index % items.len();
        Ok(Self { items, index })
    }

    /// Item at an arbitrary (possibly large) position.
    pub fn item_at(&self, i: usize) -> &T {
        &self.items[i % self.items.len()]
    }

    pub fn current(&self) -> &T {
        self.item_at(self.index)
    }

    /// The card pre-rendered underneath the current one.
    pub fn next(&self) -> &T {
        self.item_at(self.index + 1)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.items.len();
        self.index
    }

    /// Swap in a whole new list. The index is folded into the new length.
    pub fn replace(&mut self, items: Vec<T>) -> Result<()> {
        if items.is_empty() {
            return Err(CarouselError::EmptyItems);
        }
        self.index %= items.len();
        self.items = items;
        Ok(())
    }
}
