//! Weighted random choice over a cumulative-weight table
//!
//! Equivalent to sampling uniformly from a list in which each item appears
//! `weight` times, without materialising that list.

use rand::Rng;

#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    items: Vec<T>,
    /// Running totals; `cumulative[i]` is the sum of weights `0..=i`
    cumulative: Vec<u32>,
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cumulative: Vec::new(),
        }
    }

    /// Add an item; zero-weight items can never be picked
    pub fn push(&mut self, item: T, weight: u32) {
        let total = self.total_weight().saturating_add(weight);
        self.items.push(item);
        self.cumulative.push(total);
    }

    pub fn total_weight(&self) -> u32 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item whose weight band contains `roll` (in `0..total_weight`)
    pub fn item_at(&self, roll: u32) -> Option<&T> {
        let idx = self.cumulative.partition_point(|&c| c <= roll);
        self.items.get(idx)
    }

    /// One uniform draw; `None` when the table has no weight
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        self.item_at(rng.gen_range(0..total))
    }
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
