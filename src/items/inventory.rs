use crate::core::constants::INVENTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Bounded bag of item ids (capacity 20). Operations that would overflow
/// fail without touching the contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= INVENTORY_CAPACITY
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }

    /// Adds an item, failing when the bag is full.
    pub fn add(&mut self, item_id: &str) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item_id.to_string());
        true
    }

    /// Removes the first occurrence of an item, failing when absent.
    pub fn remove(&mut self, item_id: &str) -> bool {
        match self.items.iter().position(|id| id == item_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
