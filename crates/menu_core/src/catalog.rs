//! Append-only, insertion-ordered store of committed items.

use shared::domain::MenuItem;
use tracing::info;

#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    items: Vec<MenuItem>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` at the end. Items are trusted to be valid already; no
    /// deduplication happens here.
    pub fn append(&mut self, item: MenuItem) {
        info!(
            item_id = %item.id(),
            course = %item.course(),
            price = item.price(),
            position = self.items.len(),
            "menu item added"
        );
        self.items.push(item);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order. Can be called any number of times.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &MenuItem> + '_ {
        self.items.iter()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn summary_label(&self) -> String {
        format!("Total Menu Items: {}", self.count())
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
