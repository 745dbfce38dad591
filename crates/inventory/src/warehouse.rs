use stockroom_core::WarehouseId;

use crate::item::Item;

/// An identified container of items, in arrival-record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    id: WarehouseId,
    items: Vec<Item>,
}

impl Warehouse {
    pub fn new(id: WarehouseId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    pub fn with_items(id: WarehouseId, items: Vec<Item>) -> Self {
        Self { id, items }
    }

    pub fn id(&self) -> WarehouseId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn occupancy(&self) -> usize {
        self.items.len()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Items whose full name matches `name`, ignoring case.
    pub fn search<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.matches_name(name))
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.search(name).count()
    }

    pub fn items_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.is_in_category(category))
    }
}

impl core::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Warehouse ID: {} ({} items in stock)", self.id, self.items.len())
    }
}
