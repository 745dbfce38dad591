//! Read-only queries over a warehouse snapshot.
//!
//! Item full names are matched case-insensitively; categories are matched
//! exactly. Nothing here mutates the snapshot, so every query is repeatable.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use stockroom_core::{LookupError, LookupResult, WarehouseId};
use stockroom_inventory::{Item, Warehouse, name_key};

/// Per-name, per-warehouse item counts. Every known warehouse id is present.
pub type WarehouseCounts = BTreeMap<WarehouseId, usize>;

/// Borrowed view answering inventory questions.
#[derive(Debug, Clone, Copy)]
pub struct InventoryQuery<'a> {
    warehouses: &'a [Warehouse],
}

impl<'a> InventoryQuery<'a> {
    pub fn new(warehouses: &'a [Warehouse]) -> Self {
        Self { warehouses }
    }

    pub fn warehouses(&self) -> &'a [Warehouse] {
        self.warehouses
    }

    pub fn warehouse(&self, id: WarehouseId) -> LookupResult<&'a Warehouse> {
        self.warehouses
            .iter()
            .find(|w| w.id() == id)
            .ok_or(LookupError::WarehouseNotFound(id))
    }

    pub fn warehouse_ids(&self) -> Vec<WarehouseId> {
        self.warehouses.iter().map(Warehouse::id).collect()
    }

    fn items(&self) -> impl Iterator<Item = (WarehouseId, &'a Item)> + 'a {
        self.warehouses
            .iter()
            .flat_map(|w| w.items().iter().map(move |item| (w.id(), item)))
    }

    /// Number of items across all warehouses.
    pub fn total_occupancy(&self) -> usize {
        self.warehouses.iter().map(Warehouse::occupancy).sum()
    }

    pub fn occupancy_of(&self, id: WarehouseId) -> LookupResult<usize> {
        self.warehouse(id).map(Warehouse::occupancy)
    }

    /// Items in one warehouse matching `name`.
    ///
    /// An unknown warehouse is an error, not zero.
    pub fn count_in_warehouse(&self, id: WarehouseId, name: &str) -> LookupResult<usize> {
        self.warehouse(id).map(|w| w.count_named(name))
    }

    pub fn count_total(&self, name: &str) -> usize {
        self.warehouses.iter().map(|w| w.count_named(name)).sum()
    }

    /// Distinct full names, in their stored casing.
    pub fn unique_item_names(&self) -> BTreeSet<String> {
        self.items().map(|(_, item)| item.full_name()).collect()
    }

    /// For each requested name, its count in every known warehouse (zeros included).
    pub fn counts_per_warehouse<I, S>(&self, names: I) -> BTreeMap<String, WarehouseCounts>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // One pass over the snapshot; lookups below are by case-folded name.
        let mut by_key: HashMap<String, WarehouseCounts> = HashMap::new();
        for (warehouse, item) in self.items() {
            *by_key
                .entry(name_key(&item.full_name()))
                .or_default()
                .entry(warehouse)
                .or_default() += 1;
        }

        let zeroes: WarehouseCounts = self.warehouses.iter().map(|w| (w.id(), 0)).collect();

        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                let mut counts = zeroes.clone();
                if let Some(found) = by_key.get(&name_key(name)) {
                    counts.extend(found.iter().map(|(id, n)| (*id, *n)));
                }
                (name.to_string(), counts)
            })
            .collect()
    }

    pub fn unique_categories(&self) -> BTreeSet<String> {
        self.items()
            .map(|(_, item)| item.category().to_string())
            .collect()
    }

    /// `(category, count)` for every requested category, in request order.
    ///
    /// Categories with no items are reported with a zero count.
    pub fn counts_by_category<I, S>(&self, categories: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally: HashMap<&str, usize> = HashMap::new();
        for (_, item) in self.items() {
            *tally.entry(item.category()).or_default() += 1;
        }

        categories
            .into_iter()
            .map(|category| {
                let category = category.as_ref();
                let count = tally.get(category).copied().unwrap_or(0);
                (category.to_string(), count)
            })
            .collect()
    }

    /// Every category with its count, numbered from 1 in sorted category order.
    pub fn numbered_categories(&self) -> Vec<(usize, String, usize)> {
        self.counts_by_category(self.unique_categories())
            .into_iter()
            .enumerate()
            .map(|(index, (category, count))| (index + 1, category, count))
            .collect()
    }

    /// `(full name, warehouse id)` for each item of `category`, warehouse by warehouse.
    pub fn items_of_category(&self, category: &str) -> Vec<(String, WarehouseId)> {
        self.items()
            .filter(|(_, item)| item.is_in_category(category))
            .map(|(warehouse, item)| (item.full_name(), warehouse))
            .collect()
    }

    /// Every stocked unit matching `name`, with the warehouse holding it.
    pub fn search(&self, name: &str) -> Vec<(WarehouseId, &'a Item)> {
        let key = name_key(name);
        self.items()
            .filter(|(_, item)| name_key(&item.full_name()) == key)
            .collect()
    }

    /// Stored casing of the first item whose full name matches `name`.
    pub fn canonical_name(&self, name: &str) -> Option<String> {
        self.items()
            .map(|(_, item)| item.full_name())
            .find(|full| name_key(full) == name_key(name))
    }
}
