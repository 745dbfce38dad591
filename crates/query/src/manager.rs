//! Session-wide owner of the loaded dataset.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use stockroom_core::{LoadResult, LookupResult, PersonId, WarehouseId};
use stockroom_inventory::{Item, StockAssembler, Warehouse};
use stockroom_personnel::{Person, Personnel, PersonnelAssembler};

use crate::engine::{InventoryQuery, WarehouseCounts};

/// Holds all personnel and all warehouses for one session.
///
/// Built once from records; afterwards only a person's authentication flag
/// ever changes.
#[derive(Debug, Clone, Default)]
pub struct Manager {
    personnel: Personnel,
    warehouses: Vec<Warehouse>,
}

impl Manager {
    pub fn new(personnel: Personnel, warehouses: Vec<Warehouse>) -> Self {
        Self {
            personnel,
            warehouses,
        }
    }

    /// Assemble both datasets, aborting on the first malformed record.
    pub fn from_records<P, S>(personnel_records: P, stock_records: S) -> LoadResult<Self>
    where
        P: IntoIterator,
        P::Item: core::borrow::Borrow<Value>,
        S: IntoIterator,
        S::Item: core::borrow::Borrow<Value>,
    {
        let personnel = PersonnelAssembler::new().assemble(personnel_records)?;
        let warehouses = StockAssembler::new().assemble(stock_records)?;
        tracing::info!(
            people = personnel.len(),
            warehouses = warehouses.len(),
            "dataset loaded"
        );
        Ok(Self::new(personnel, warehouses))
    }

    pub fn personnel(&self) -> &Personnel {
        &self.personnel
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn query(&self) -> InventoryQuery<'_> {
        InventoryQuery::new(&self.warehouses)
    }

    pub fn find_person(&self, name: &str) -> Option<&Person> {
        self.personnel.find_by_name(name)
    }

    pub fn find_person_id(&self, name: &str) -> Option<PersonId> {
        self.personnel.find_id(name)
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.personnel.get(id)
    }

    /// Let the person with `id` try `credential`; unknown ids never authenticate.
    pub fn authenticate(&mut self, id: PersonId, credential: &str) -> bool {
        self.personnel
            .get_mut(id)
            .is_some_and(|person| person.authenticate(credential))
    }

    pub fn total_occupancy(&self) -> usize {
        self.query().total_occupancy()
    }

    pub fn count_in_warehouse(&self, id: WarehouseId, name: &str) -> LookupResult<usize> {
        self.query().count_in_warehouse(id, name)
    }

    pub fn count_total(&self, name: &str) -> usize {
        self.query().count_total(name)
    }

    pub fn unique_item_names(&self) -> BTreeSet<String> {
        self.query().unique_item_names()
    }

    pub fn counts_per_warehouse<I, S>(&self, names: I) -> BTreeMap<String, WarehouseCounts>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.query().counts_per_warehouse(names)
    }

    pub fn unique_categories(&self) -> BTreeSet<String> {
        self.query().unique_categories()
    }

    pub fn counts_by_category<I, S>(&self, categories: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.query().counts_by_category(categories)
    }

    pub fn items_of_category(&self, category: &str) -> Vec<(String, WarehouseId)> {
        self.query().items_of_category(category)
    }

    pub fn search(&self, name: &str) -> Vec<(WarehouseId, &Item)> {
        self.query().search(name)
    }
}
