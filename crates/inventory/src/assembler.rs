//! Loads flat stock records into warehouses.

use std::collections::BTreeMap;

use serde_json::Value;

use stockroom_core::{LoadResult, WarehouseId};
use stockroom_loader::{FieldStrategy, Fields, Loader, PostProcess, TargetBuilder};

use crate::item::Item;
use crate::warehouse::Warehouse;

pub const FIELD_STATE: &str = "state";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_WAREHOUSE: &str = "warehouse";
pub const FIELD_ARRIVED_AT: &str = "date_of_stock";

/// An item paired with the warehouse its record was tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockedItem {
    pub item: Item,
    pub warehouse: WarehouseId,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StockedItemBuilder;

impl TargetBuilder for StockedItemBuilder {
    type Target = StockedItem;

    fn build(&self, mut fields: Fields<StockedItem>) -> LoadResult<StockedItem> {
        let state = fields.take_str(FIELD_STATE)?;
        let category = fields.take_str(FIELD_CATEGORY)?;
        let warehouse = WarehouseId::new(fields.take_i64(FIELD_WAREHOUSE)?);
        let arrived_at = fields.take_timestamp(FIELD_ARRIVED_AT)?;
        fields.finish()?;

        Ok(StockedItem {
            item: Item::new(state, category, arrived_at),
            warehouse,
        })
    }
}

/// Groups stocked items into one warehouse per distinct id.
///
/// Warehouses come out in ascending id order; items keep input order within
/// their warehouse.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupByWarehouse;

impl PostProcess<StockedItem> for GroupByWarehouse {
    type Output = Vec<Warehouse>;

    fn process<I>(&self, stocked: I) -> Vec<Warehouse>
    where
        I: Iterator<Item = StockedItem>,
    {
        let mut grouped: BTreeMap<WarehouseId, Warehouse> = BTreeMap::new();
        for StockedItem { item, warehouse } in stocked {
            grouped
                .entry(warehouse)
                .or_insert_with(|| Warehouse::new(warehouse))
                .add_item(item);
        }
        grouped.into_values().collect()
    }
}

/// Loader configuration for stock records.
#[derive(Debug, Clone)]
pub struct StockAssembler {
    loader: Loader<StockedItemBuilder>,
}

impl Default for StockAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl StockAssembler {
    pub fn new() -> Self {
        Self {
            loader: Loader::new(StockedItemBuilder).with_strategy(FIELD_ARRIVED_AT, FieldStrategy::Timestamp),
        }
    }

    /// Load stock records into warehouses; any malformed record aborts the load.
    pub fn assemble<I>(&self, records: I) -> LoadResult<Vec<Warehouse>>
    where
        I: IntoIterator,
        I::Item: core::borrow::Borrow<Value>,
    {
        let warehouses = self.loader.load(records, &GroupByWarehouse)?;
        tracing::debug!(
            warehouses = warehouses.len(),
            items = warehouses.iter().map(Warehouse::occupancy).sum::<usize>(),
            "stock assembled"
        );
        Ok(warehouses)
    }
}
