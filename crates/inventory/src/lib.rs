//! Inventory domain: stocked items and the warehouses holding them.
//!
//! Pure domain logic; records come in already parsed, nothing here touches IO.

pub mod assembler;
pub mod item;
pub mod warehouse;

pub use assembler::{GroupByWarehouse, StockAssembler, StockedItem, StockedItemBuilder};
pub use item::{Item, name_key};
pub use warehouse::Warehouse;
