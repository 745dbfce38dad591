//! `stockroom-query`: inventory queries and the session [`Manager`].

pub mod engine;
pub mod manager;
pub mod order;

#[cfg(test)]
mod fixtures;

pub use engine::{InventoryQuery, WarehouseCounts};
pub use manager::Manager;
pub use order::{OrderPlan, plan_order};
