//! `stockroom-core`: shared domain building blocks.
//!
//! Identifiers and the error taxonomy used by every other crate. No IO lives
//! here.

pub mod error;
pub mod id;

pub use error::{LoadError, LoadResult, LookupError, LookupResult, json_kind};
pub use id::{PersonId, WarehouseId};
