//! `stockroom-loader`: turns flat key/value records into domain objects.
//!
//! A [`Loader`] is configured with a per-field [`FieldStrategy`] table and a
//! [`TargetBuilder`]. Each record's fields are transformed according to the table
//! (identity by default), handed to the builder as [`Fields`], and the resulting
//! targets are fed to a [`PostProcess`] step that shapes the final output.

pub mod fields;
pub mod loader;
pub mod strategy;

pub use fields::{FieldValue, Fields};
pub use loader::{Collect, Loader, PostProcess, Record, TargetBuilder};
pub use strategy::{FieldContext, FieldStrategy, parse_timestamp};
