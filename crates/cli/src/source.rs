//! Reading record files from disk.

use std::path::Path;

use anyhow::{Context, bail};
use serde_json::Value;

use stockroom_core::json_kind;
use stockroom_query::Manager;

use crate::config::CliArgs;

/// Parse a JSON document holding an array of records.
pub fn parse_records(raw: &str) -> anyhow::Result<Vec<Value>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => Ok(records),
        other => bail!("expected a JSON array of records, found {}", json_kind(&other)),
    }
}

pub fn read_records(path: &Path) -> anyhow::Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Read both record files and assemble the session dataset.
pub fn load_manager(args: &CliArgs) -> anyhow::Result<Manager> {
    let personnel = read_records(&args.personnel)?;
    let stock = read_records(&args.stock)?;

    Manager::from_records(&personnel, &stock).with_context(|| {
        format!(
            "failed to load dataset from {} and {}",
            args.personnel.display(),
            args.stock.display()
        )
    })
}
