//! Per-field value transformations.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use stockroom_core::{LoadError, LoadResult};

use crate::fields::FieldValue;

/// How a single raw field value is turned into the value handed to the builder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FieldStrategy {
    /// Pass the raw JSON value through untouched.
    #[default]
    Identity,
    /// Parse an ISO-8601 string into a naive date-time.
    Timestamp,
    /// Load every element of an array as a nested record of the same target type.
    Nested,
}

/// The field a strategy is transforming.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub field: &'a str,
    pub value: &'a Value,
}

impl FieldStrategy {
    /// Transform one field.
    ///
    /// `load_record` is the loader's own single-record entry point (field
    /// transformation plus the target builder), used by
    /// [`FieldStrategy::Nested`] to build sub-records recursively.
    pub fn transform<T>(
        self,
        ctx: FieldContext<'_>,
        load_record: &dyn Fn(&Value) -> LoadResult<T>,
    ) -> LoadResult<FieldValue<T>> {
        match self {
            FieldStrategy::Identity => Ok(FieldValue::Raw(ctx.value.clone())),
            FieldStrategy::Timestamp => {
                let raw = ctx
                    .value
                    .as_str()
                    .ok_or_else(|| LoadError::invalid_type(ctx.field, "an ISO-8601 string", ctx.value))?;
                parse_timestamp(raw)
                    .map(FieldValue::Timestamp)
                    .ok_or_else(|| LoadError::InvalidTimestamp {
                        field: ctx.field.to_string(),
                        value: raw.to_string(),
                    })
            }
            FieldStrategy::Nested => match ctx.value {
                // An explicit null means "no children".
                Value::Null => Ok(FieldValue::Nested(Vec::new())),
                Value::Array(children) => children
                    .iter()
                    .map(load_record)
                    .collect::<LoadResult<Vec<_>>>()
                    .map(FieldValue::Nested),
                other => Err(LoadError::invalid_type(ctx.field, "an array of records", other)),
            },
        }
    }
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset forms RFC 3339 does not cover (no seconds).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Parse an ISO-8601 timestamp into a timezone-naive date-time.
///
/// Accepts `T` or a space between date and time, hour, minute or second
/// precision with optional fractional seconds, and a bare date (midnight).
/// Timestamps with an explicit offset keep their wall-clock time and drop the
/// offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Some(parsed) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(parsed);
    }

    // chrono always wants minutes; hour-only input is matched with them added.
    let padded = format!("{raw}:00");
    if let Some(parsed) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&padded, format).ok())
    {
        return Some(parsed);
    }

    if let Some(with_offset) = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    }) {
        return Some(with_offset.naive_local());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
