//! Error taxonomy shared by the loader, the assemblers and the query engine.

use thiserror::Error;

use crate::id::WarehouseId;

/// Result type used while turning raw records into domain objects.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type used by lookups where "unknown key" must be told apart from "zero".
pub type LookupResult<T> = Result<T, LookupError>;

/// Load-time failure.
///
/// Always fatal for the whole load; records are never skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A record was not a key/value object.
    #[error("record is not an object (found {found})")]
    NotAnObject { found: &'static str },

    /// A required field was absent.
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A field held a value of the wrong JSON type.
    #[error("field `{field}` must be {expected} (found {found})")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The record carried a field the target does not know about.
    #[error("unexpected field `{field}`")]
    UnexpectedField { field: String },

    /// A timestamp field was not ISO-8601.
    #[error("field `{field}` is not an ISO-8601 timestamp: {value:?}")]
    InvalidTimestamp { field: String, value: String },

    /// Wraps another load error with the position of the offending top-level record.
    #[error("record #{index}: {error}")]
    AtRecord { index: usize, error: Box<LoadError> },
}

impl LoadError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn unexpected(field: impl Into<String>) -> Self {
        Self::UnexpectedField {
            field: field.into(),
        }
    }

    pub fn invalid_type(field: impl Into<String>, expected: &'static str, found: &serde_json::Value) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
            found: json_kind(found),
        }
    }

    pub fn not_an_object(found: &serde_json::Value) -> Self {
        Self::NotAnObject {
            found: json_kind(found),
        }
    }

    /// Attach the index of the top-level record this error came from.
    ///
    /// Already-positioned errors keep their original position.
    pub fn at_record(self, index: usize) -> Self {
        match self {
            positioned @ Self::AtRecord { .. } => positioned,
            other => Self::AtRecord {
                index,
                error: Box::new(other),
            },
        }
    }

    /// The underlying error, with any record position stripped.
    pub fn root(&self) -> &LoadError {
        match self {
            Self::AtRecord { error, .. } => error.root(),
            other => other,
        }
    }
}

/// Recoverable lookup failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No warehouse with this identifier exists in the snapshot.
    #[error("warehouse {0} not found")]
    WarehouseNotFound(WarehouseId),
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn at_record_keeps_outermost_position() {
        let err = LoadError::missing("state").at_record(3).at_record(7);
        assert_eq!(err.to_string(), "record #3: missing field `state`");
        assert_eq!(err.root(), &LoadError::missing("state"));
    }

    #[test]
    fn invalid_type_reports_json_kind() {
        let err = LoadError::invalid_type("warehouse", "an integer", &json!("four"));
        assert_eq!(
            err.to_string(),
            "field `warehouse` must be an integer (found a string)"
        );
    }
}
