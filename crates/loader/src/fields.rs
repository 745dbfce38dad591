//! Transformed field set handed to a [`TargetBuilder`](crate::TargetBuilder).

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde_json::Value;

use stockroom_core::{LoadError, LoadResult};

/// A single field after its strategy ran.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    Raw(Value),
    Timestamp(NaiveDateTime),
    Nested(Vec<T>),
}

/// Named, transformed values of one record.
///
/// Builders `take_*` the fields they understand and then call [`Fields::finish`],
/// which rejects anything left over.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<T> {
    values: BTreeMap<String, FieldValue<T>>,
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T> FromIterator<(String, FieldValue<T>)> for Fields<T> {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue<T>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Fields<T> {
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue<T>) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove and return a field regardless of its shape.
    pub fn take(&mut self, name: &str) -> Option<FieldValue<T>> {
        self.values.remove(name)
    }

    pub fn take_str(&mut self, name: &str) -> LoadResult<String> {
        self.take_opt_str(name)?.ok_or_else(|| LoadError::missing(name))
    }

    /// Absent and `null` both read as `None`.
    pub fn take_opt_str(&mut self, name: &str) -> LoadResult<Option<String>> {
        match self.take(name) {
            None | Some(FieldValue::Raw(Value::Null)) => Ok(None),
            Some(FieldValue::Raw(Value::String(s))) => Ok(Some(s)),
            Some(FieldValue::Raw(other)) => Err(LoadError::invalid_type(name, "a string", &other)),
            Some(_) => Err(LoadError::InvalidType {
                field: name.to_string(),
                expected: "a string",
                found: "a transformed value",
            }),
        }
    }

    /// Signed integer field; fractions and integers outside `i64` are type errors.
    pub fn take_i64(&mut self, name: &str) -> LoadResult<i64> {
        match self.take(name) {
            None => Err(LoadError::missing(name)),
            Some(FieldValue::Raw(Value::Number(n))) => n.as_i64().ok_or_else(|| LoadError::InvalidType {
                field: name.to_string(),
                expected: "an integer",
                found: if n.is_f64() {
                    "a fractional number"
                } else {
                    "an integer out of range"
                },
            }),
            Some(FieldValue::Raw(other)) => Err(LoadError::invalid_type(name, "an integer", &other)),
            Some(_) => Err(LoadError::InvalidType {
                field: name.to_string(),
                expected: "an integer",
                found: "a transformed value",
            }),
        }
    }

    pub fn take_timestamp(&mut self, name: &str) -> LoadResult<NaiveDateTime> {
        match self.take(name) {
            None => Err(LoadError::missing(name)),
            Some(FieldValue::Timestamp(ts)) => Ok(ts),
            Some(FieldValue::Raw(other)) => Err(LoadError::invalid_type(name, "a timestamp", &other)),
            Some(FieldValue::Nested(_)) => Err(LoadError::InvalidType {
                field: name.to_string(),
                expected: "a timestamp",
                found: "an array",
            }),
        }
    }

    /// Nested targets of a field; an absent field means no children.
    pub fn take_nested(&mut self, name: &str) -> LoadResult<Vec<T>> {
        match self.take(name) {
            None => Ok(Vec::new()),
            Some(FieldValue::Nested(children)) => Ok(children),
            Some(FieldValue::Raw(other)) => {
                Err(LoadError::invalid_type(name, "an array of records", &other))
            }
            Some(FieldValue::Timestamp(_)) => Err(LoadError::InvalidType {
                field: name.to_string(),
                expected: "an array of records",
                found: "a timestamp",
            }),
        }
    }

    /// Fail if any field was not consumed by the builder.
    pub fn finish(self) -> LoadResult<()> {
        match self.values.into_keys().next() {
            Some(field) => Err(LoadError::unexpected(field)),
            None => Ok(()),
        }
    }
}
