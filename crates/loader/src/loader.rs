//! The generic record loader.

use std::borrow::Borrow;
use std::collections::HashMap;

use serde_json::Value;

use stockroom_core::{LoadError, LoadResult};

use crate::fields::Fields;
use crate::strategy::{FieldContext, FieldStrategy};

/// One flat input record: field name to raw value.
pub type Record = serde_json::Map<String, Value>;

/// Builds a target object from a record's transformed fields.
///
/// Returning an error rejects the record (missing field, wrong type, unexpected
/// field); the loader never patches up a record on the builder's behalf.
pub trait TargetBuilder {
    type Target;

    fn build(&self, fields: Fields<Self::Target>) -> LoadResult<Self::Target>;
}

/// Shapes the sequence of loaded targets into the loader's final output.
pub trait PostProcess<T> {
    type Output;

    fn process<I>(&self, targets: I) -> Self::Output
    where
        I: Iterator<Item = T>;
}

/// Post-processing that just collects targets in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl<T> PostProcess<T> for Collect {
    type Output = Vec<T>;

    fn process<I>(&self, targets: I) -> Self::Output
    where
        I: Iterator<Item = T>,
    {
        targets.collect()
    }
}

/// Loads iterables of key/value records into object structures.
///
/// Strategies are fixed when the loader is configured; fields without a
/// registered strategy use the default one (identity unless overridden).
#[derive(Debug, Clone)]
pub struct Loader<B> {
    strategies: HashMap<&'static str, FieldStrategy>,
    default_strategy: FieldStrategy,
    builder: B,
}

impl<B> Loader<B>
where
    B: TargetBuilder,
{
    pub fn new(builder: B) -> Self {
        Self {
            strategies: HashMap::new(),
            default_strategy: FieldStrategy::Identity,
            builder,
        }
    }

    pub fn with_strategy(mut self, field: &'static str, strategy: FieldStrategy) -> Self {
        self.strategies.insert(field, strategy);
        self
    }

    pub fn with_default_strategy(mut self, strategy: FieldStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    pub fn strategy_for(&self, field: &str) -> FieldStrategy {
        self.strategies
            .get(field)
            .copied()
            .unwrap_or(self.default_strategy)
    }

    /// Load a single record, resolving nested records depth-first.
    pub fn load_record(&self, value: &Value) -> LoadResult<B::Target> {
        let record: &Record = value.as_object().ok_or_else(|| LoadError::not_an_object(value))?;
        let load_nested = |child: &Value| self.load_record(child);

        let mut fields = Fields::default();
        for (field, raw) in record {
            let ctx = FieldContext { field, value: raw };
            let transformed = self.strategy_for(field).transform(ctx, &load_nested)?;
            fields.insert(field.clone(), transformed);
        }

        self.builder.build(fields)
    }

    /// Lazily load records, tagging any failure with the record's position.
    pub fn load_iter<'a, I>(&'a self, records: I) -> impl Iterator<Item = LoadResult<B::Target>> + 'a
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
        I::IntoIter: 'a,
    {
        records
            .into_iter()
            .enumerate()
            .map(move |(index, record)| {
                self.load_record(record.borrow())
                    .map_err(|err| err.at_record(index))
            })
    }

    /// Load every record and post-process the results.
    ///
    /// The first failing record aborts the load; post-processing output built
    /// from the records before it is discarded.
    pub fn load<I, P>(&self, records: I, post: &P) -> LoadResult<P::Output>
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
        P: PostProcess<B::Target>,
    {
        let mut failure = None;
        let mut loaded = 0usize;

        let targets = self.load_iter(records).map_while(|result| match result {
            Ok(target) => {
                loaded += 1;
                Some(target)
            }
            Err(err) => {
                failure = Some(err);
                None
            }
        });
        let output = post.process(targets);

        match failure {
            Some(err) => {
                tracing::debug!(loaded, error = %err, "record load aborted");
                Err(err)
            }
            None => {
                tracing::debug!(loaded, "records loaded");
                Ok(output)
            }
        }
    }
}
