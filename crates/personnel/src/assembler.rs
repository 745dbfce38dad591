//! Loads personnel records (a forest of managers and their reports) into a
//! [`Personnel`] directory.

use serde_json::Value;

use stockroom_core::{LoadResult, PersonId};
use stockroom_loader::{FieldStrategy, Fields, Loader, PostProcess, TargetBuilder};

use crate::directory::Personnel;
use crate::person::{Credential, Person};

pub const FIELD_NAME: &str = "user_name";
pub const FIELD_CREDENTIAL: &str = "password";
pub const FIELD_REPORTS: &str = "head_of";

/// One personnel record with its reports already built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonNode {
    pub person: Person,
    pub reports: Vec<PersonNode>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonNodeBuilder;

impl TargetBuilder for PersonNodeBuilder {
    type Target = PersonNode;

    fn build(&self, mut fields: Fields<PersonNode>) -> LoadResult<PersonNode> {
        let name = fields.take_opt_str(FIELD_NAME)?;
        let credential = fields.take_opt_str(FIELD_CREDENTIAL)?.map(Credential::new);
        let reports = fields.take_nested(FIELD_REPORTS)?;
        fields.finish()?;

        Ok(PersonNode {
            person: Person::employee(name, credential),
            reports,
        })
    }
}

/// Flattens the loaded forest into a directory, depth-first pre-order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenForest;

impl PostProcess<PersonNode> for FlattenForest {
    type Output = Personnel;

    fn process<I>(&self, roots: I) -> Personnel
    where
        I: Iterator<Item = PersonNode>,
    {
        let mut directory = Personnel::new();
        for root in roots {
            flatten_into(root, None, &mut directory);
        }
        directory
    }
}

fn flatten_into(node: PersonNode, manager: Option<PersonId>, directory: &mut Personnel) {
    let id = directory.push(node.person, manager);
    for report in node.reports {
        flatten_into(report, Some(id), directory);
    }
}

/// Loader configuration for personnel records.
#[derive(Debug, Clone)]
pub struct PersonnelAssembler {
    loader: Loader<PersonNodeBuilder>,
}

impl Default for PersonnelAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonnelAssembler {
    pub fn new() -> Self {
        Self {
            loader: Loader::new(PersonNodeBuilder).with_strategy(FIELD_REPORTS, FieldStrategy::Nested),
        }
    }

    /// Load and flatten personnel records; any malformed record aborts the load.
    pub fn assemble<I>(&self, records: I) -> LoadResult<Personnel>
    where
        I: IntoIterator,
        I::Item: core::borrow::Borrow<Value>,
    {
        let personnel = self.loader.load(records, &FlattenForest)?;
        tracing::debug!(people = personnel.len(), roots = personnel.roots().len(), "personnel assembled");
        Ok(personnel)
    }
}
