//! Flat personnel directory that still knows who reports to whom.

use stockroom_core::PersonId;

use crate::person::Person;

/// Every loaded staff member, stored once, in flattening order.
///
/// Hierarchy is kept as id links: each person has at most one manager and an
/// ordered list of direct reports. Links always point inside the directory and
/// never form a cycle, since they are only created while flattening a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Personnel {
    people: Vec<Person>,
    managers: Vec<Option<PersonId>>,
    reports: Vec<Vec<PersonId>>,
    roots: Vec<PersonId>,
}

impl Personnel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a person below `manager` (or as a new root) and return their id.
    pub(crate) fn push(&mut self, person: Person, manager: Option<PersonId>) -> PersonId {
        let id = PersonId::new(self.people.len());
        self.people.push(person);
        self.managers.push(manager);
        self.reports.push(Vec::new());

        match manager {
            Some(manager) => self.reports[manager.get()].push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.get())
    }

    pub fn get_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.get_mut(id.get())
    }

    /// All people in flattening order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> + '_ {
        self.people
            .iter()
            .enumerate()
            .map(|(index, person)| (PersonId::new(index), person))
    }

    /// Top-level people (those without a manager).
    pub fn roots(&self) -> &[PersonId] {
        &self.roots
    }

    pub fn reports_of(&self, id: PersonId) -> &[PersonId] {
        self.reports.get(id.get()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn manager_of(&self, id: PersonId) -> Option<PersonId> {
        self.managers.get(id.get()).copied().flatten()
    }

    /// Id of the first person, in flattening order, whose name matches exactly.
    ///
    /// Duplicate names resolve to whoever was flattened first (depth-first,
    /// pre-order over the input forest).
    pub fn find_id(&self, name: &str) -> Option<PersonId> {
        self.iter()
            .find(|(_, person)| person.is_named(name))
            .map(|(id, _)| id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.find_id(name).and_then(|id| self.get(id))
    }
}
