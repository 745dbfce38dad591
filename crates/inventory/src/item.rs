use chrono::{Local, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// One stocked unit.
///
/// Items do not know which warehouse holds them; that is the warehouse's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    state: String,
    category: String,
    arrived_at: NaiveDateTime,
}

/// Case-folded form of an item name, used for case-insensitive matching.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

impl Item {
    pub fn new(state: impl Into<String>, category: impl Into<String>, arrived_at: NaiveDateTime) -> Self {
        Self {
            state: state.into(),
            category: category.into(),
            arrived_at,
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn arrived_at(&self) -> NaiveDateTime {
        self.arrived_at
    }

    /// `"<state> <category>"`, e.g. `"Blue Remote control"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.state, self.category)
    }

    /// Case-insensitive comparison against the full name.
    pub fn matches_name(&self, name: &str) -> bool {
        name_key(&self.full_name()) == name_key(name)
    }

    /// Exact comparison: categories are canonical tags, not free text.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Whole days between arrival and `now`, rounded down.
    ///
    /// Arrivals in the future yield negative ages (e.g. half a day ahead is -1).
    pub fn days_in_storage_at(&self, now: NaiveDateTime) -> i64 {
        (now - self.arrived_at)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
    }

    /// Days in storage as of the local wall clock.
    pub fn days_in_storage(&self) -> i64 {
        self.days_in_storage_at(Local::now().naive_local())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.state, self.category)
    }
}
