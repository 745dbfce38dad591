//! Deciding how much of an order can be served from current stock.
//!
//! Planning is advisory: stock is never decremented.

/// Outcome of checking a requested quantity against availability.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrderPlan {
    /// Nothing was requested.
    Nothing,
    /// The full requested quantity is available.
    Fulfil(usize),
    /// More was requested than is in stock; at most `available` can be ordered.
    ExceedsStock { requested: usize, available: usize },
}

pub fn plan_order(requested: usize, available: usize) -> OrderPlan {
    match requested {
        0 => OrderPlan::Nothing,
        n if n <= available => OrderPlan::Fulfil(n),
        n => OrderPlan::ExceedsStock {
            requested: n,
            available,
        },
    }
}
