//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

/// Identifier of a warehouse, as it appears in stock records.
///
/// Any integer is a valid id, negative ones included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WarehouseId(i64);

/// Position of a person inside a loaded personnel directory.
///
/// Only meaningful for the directory that handed it out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(usize);

macro_rules! impl_numeric_newtype {
    ($t:ty, $inner:ty) => {
        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $t {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $inner {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self)
            }
        }
    };
}

impl_numeric_newtype!(WarehouseId, i64);
impl_numeric_newtype!(PersonId, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warehouse_id_parses_and_displays() {
        let id: WarehouseId = " 4 ".parse().unwrap();
        assert_eq!(id, WarehouseId::new(4));
        assert_eq!(id.to_string(), "4");
        assert_eq!("-1".parse::<WarehouseId>(), Ok(WarehouseId::new(-1)));
        assert!("four".parse::<WarehouseId>().is_err());
        assert!("1.5".parse::<WarehouseId>().is_err());
    }

    #[test]
    fn warehouse_ids_order_numerically() {
        let mut ids = vec![WarehouseId::new(10), WarehouseId::new(-3), WarehouseId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![WarehouseId::new(-3), WarehouseId::new(2), WarehouseId::new(10)]);
    }
}
