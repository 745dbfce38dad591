//! Shared test data: the eight-item reference stock and record generators.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use serde_json::{Value, json};

use stockroom_inventory::{StockAssembler, Warehouse};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

pub fn personnel_records() -> Vec<Value> {
    vec![json!({
        "user_name": "Tomek",
        "password": "q",
        "head_of": [{"user_name": "Ania", "password": "hunter2", "head_of": []}],
    })]
}

pub fn stock_records() -> Vec<Value> {
    vec![
        json!({"state": "Black", "category": "Smartwatch", "warehouse": 4, "date_of_stock": "2021-07-20 03:51:06"}),
        json!({"state": "High quality", "category": "Remote control", "warehouse": 2, "date_of_stock": "2021-07-29 01:19:44"}),
        json!({"state": "Exceptional", "category": "Remote control", "warehouse": 4, "date_of_stock": "2019-08-26 23:15:50"}),
        json!({"state": "Blue", "category": "Remote control", "warehouse": 3, "date_of_stock": "2020-09-02 07:19:05"}),
        json!({"state": "Brand new", "category": "Remote control", "warehouse": 3, "date_of_stock": "2019-11-16 14:35:51"}),
        json!({"state": "Blue", "category": "Remote control", "warehouse": 1, "date_of_stock": "2020-06-25 22:45:20"}),
        json!({"state": "Blue", "category": "Remote control", "warehouse": 3, "date_of_stock": "2020-11-07 00:38:09"}),
        json!({"state": "Blue", "category": "Remote control", "warehouse": 2, "date_of_stock": "2019-08-19 09:13:20"}),
    ]
}

pub fn assemble(records: &[Value]) -> Vec<Warehouse> {
    StockAssembler::new().assemble(records).unwrap()
}

pub fn reference_warehouses() -> Vec<Warehouse> {
    assemble(&stock_records())
}

/// Random well-formed stock records drawn from a small vocabulary, so names and
/// categories collide often.
pub fn stock_records_strategy() -> impl Strategy<Value = Vec<Value>> {
    let state = prop::sample::select(vec!["Blue", "blue", "Black", "Brand new", "Used"]);
    let category = prop::sample::select(vec!["Remote control", "Smartwatch", "Book", "Laptop"]);
    let record = (state, category, -1i64..6, 0u32..28).prop_map(|(state, category, warehouse, day)| {
        json!({
            "state": state,
            "category": category,
            "warehouse": warehouse,
            "date_of_stock": format!("2020-02-{:02}T10:00:00", day + 1),
        })
    });
    prop::collection::vec(record, 0..40)
}
