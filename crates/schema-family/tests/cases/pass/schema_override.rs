// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom table name qualified by a schema.

use schema_family::{TableShape, schema_family};

schema_family! {
    #[family(id = "int", table = "order_items", schema = "shop")]
    pub struct OrderItem;
}

fn main() {
    assert_eq!(OrderItem::TABLE_NAME, "order_items");
    assert_eq!(OrderItem::SCHEMA, Some("shop"));
    assert_eq!(OrderItem::full_table_name(), "shop.order_items");
}
