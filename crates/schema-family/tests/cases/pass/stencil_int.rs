// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Canonical stencil with a storage-assigned integer id.

use schema_family::{Shape, TableShape, schema_family};

schema_family! {
    /// Things we sell.
    #[family(id = "int")]
    pub struct Widget;
}

fn main() {
    let base = WidgetBase {
        name: "Gear".to_string(),
    };
    let create = WidgetCreate::from(base);
    let widget = Widget::with_id(7, create);
    let read = WidgetRead::from(&widget);

    assert_eq!(read.id, 7i64);
    assert_eq!(read.name, "Gear");
    assert_eq!(Widget::TABLE_NAME, "widget");
    assert_eq!(WidgetRead::NAME, "WidgetRead");
}
