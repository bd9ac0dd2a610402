// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A base field may not reuse the identifier name.

#![allow(dead_code)]

use schema_family::SchemaFamily;

#[derive(SchemaFamily)]
#[family(id = "int")]
pub struct WidgetBase {
    pub id: i64,
    pub name: String,
}

fn main() {}
