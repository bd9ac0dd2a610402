// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Families are declared on structs only.

#![allow(dead_code)]

use schema_family::SchemaFamily;

#[derive(SchemaFamily)]
#[family(id = "int")]
pub enum WidgetBase {
    Small,
    Large,
}

fn main() {}
