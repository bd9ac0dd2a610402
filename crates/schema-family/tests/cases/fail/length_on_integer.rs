// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A maximum length only applies to string fields.

#![allow(dead_code)]

use schema_family::SchemaFamily;

#[derive(SchemaFamily)]
#[family(id = "int")]
pub struct CounterBase {
    #[validate(length(max = 10))]
    pub count: u32,
}

fn main() {}
