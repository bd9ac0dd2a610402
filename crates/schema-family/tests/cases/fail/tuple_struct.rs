// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive input needs named fields.

#![allow(dead_code)]

use schema_family::SchemaFamily;

#[derive(SchemaFamily)]
#[family(id = "int")]
pub struct WidgetBase(String);

fn main() {}
