// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A base named bare `Base` leaves no family prefix.

#![allow(dead_code)]

use schema_family::SchemaFamily;

#[derive(SchemaFamily)]
#[family(id = "int")]
pub struct Base {
    pub name: String,
}

fn main() {}
