// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Stencil prefix must start with an uppercase letter.

schema_family::schema_family! {
    #[family(id = "int")]
    pub struct widget;
}

fn main() {}
