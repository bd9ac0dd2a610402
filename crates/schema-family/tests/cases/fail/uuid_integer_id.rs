// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! UUID generation cannot produce an integer identifier.

schema_family::schema_family! {
    #[family(id(ty = "i64", generated = "uuid"))]
    pub struct Widget;
}

fn main() {}
