// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Visibility of the stencil is carried to every member.

mod inventory {
    schema_family::schema_family! {
        #[family(id(ty = "u32", generated = "storage"))]
        pub(crate) struct Bin;
    }
}

fn main() {
    let bin = inventory::Bin::with_id(
        3,
        inventory::BinCreate {
            name: "A-1".to_string(),
        },
    );
    assert_eq!(bin.id, 3u32);
}
