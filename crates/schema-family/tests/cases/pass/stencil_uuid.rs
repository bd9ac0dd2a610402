// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Canonical stencil with a UUID id generated in process.

use schema_family::schema_family;
use uuid::Uuid;

schema_family! {
    #[family(id = "uuid")]
    pub struct Gadget;
}

fn main() {
    let gadget = Gadget::from(GadgetCreate {
        name: "Lamp".to_string(),
    });
    let id: Uuid = gadget.id;
    assert!(!id.is_nil());
    assert_eq!(id.get_version_num(), 4);
}
