// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Caller-supplied identifier under a custom field name.

use schema_family::{Identified, SchemaFamily, TableShape};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, SchemaFamily)]
#[family(id(ty = "String", generated = "none", field = "code"))]
pub struct CountryBase {
    #[validate(length(max = 64))]
    pub name: String,
}

fn main() {
    let country = Country::with_id(
        "NL".to_string(),
        CountryCreate {
            name: "Netherlands".to_string(),
        },
    );
    assert_eq!(country.id(), "NL");
    assert_eq!(Country::ID.field, "code");
    assert_eq!(Country::ID.ty, "String");

    let read = CountryRead::from(country);
    assert_eq!(read.code, "NL");
}
