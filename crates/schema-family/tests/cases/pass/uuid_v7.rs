// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Time-ordered UUID ids.

use schema_family::{IdGeneration, SchemaFamily, TableShape, UuidVersion};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, SchemaFamily)]
#[family(id(generated = "uuid", uuid = "v7"))]
pub struct EventBase {
    pub kind: String,
}

fn main() {
    let event = Event::from(EventCreate {
        kind: "login".to_string(),
    });
    assert_eq!(event.id.get_version_num(), 7);
    assert_eq!(
        Event::ID.generation,
        IdGeneration::Uuid(UuidVersion::V7)
    );
}
