// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier and base fields named like the generated method parameters.

use schema_family::SchemaFamily;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, SchemaFamily)]
#[family(id(ty = "i64", generated = "storage", field = "dto"))]
pub struct TicketBase {
    pub input: String,
}

fn main() {
    let mut ticket = Ticket::with_id(
        5,
        TicketCreate {
            input: "open".to_string(),
        },
    );
    ticket.apply(TicketUpdate {
        input: "closed".to_string(),
    });
    assert_eq!(ticket.dto, 5);
    assert_eq!(ticket.input, "closed");
}
