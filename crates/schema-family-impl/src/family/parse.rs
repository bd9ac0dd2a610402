// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the family generator.
//!
//! Struct-level attributes (`#[family(...)]`) are parsed with darling's
//! `FromDeriveInput`. Field-level `#[validate(...)]` attributes use manual
//! nested-meta parsing.
//!
//! # Data Structures
//!
//! ```text
//! FamilyDef
//! ├── prefix: Ident         (e.g. "Widget")
//! ├── vis: Visibility       (propagated to generated types)
//! ├── table: String         (defaults to the lower-cased prefix)
//! ├── schema: Option<String>
//! ├── id: IdDef
//! │   ├── field: Ident      (default "id")
//! │   ├── ty: Type          (i64, uuid::Uuid, ...)
//! │   ├── primary_key: bool
//! │   └── generation: IdGeneration
//! ├── fields: Vec<FieldDef> (common base fields)
//! └── emit_base: bool       (stencil emits the base struct)
//! ```

mod family;
mod field;
mod id;
mod prefix;
mod uuid_version;

pub use family::FamilyDef;
pub use field::FieldDef;
pub use id::{IdDef, IdGeneration};
pub use uuid_version::UuidVersion;
