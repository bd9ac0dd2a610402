// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macros behind `schema-family`. Depend on `schema-family`
//! instead; generated code refers to `::schema_family`.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[family(...)]`
//!
//! ```rust,ignore
//! #[family(
//!     id = "int",            // Required: "int" | "uuid" | id(...)
//!     table = "widgets",     // Optional: default is the lower-cased prefix
//!     schema = "inventory"   // Optional: schema qualifying the table
//! )]
//! ```
//!
//! ## Identifier `id(...)`
//!
//! ```rust,ignore
//! id(
//!     ty = "i64",            // Identifier type
//!     generated = "storage", // "storage" | "uuid" | "none"
//!     uuid = "v7",           // "v4" | "v7", only with generated = "uuid"
//!     primary_key,           // Always true; `primary_key = false` is an error
//!     field = "id"           // Identifier field name
//! )
//! ```
//!
//! ## Field-Level `#[validate(...)]`
//!
//! Passed through to every generated member, which derives
//! `validator::Validate`. A literal `length(max = N)` is also recorded in the
//! field metadata and only allowed on string fields.
//!
//! ```rust,ignore
//! #[validate(length(max = 255))]
//! pub name: String,
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Type | Fields | Storage-backed |
//! |----------------|--------|----------------|
//! | `WidgetBase` | common | no |
//! | `WidgetCreate` | common | no |
//! | `WidgetRead` | common + id | no |
//! | `WidgetUpdate` | common | no |
//! | `Widget` | common + id | yes |

mod family;
mod utils;

use proc_macro::TokenStream;

/// Generate the Create/Read/Update/Table members for a hand-written base.
///
/// Apply to a non-generic struct named `<Prefix>Base`. Its fields are copied
/// into every member; the identifier is added to the read and table types.
///
/// # Example
///
/// ```rust,ignore
/// use schema_family::SchemaFamily;
///
/// #[derive(
///     Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, validator::Validate, SchemaFamily,
/// )]
/// #[family(id = "uuid", table = "products")]
/// pub struct ProductBase {
///     #[validate(length(max = 120))]
///     pub title: String,
///     pub description: Option<String>,
/// }
///
/// // Generates ProductCreate, ProductRead, ProductUpdate and Product.
/// let product = Product::from(ProductCreate {
///     title: "Lamp".into(),
///     description: None,
/// });
/// ```
#[proc_macro_derive(SchemaFamily, attributes(family, validate))]
pub fn derive_schema_family(input: TokenStream) -> TokenStream {
    family::derive(input)
}

/// Stamp out the canonical family from a prefix and identifier config.
///
/// The base holds a single `name: String` field limited to 255 characters.
///
/// # Example
///
/// ```rust,ignore
/// schema_family::schema_family! {
///     /// Things we sell.
///     #[family(id = "int")]
///     pub struct Widget;
/// }
///
/// // WidgetBase { name }, WidgetCreate { name }, WidgetRead { name, id },
/// // WidgetUpdate { name }, Widget { name, id }
/// let widget = Widget::with_id(1, WidgetCreate { name: "Gear".into() });
/// ```
#[proc_macro]
pub fn schema_family(input: TokenStream) -> TokenStream {
    family::stencil(input)
}
