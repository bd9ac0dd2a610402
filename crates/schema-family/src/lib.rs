// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # schema-family
//!
//! One crate, all features. Re-exports:
//! - [`SchemaFamily`] derive and [`schema_family!`] from `schema-family-impl`
//! - All types from `schema-family-core` ([`Shape`], [`TableShape`],
//!   [`Family`])
//! - `validator`'s `Validate` and `ValidationErrors` (feature `validate`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use schema_family::{Shape, TableShape, schema_family};
//!
//! schema_family! {
//!     #[family(id = "uuid")]
//!     pub struct Widget;
//! }
//!
//! assert_eq!(Widget::TABLE_NAME, "widget");
//! assert!(WidgetCreate::field("id").is_none());
//! ```

pub use schema_family_core::*;
pub use schema_family_impl::{SchemaFamily, schema_family};
#[cfg(feature = "validate")]
#[cfg_attr(docsrs, doc(cfg(feature = "validate")))]
pub use validator::{self, Validate, ValidationErrors};
