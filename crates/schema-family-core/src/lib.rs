// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for schema-family.
//!
//! This crate provides the traits implemented by code generated with
//! `#[derive(SchemaFamily)]` and `schema_family!`. It can also be used
//! standalone to describe hand-written model families.
//!
//! # Overview
//!
//! - [`Shape`]: Metadata shared by every generated type
//! - [`Identified`]: Types that carry an identifier (`Read`, table)
//! - [`TableShape`]: The storage-backed type of a family
//! - [`Family`]: Ties the five types of one family together
//! - [`prelude`]: Convenient re-exports
//!
//! # Family Layout
//!
//! ```text
//! WidgetBase ──┬── WidgetCreate   (input, no id)
//!              ├── WidgetRead     (output, id)
//!              ├── WidgetUpdate   (input, no id)
//!              └── Widget         (table, id + storage config)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub mod prelude;

pub use id::{IdGeneration, IdSpec, UuidVersion};

/// Role of a generated type inside its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    /// Fields common to every variant.
    Base,

    /// Input shape for creating a record.
    Create,

    /// Output shape for a retrieved record.
    Read,

    /// Input shape for modifying a record.
    Update,

    /// Storage-backed representation.
    Table
}

impl ShapeKind {
    /// All kinds in declaration order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Base,
        ShapeKind::Create,
        ShapeKind::Read,
        ShapeKind::Update,
        ShapeKind::Table
    ];

    /// Check if this kind is mapped to a storage table.
    pub const fn is_storage_backed(&self) -> bool {
        matches!(self, Self::Table)
    }

    /// Check if this kind carries the identifier field.
    ///
    /// The identifier does not exist before persistence, so input shapes
    /// never carry it.
    pub const fn has_id(&self) -> bool {
        matches!(self, Self::Read | Self::Table)
    }

    /// Suffix appended to the family prefix to build the type name.
    ///
    /// The table type uses the bare prefix.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Table => ""
        }
    }

    /// Build the type name for a family prefix.
    ///
    /// ```rust
    /// use schema_family_core::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::Create.type_name("Widget"), "WidgetCreate");
    /// assert_eq!(ShapeKind::Table.type_name("Widget"), "Widget");
    /// ```
    pub fn type_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.suffix())
    }
}

/// Static description of one field of a generated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSpec {
    /// Field name as written in Rust.
    pub name: &'static str,

    /// Field type as written in Rust (token text).
    pub ty: &'static str,

    /// Maximum length in characters, if constrained.
    pub max_length: Option<usize>
}

impl FieldSpec {
    /// Create an unconstrained field description.
    pub const fn new(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            ty,
            max_length: None
        }
    }

    /// Attach a `max_length` constraint.
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

/// Metadata implemented by every type of a generated family.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(WidgetCreate::NAME, "WidgetCreate");
/// assert!(WidgetCreate::field("id").is_none());
/// assert!(!WidgetCreate::STORAGE_BACKED);
/// ```
pub trait Shape {
    /// Role of this type in its family.
    const KIND: ShapeKind;

    /// Type name (e.g. `"WidgetRead"`).
    const NAME: &'static str;

    /// Fields in declaration order, identifier included when present.
    const FIELDS: &'static [FieldSpec];

    /// Whether this type is mapped to a storage table.
    const STORAGE_BACKED: bool = Self::KIND.is_storage_backed();

    /// Look up a field by name.
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    fn field_names() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|f| f.name).collect()
    }
}

/// Types carrying the family identifier.
///
/// Implemented for the `Read` and table types only.
pub trait Identified {
    /// Identifier type (e.g. `i64`, `Uuid`).
    type Id;

    /// Borrow the identifier.
    fn id(&self) -> &Self::Id;
}

/// The storage-backed type of a family.
///
/// No other generated type implements this trait.
pub trait TableShape: Shape + Identified {
    /// Table name (e.g. `"widget"`).
    const TABLE_NAME: &'static str;

    /// Optional schema qualifying the table.
    const SCHEMA: Option<&'static str>;

    /// Identifier declaration and storage configuration.
    const ID: IdSpec;

    /// Table name qualified with the schema when one is set.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// Widget::full_table_name() // "widget" or "inventory.widget"
    /// ```
    fn full_table_name() -> String {
        match Self::SCHEMA {
            Some(schema) => format!("{}.{}", schema, Self::TABLE_NAME),
            None => Self::TABLE_NAME.to_string()
        }
    }
}

/// Links the five types of one family.
///
/// Implemented on the table type so generic code can reach every variant
/// from it.
///
/// ```rust,ignore
/// fn describe<F: Family>() -> [&'static str; 5] {
///     [
///         <F::Base as Shape>::NAME,
///         <F::Create as Shape>::NAME,
///         <F::Read as Shape>::NAME,
///         <F::Update as Shape>::NAME,
///         F::NAME,
///     ]
/// }
/// ```
pub trait Family: TableShape + Sized {
    /// Family prefix (e.g. `"Widget"`).
    const PREFIX: &'static str;

    /// Common fields.
    type Base: Shape;

    /// Creation input.
    type Create: Shape + Into<Self::Base>;

    /// Retrieval output.
    type Read: Shape + Identified<Id = Self::Id> + From<Self>;

    /// Modification input.
    type Update: Shape + Into<Self::Base>;
}
