// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Family-level attribute parsing.
//!
//! This module parses `#[family(...)]` with darling and provides
//! [`FamilyDef`], the structure consumed by every generator.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `id` | Yes | - | Identifier type and configuration |
//! | `table` | No | lower-cased prefix | Storage table name |
//! | `schema` | No | none | Storage schema qualifying the table |

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{Attribute, DeriveInput, Fields, Ident, Visibility};

use super::{field::FieldDef, id::IdDef, prefix};
use crate::family::variant::Variant;

/// Struct-level attributes parsed from `#[family(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(family), supports(struct_named, struct_unit), forward_attrs(doc))]
struct FamilyAttrs {
    /// Struct identifier (`Widget` in the stencil, `WidgetBase` in the derive).
    ident: Ident,

    /// Struct visibility, propagated to generated types.
    vis: Visibility,

    /// Doc comments on the struct.
    attrs: Vec<Attribute>,

    /// Identifier type and storage configuration.
    id: IdDef,

    /// Table name override.
    #[darling(default)]
    table: Option<String>,

    /// Schema qualifying the table.
    #[darling(default)]
    schema: Option<String>
}

/// Complete parsed family definition.
///
/// # Construction
///
/// ```rust,ignore
/// // #[derive(SchemaFamily)] on `WidgetBase { ... }`
/// let family = FamilyDef::from_derive_input(&input)?;
///
/// // schema_family! { #[family(id = "int")] pub struct Widget; }
/// let family = FamilyDef::from_stencil(&input)?;
/// ```
#[derive(Debug)]
pub struct FamilyDef {
    /// Family prefix, also the table type name.
    pub prefix: Ident,

    /// Visibility of every generated type.
    pub vis: Visibility,

    /// Storage table name.
    pub table: String,

    /// Storage schema.
    pub schema: Option<String>,

    /// Identifier declaration.
    pub id: IdDef,

    /// Common fields, in declaration order.
    pub fields: Vec<FieldDef>,

    /// Doc comments for the table type (stencil only).
    pub docs: Vec<Attribute>,

    /// Whether the base struct is emitted.
    ///
    /// The derive input already is the base struct, so only the stencil
    /// emits it.
    pub emit_base: bool
}

impl FamilyDef {
    /// Parse the derive form: a `<Prefix>Base` struct declaring the common
    /// fields.
    ///
    /// # Errors
    ///
    /// - applied to an enum, union, tuple or unit struct
    /// - the struct has generic parameters
    /// - struct name is not `<Prefix>Base` or the prefix is invalid
    /// - missing or incompatible `id`
    /// - a field collides with the identifier field
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(darling::Error::custom(
                        "SchemaFamily requires a struct with named fields"
                    )
                    .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("SchemaFamily can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };
        reject_generics(input)?;

        let attrs = FamilyAttrs::from_derive_input(input)?;
        let prefix = prefix::from_base_ident(&attrs.ident)?;
        let fields = named
            .named
            .iter()
            .map(FieldDef::from_field)
            .collect::<darling::Result<Vec<_>>>()?;

        Self::build(attrs, prefix, fields, Vec::new(), false)
    }

    /// Parse the stencil form: a unit struct named after the prefix.
    ///
    /// The base gets the single `name: String` field bounded to 255
    /// characters.
    ///
    /// # Errors
    ///
    /// - input is not a unit struct or has generic parameters
    /// - the struct name is not a valid prefix
    /// - missing or incompatible `id`
    pub fn from_stencil(input: &DeriveInput) -> darling::Result<Self> {
        let is_unit = matches!(
            &input.data,
            syn::Data::Struct(data) if matches!(data.fields, Fields::Unit)
        );
        if !is_unit {
            return Err(darling::Error::custom(
                "schema_family! expects a unit struct, e.g. `pub struct Widget;`"
            )
            .with_span(&input.ident));
        }
        reject_generics(input)?;

        let attrs = FamilyAttrs::from_derive_input(input)?;
        prefix::check(&attrs.ident)?;

        let prefix = attrs.ident.clone();
        let docs = attrs.attrs.clone();
        Self::build(attrs, prefix, vec![FieldDef::stencil_name()], docs, true)
    }

    fn build(
        attrs: FamilyAttrs,
        prefix: Ident,
        fields: Vec<FieldDef>,
        docs: Vec<Attribute>,
        emit_base: bool
    ) -> darling::Result<Self> {
        if let Some(clash) = fields.iter().find(|f| f.ident == attrs.id.field) {
            return Err(darling::Error::custom(format!(
                "field `{}` collides with the identifier field; the identifier is added to the \
                 read and table types automatically",
                clash.ident
            ))
            .with_span(&clash.ident));
        }

        let table = attrs
            .table
            .unwrap_or_else(|| prefix.to_string().to_case(Case::Flat));

        Ok(Self {
            prefix,
            vis: attrs.vis,
            table,
            schema: attrs.schema,
            id: attrs.id,
            fields,
            docs,
            emit_base
        })
    }

    /// Identifier of one generated type.
    ///
    /// ```rust,ignore
    /// family.ident(Variant::Create) // WidgetCreate
    /// family.ident(Variant::Table)  // Widget
    /// ```
    pub fn ident(&self, variant: Variant) -> Ident {
        Ident::new(
            &format!("{}{}", self.prefix, variant.suffix()),
            Span::call_site()
        )
    }

    /// Family prefix as a string.
    pub fn prefix_str(&self) -> String {
        self.prefix.to_string()
    }

    /// Common fields.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Names of the common fields.
    pub fn field_names(&self) -> Vec<&Ident> {
        self.fields.iter().map(FieldDef::name).collect()
    }

    /// Whether a variant's struct is emitted by this expansion.
    pub fn emits(&self, variant: Variant) -> bool {
        variant != Variant::Base || self.emit_base
    }
}

/// Generated members copy the fields but not the parameters, so generic
/// inputs are refused up front.
fn reject_generics(input: &DeriveInput) -> darling::Result<()> {
    if input.generics.params.is_empty() {
        return Ok(());
    }
    Err(darling::Error::custom(format!(
        "`{}` has generic parameters; a schema family must be declared on a non-generic struct",
        input.ident
    ))
    .with_span(&input.generics))
}
