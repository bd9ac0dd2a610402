// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier type and storage configuration.
//!
//! Parsed from the `id` key of `#[family(...)]`, either as a shorthand
//! string or as a nested list:
//!
//! | Form | Type | Generation |
//! |------|------|------------|
//! | `id = "int"` | `i64` | storage (auto-increment) |
//! | `id = "uuid"` | `uuid::Uuid` | UUID v4 factory |
//! | `id(ty = "i32")` | `i32` | inferred: storage |
//! | `id(generated = "uuid", uuid = "v7")` | `uuid::Uuid` | UUID v7 factory |
//! | `id(ty = "String", generated = "none", field = "code")` | `String` | caller supplied |
//!
//! The type and configuration are passed through to the table declaration
//! unchanged; only combinations that cannot work are rejected.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::Span;
use quote::{ToTokens, quote};
use syn::{Ident, Type};

use super::uuid_version::UuidVersion;

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize"
];

const NON_INTEGER_TYPES: &[&str] = &["Uuid", "String", "str", "bool", "char", "f32", "f64"];

/// How the identifier value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGeneration {
    /// Assigned by storage on insert.
    Storage,

    /// Produced by a `Uuid` constructor when the record is built.
    Uuid(UuidVersion),

    /// Supplied by the caller.
    Manual
}

impl FromMeta for IdGeneration {
    /// Accepts `"storage"`, `"auto"`, `"auto_increment"`, `"uuid"`,
    /// `"default_factory"`, `"none"` and `"manual"`.
    ///
    /// The UUID version is configured separately with `uuid = "..."`.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "storage" | "auto" | "auto_increment" | "autoincrement" => Ok(Self::Storage),
            "uuid" | "default_factory" => Ok(Self::Uuid(UuidVersion::default())),
            "none" | "manual" => Ok(Self::Manual),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Parsed identifier declaration.
#[derive(Debug, Clone)]
pub struct IdDef {
    /// Field name, `id` unless overridden.
    pub field: Ident,

    /// Identifier type.
    pub ty: Type,

    /// Primary key designation. Always `true` after validation.
    pub primary_key: bool,

    /// Value generation strategy.
    pub generation: IdGeneration
}

/// Raw `id(...)` list before validation.
#[derive(Debug, FromMeta)]
struct IdArgs {
    #[darling(default)]
    ty: Option<Type>,

    #[darling(default = "default_primary_key")]
    primary_key: bool,

    #[darling(default)]
    generated: Option<IdGeneration>,

    #[darling(default)]
    uuid: Option<UuidVersion>,

    #[darling(default)]
    field: Option<Ident>
}

fn default_primary_key() -> bool {
    true
}

fn default_field() -> Ident {
    Ident::new("id", Span::call_site())
}

/// Last path segment of a type, e.g. `Uuid` for `::uuid::Uuid`.
fn last_segment(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            path.path.segments.last().map(|s| s.ident.to_string())
        }
        Type::Reference(reference) => last_segment(&reference.elem),
        _ => None
    }
}

/// Pick a generation strategy when none is configured.
fn infer_generation(ty: &Type) -> IdGeneration {
    match last_segment(ty).as_deref() {
        Some("Uuid") => IdGeneration::Uuid(UuidVersion::default()),
        Some(name) if INTEGER_TYPES.contains(&name) => IdGeneration::Storage,
        _ => IdGeneration::Manual
    }
}

impl IdArgs {
    fn resolve(self) -> darling::Result<IdDef> {
        if !self.primary_key {
            return Err(darling::Error::custom(
                "the table identifier must be its primary key; remove `primary_key = false`"
            ));
        }

        let mut generation = match (&self.generated, &self.ty) {
            (Some(generation), _) => *generation,
            (None, Some(ty)) => infer_generation(ty),
            (None, None) => {
                return Err(darling::Error::custom(
                    "`id(...)` requires `ty = \"...\"` or `generated = \"...\"`"
                ));
            }
        };

        if let Some(version) = self.uuid {
            match &mut generation {
                IdGeneration::Uuid(v) => *v = version,
                _ => {
                    return Err(darling::Error::custom(
                        "`uuid = \"...\"` only applies to `generated = \"uuid\"`"
                    ));
                }
            }
        }

        let ty = match self.ty {
            Some(ty) => ty,
            None => match generation {
                IdGeneration::Uuid(_) => syn::parse_quote!(uuid::Uuid),
                IdGeneration::Storage => syn::parse_quote!(i64),
                IdGeneration::Manual => {
                    return Err(darling::Error::custom(
                        "`generated = \"none\"` requires an explicit `ty = \"...\"`"
                    ));
                }
            }
        };

        check_compatible(&ty, generation)?;

        Ok(IdDef {
            field: self.field.unwrap_or_else(default_field),
            ty,
            primary_key: true,
            generation
        })
    }
}

/// Reject type/generation pairs that cannot produce a value.
fn check_compatible(ty: &Type, generation: IdGeneration) -> darling::Result<()> {
    let segment = last_segment(ty);
    let type_text = IdDef::type_text_of(ty);

    match generation {
        IdGeneration::Uuid(_) if segment.as_deref() != Some("Uuid") => {
            Err(darling::Error::custom(format!(
                "UUID generation needs a `Uuid` identifier type, found `{}`",
                type_text
            ))
            .with_span(ty))
        }
        IdGeneration::Storage
            if segment
                .as_deref()
                .is_some_and(|s| NON_INTEGER_TYPES.contains(&s)) =>
        {
            Err(darling::Error::custom(format!(
                "storage-assigned identifiers must be integers, found `{}`",
                type_text
            ))
            .with_span(ty))
        }
        _ => Ok(())
    }
}

impl IdDef {
    /// Build an identifier with the `id` field name and primary key set.
    fn shorthand(ty: Type, generation: IdGeneration) -> Self {
        Self {
            field: default_field(),
            ty,
            primary_key: true,
            generation
        }
    }

    /// Identifier type as compact token text, e.g. `uuid::Uuid`.
    pub fn type_text(&self) -> String {
        Self::type_text_of(&self.ty)
    }

    fn type_text_of(ty: &Type) -> String {
        ty.to_token_stream().to_string().replace(' ', "")
    }

    /// Expression producing a fresh identifier, for factory-generated ids.
    pub fn factory_expr(&self) -> Option<proc_macro2::TokenStream> {
        match self.generation {
            IdGeneration::Uuid(version) => {
                let ty = &self.ty;
                let ctor = Ident::new(version.constructor(), Span::call_site());
                Some(quote! { <#ty>::#ctor() })
            }
            IdGeneration::Storage | IdGeneration::Manual => None
        }
    }
}

impl FromMeta for IdDef {
    /// Shorthands offered by the interactive generator: `"int"` and
    /// `"uuid"` (case-insensitive).
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "int" | "integer" => Ok(Self::shorthand(
                syn::parse_quote!(i64),
                IdGeneration::Storage
            )),
            "uuid" => Ok(Self::shorthand(
                syn::parse_quote!(uuid::Uuid),
                IdGeneration::Uuid(UuidVersion::default())
            )),
            _ => Err(darling::Error::unknown_value(value))
        }
    }

    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        IdArgs::from_list(items)?.resolve()
    }
}
