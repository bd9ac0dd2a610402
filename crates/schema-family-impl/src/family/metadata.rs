// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata trait implementations.
//!
//! | Trait | Implemented for |
//! |-------|-----------------|
//! | `Shape` | all five members |
//! | `Identified` | read and table types |
//! | `TableShape` | table type only |
//! | `Family` | table type only |
//!
//! `TableShape` is the storage-backed marker: no other member implements
//! it, and only the table type reports `ShapeKind::Table`.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    parse::{FamilyDef, IdGeneration, UuidVersion},
    variant::Variant
};
use crate::utils::fields;

/// Generate all metadata impls.
pub fn generate(family: &FamilyDef) -> TokenStream {
    let shapes = Variant::ALL.into_iter().map(|v| generate_shape(family, v));
    let identified = [Variant::Read, Variant::Table]
        .into_iter()
        .map(|v| generate_identified(family, v));
    let table = generate_table_shape(family);
    let family_impl = generate_family(family);

    quote! {
        #(#shapes)*
        #(#identified)*
        #table
        #family_impl
    }
}

fn generate_shape(family: &FamilyDef, variant: Variant) -> TokenStream {
    let name = family.ident(variant);
    let name_str = name.to_string();
    let kind = variant.kind_tokens();

    let mut specs: Vec<TokenStream> = family
        .fields()
        .iter()
        .map(|f| fields::spec(f.name(), &fields::type_text(f), f.max_length))
        .collect();
    if variant.has_id() {
        specs.push(fields::spec(&family.id.field, &family.id.type_text(), None));
    }

    quote! {
        impl ::schema_family::Shape for #name {
            const KIND: ::schema_family::ShapeKind = #kind;
            const NAME: &'static str = #name_str;
            const FIELDS: &'static [::schema_family::FieldSpec] = &[#(#specs),*];
        }
    }
}

fn generate_identified(family: &FamilyDef, variant: Variant) -> TokenStream {
    let name = family.ident(variant);
    let id = &family.id.field;
    let ty = &family.id.ty;

    quote! {
        impl ::schema_family::Identified for #name {
            type Id = #ty;

            fn id(&self) -> &Self::Id {
                &self.#id
            }
        }
    }
}

fn generation_tokens(generation: IdGeneration) -> TokenStream {
    match generation {
        IdGeneration::Storage => quote! { ::schema_family::IdGeneration::Storage },
        IdGeneration::Manual => quote! { ::schema_family::IdGeneration::Manual },
        IdGeneration::Uuid(UuidVersion::V4) => quote! {
            ::schema_family::IdGeneration::Uuid(::schema_family::UuidVersion::V4)
        },
        IdGeneration::Uuid(UuidVersion::V7) => quote! {
            ::schema_family::IdGeneration::Uuid(::schema_family::UuidVersion::V7)
        }
    }
}

fn generate_table_shape(family: &FamilyDef) -> TokenStream {
    let name = family.ident(Variant::Table);
    let table = &family.table;
    let schema = match &family.schema {
        Some(schema) => quote! { ::core::option::Option::Some(#schema) },
        None => quote! { ::core::option::Option::None }
    };
    let field = family.id.field.to_string();
    let ty = family.id.type_text();
    let primary_key = family.id.primary_key;
    let generation = generation_tokens(family.id.generation);

    quote! {
        impl ::schema_family::TableShape for #name {
            const TABLE_NAME: &'static str = #table;
            const SCHEMA: ::core::option::Option<&'static str> = #schema;
            const ID: ::schema_family::IdSpec = ::schema_family::IdSpec {
                field: #field,
                ty: #ty,
                primary_key: #primary_key,
                generation: #generation
            };
        }
    }
}

fn generate_family(family: &FamilyDef) -> TokenStream {
    let table = family.ident(Variant::Table);
    let base = family.ident(Variant::Base);
    let create = family.ident(Variant::Create);
    let read = family.ident(Variant::Read);
    let update = family.ident(Variant::Update);
    let prefix = family.prefix_str();

    quote! {
        impl ::schema_family::Family for #table {
            const PREFIX: &'static str = #prefix;
            type Base = #base;
            type Create = #create;
            type Read = #read;
            type Update = #update;
        }
    }
}
