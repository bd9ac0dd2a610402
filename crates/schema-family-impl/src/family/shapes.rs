// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct generation for the family members.
//!
//! For a `Widget` family with an integer identifier:
//!
//! ```rust,ignore
//! pub struct WidgetBase   { pub name: String }            // stencil only
//! pub struct WidgetCreate { pub name: String }
//! pub struct WidgetRead   { pub name: String, pub id: i64 }
//! pub struct WidgetUpdate { pub name: String }
//! pub struct Widget       { pub name: String, pub id: i64 }
//! ```
//!
//! Every member repeats the same field declarations, so a change to the
//! base is reflected in all of them, `#[validate(...)]` rules included. All
//! members derive `Debug`, `Clone`, `PartialEq`, serde's
//! `Serialize`/`Deserialize` and `validator::Validate`.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    parse::{FamilyDef, IdGeneration},
    variant::Variant
};
use crate::utils::fields;

/// Generate the struct of every emitted variant.
pub fn generate(family: &FamilyDef) -> TokenStream {
    let structs = Variant::ALL
        .into_iter()
        .filter(|v| family.emits(*v))
        .map(|v| generate_struct(family, v));

    quote! { #(#structs)* }
}

fn generate_struct(family: &FamilyDef, variant: Variant) -> TokenStream {
    let vis = &family.vis;
    let name = family.ident(variant);
    let fields = fields::declarations(family.fields());

    let docs = if variant == Variant::Table && !family.docs.is_empty() {
        let docs = &family.docs;
        quote! { #(#docs)* }
    } else {
        let doc = variant.doc(&family.prefix_str());
        quote! { #[doc = #doc] }
    };

    let id = variant.has_id().then(|| id_declaration(family));

    quote! {
        #docs
        #[derive(
            Debug,
            Clone,
            PartialEq,
            serde::Serialize,
            serde::Deserialize,
            validator::Validate
        )]
        #vis struct #name {
            #(#fields,)*
            #id
        }
    }
}

fn id_declaration(family: &FamilyDef) -> TokenStream {
    let name = &family.id.field;
    let ty = &family.id.ty;
    let doc = match family.id.generation {
        IdGeneration::Storage => "Primary key, assigned by storage.",
        IdGeneration::Uuid(_) => "Primary key, generated when the record is built.",
        IdGeneration::Manual => "Primary key, supplied by the caller."
    };

    quote! {
        #[doc = #doc]
        pub #name: #ty
    }
}
